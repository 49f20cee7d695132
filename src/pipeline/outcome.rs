use std::fmt;

/// Terminal outcome of processing one candidate URL
///
/// Every URL handed to the pipeline ends in exactly one of these; each is
/// logged once with the running index and total so a full run can be
/// audited from the log alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlOutcome {
    // ===== Success =====
    /// Document extracted, passed all dedup checks, and written to disk
    Stored,

    // ===== Rejections (expected, informational) =====
    /// URL was already processed earlier in this run
    RejectedDuplicateUrl,

    /// Extractor found no body, or the body fell below the minimum word count
    RejectedShort,

    /// Identical body already accepted earlier in this run
    RejectedDuplicateContent,

    /// Fingerprint already present in the on-disk corpus from a prior run
    RejectedAlreadyStored,

    // ===== Errors (isolated to this URL) =====
    /// Fetch exceeded its time bound
    TimedOut,

    /// Fetch failed for any other reason
    Failed,
}

impl CrawlOutcome {
    /// True when a record pair was written for this URL
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored)
    }

    /// True for the expected skip outcomes (dedup and length checks)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::RejectedDuplicateUrl
                | Self::RejectedShort
                | Self::RejectedDuplicateContent
                | Self::RejectedAlreadyStored
        )
    }

    /// True for per-URL faults (the run itself continues)
    pub fn is_error(&self) -> bool {
        matches!(self, Self::TimedOut | Self::Failed)
    }

    /// Short stable label used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::RejectedDuplicateUrl => "duplicate_url",
            Self::RejectedShort => "too_short",
            Self::RejectedDuplicateContent => "duplicate_content",
            Self::RejectedAlreadyStored => "already_stored",
            Self::TimedOut => "timed_out",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CrawlOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
