//! Per-run outcome accounting

use super::CrawlOutcome;

/// Outcome counts for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub total: usize,
    pub stored: usize,
    pub duplicate_url: usize,
    pub too_short: usize,
    pub duplicate_content: usize,
    pub already_stored: usize,
    pub timed_out: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one terminal outcome
    pub fn record(&mut self, outcome: CrawlOutcome) {
        self.total += 1;
        match outcome {
            CrawlOutcome::Stored => self.stored += 1,
            CrawlOutcome::RejectedDuplicateUrl => self.duplicate_url += 1,
            CrawlOutcome::RejectedShort => self.too_short += 1,
            CrawlOutcome::RejectedDuplicateContent => self.duplicate_content += 1,
            CrawlOutcome::RejectedAlreadyStored => self.already_stored += 1,
            CrawlOutcome::TimedOut => self.timed_out += 1,
            CrawlOutcome::Failed => self.failed += 1,
        }
    }

    /// Total expected skips
    pub fn rejected(&self) -> usize {
        self.duplicate_url + self.too_short + self.duplicate_content + self.already_stored
    }

    /// Total per-URL faults
    pub fn errors(&self) -> usize {
        self.timed_out + self.failed
    }

    /// One-line human-readable summary for the log sink
    pub fn summary_line(&self) -> String {
        format!(
            "{} processed: {} stored, {} rejected ({} duplicate URL, {} too short, {} duplicate content, {} already stored), {} timed out, {} failed",
            self.total,
            self.stored,
            self.rejected(),
            self.duplicate_url,
            self.too_short,
            self.duplicate_content,
            self.already_stored,
            self.timed_out,
            self.failed
        )
    }
}
