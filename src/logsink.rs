//! Operational log sink
//!
//! Every crawl event produces exactly one `[timestamp] message` line,
//! appended to a log file and echoed to stdout so a human can audit a run
//! without re-deriving state from the file system. The sink is passed by
//! reference to the components that log through it; there is no process-wide
//! singleton.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Append-only line writer mirrored to the console
pub struct LogSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl LogSink {
    /// Opens (or creates) the log file at `path` in append mode
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Returns the path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one timestamped line and echoes it to stdout
    ///
    /// Append failures are reported through tracing but never abort the
    /// run; only corpus writes are allowed to do that.
    pub fn log(&self, message: impl AsRef<str>) {
        let line = format!(
            "[{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message.as_ref()
        );
        println!("{}", line);

        let mut file = self.file.lock().unwrap();
        if let Err(e) = writeln!(file, "{}", line) {
            tracing::warn!("Failed to append to log file {}: {}", self.path.display(), e);
        }
    }
}
