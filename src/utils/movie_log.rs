//! Flat-file storage for the movie log.
//!
//! Every record is one trimmed line of UTF-8 text. Nothing is cached: each
//! operation re-reads the file, so edits made by hand between commands are
//! picked up immediately.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The filename used when no log path is configured.
pub const DEFAULT_MOVIE_LOG: &str = "movie-log.txt";

/// Errors that can occur while reading or writing the movie log.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The log file does not exist yet.
    #[error("{file_name} file not found")]
    Missing { file_name: String },

    /// Any other filesystem failure.
    #[error("Movie log I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// Result type for movie log operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a search against an existing log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Records containing the query, in file order.
    Matches(Vec<String>),
    /// The log exists but no record matched.
    NoResults,
}

/// Outcome of an `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The record was empty or whitespace only.
    SkippedBlank,
    /// An existing record already contains the new one.
    SkippedDuplicate,
    /// The record spans more than one line.
    SkippedMultiline,
}

/// Outcome of a `delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Number of lines removed.
    Deleted { removed: usize },
    /// No line exactly matched the record.
    RecordNotFound,
}

/// A movie log bound to a single file on disk.
pub struct MovieLog {
    path: PathBuf,
    // Serializes read-modify-write sequences on the file.
    write_lock: Mutex<()>,
}

impl MovieLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The name reported to users when the log is missing.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    fn missing(&self) -> StoreError {
        StoreError::Missing {
            file_name: self.file_name(),
        }
    }

    async fn read_raw(&self) -> StoreResult<String> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(self.missing()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns every record in file order, trimmed.
    ///
    /// Blank lines are kept as empty records. A missing file is reported as
    /// [`StoreError::Missing`], never as an empty list.
    pub async fn list(&self) -> StoreResult<Vec<String>> {
        let contents = self.read_raw().await?;
        let records: Vec<String> = contents
            .lines()
            .map(|line| line.trim().to_string())
            .collect();
        debug!(
            "Read {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Case-insensitive substring search over every record.
    pub async fn search(&self, query: &str) -> StoreResult<SearchOutcome> {
        let needle = query.to_lowercase();
        let matches: Vec<String> = self
            .list()
            .await?
            .into_iter()
            .filter(|record| record.to_lowercase().contains(&needle))
            .collect();

        debug!("Search for '{}' matched {} records", query, matches.len());
        if matches.is_empty() {
            Ok(SearchOutcome::NoResults)
        } else {
            Ok(SearchOutcome::Matches(matches))
        }
    }

    /// Appends `record` unless it is blank, spans several lines or is
    /// already contained in an existing record. Creates the file on first use.
    pub async fn add(&self, record: &str) -> StoreResult<AddOutcome> {
        let record = record.trim();
        if record.is_empty() {
            warn!("Refusing to add a blank record");
            return Ok(AddOutcome::SkippedBlank);
        }
        if record.contains(['\n', '\r']) {
            warn!("Refusing to add a record that spans several lines");
            return Ok(AddOutcome::SkippedMultiline);
        }

        let _guard = self.write_lock.lock().await;

        let existing = match self.read_raw().await {
            Ok(contents) => contents,
            Err(StoreError::Missing { .. }) => String::new(),
            Err(e) => return Err(e),
        };

        // Containment, not equality: "Up" is skipped once "Up (2009)" exists.
        if existing.lines().any(|line| line.trim().contains(record)) {
            info!("'{}' is already in the movie log", record);
            return Ok(AddOutcome::SkippedDuplicate);
        }

        let mut line = String::with_capacity(record.len() + 2);
        if !existing.is_empty() && !existing.ends_with('\n') {
            line.push('\n');
        }
        line.push_str(record);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        info!("Added '{}' to {}", record, self.path.display());
        Ok(AddOutcome::Added)
    }

    /// Removes every line exactly equal to `record` and rewrites the file
    /// with the remaining records in their original order.
    ///
    /// A blank `record` never matches, so blank lines are left alone.
    pub async fn delete(&self, record: &str) -> StoreResult<DeleteOutcome> {
        let record = record.trim();
        if record.is_empty() {
            warn!("Refusing to delete a blank record");
            return Ok(DeleteOutcome::RecordNotFound);
        }
        let _guard = self.write_lock.lock().await;

        let records = self.list().await?;
        let before = records.len();
        let remaining: Vec<String> = records.into_iter().filter(|r| r != record).collect();
        let removed = before - remaining.len();

        if removed == 0 {
            debug!("'{}' not present in {}", record, self.path.display());
            return Ok(DeleteOutcome::RecordNotFound);
        }

        let contents: String = remaining.iter().map(|r| format!("{r}\n")).collect();
        fs::write(&self.path, contents).await?;

        info!(
            "Deleted {} line(s) matching '{}' from {}",
            removed,
            record,
            self.path.display()
        );
        Ok(DeleteOutcome::Deleted { removed })
    }
}
