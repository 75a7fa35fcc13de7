//! Provides the flat-file quote store.
//!
//! The whole file is read on every load and rewritten on every save. There is no
//! locking; concurrent writers race and the last one wins.

use crate::error::Result;
use crate::models::{Quote, QuoteList, DEFAULT_QUOTES, FIELD_SEPARATOR};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default storage file name, resolved against the working directory.
pub const DEFAULT_QUOTES_FILE: &str = "quotes.txt";

/// Quote storage backed by a single line-per-quote text file.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    /// Creates a store for `path`. Nothing is touched on disk until the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the storage file with the default quotes if it does not exist yet.
    ///
    /// An existing file is left untouched, so calling this repeatedly is harmless.
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file or its parent directory cannot be created.
    pub fn ensure_storage(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        info!(
            "Storage file {} not found, creating it with {} default quotes",
            self.path.display(),
            DEFAULT_QUOTES.len()
        );

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Defaults are written in full `text|author` form, "Unknown" attribution included.
        let contents: String = QuoteList::defaults()
            .iter()
            .map(|quote| format!("{}{}{}\n", quote.text, FIELD_SEPARATOR, quote.author))
            .collect();
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Loads every quote from the storage file, in file order.
    ///
    /// Blank lines are skipped and malformed lines degrade to text-only quotes.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be created or read.
    pub fn load(&self) -> Result<QuoteList> {
        self.ensure_storage()?;

        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut quotes = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            quotes.push(Quote::parse(&line));
        }

        debug!("Loaded {} quotes from {}", quotes.len(), self.path.display());
        Ok(quotes.into_iter().collect())
    }

    /// Overwrites the storage file with `quotes`, one line per quote.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be written.
    pub fn save(&self, quotes: &QuoteList) -> Result<()> {
        let contents: String = quotes
            .iter()
            .map(|quote| format!("{}\n", quote.to_line()))
            .collect();
        fs::write(&self.path, contents)?;

        debug!("Saved {} quotes to {}", quotes.len(), self.path.display());
        Ok(())
    }
}
