use crate::error::{AppError, Result};
use crate::store::{QuoteStore, DEFAULT_QUOTES_FILE};
use clap::Parser;
use colored::*;
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Keep a file of quotes and print a random one
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List all quotes with their numbers
    #[arg(long)]
    pub list: bool,

    /// Show the total number of quotes
    #[arg(long)]
    pub count: bool,

    /// Add a quote: "text|author" or "text"
    #[arg(long, value_name = "QUOTE")]
    pub add: Option<String>,

    /// Remove quote number N (as shown by --list)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub remove: Option<i64>,

    /// Quotes file to read and write
    #[arg(long, value_name = "PATH", default_value = DEFAULT_QUOTES_FILE)]
    pub file: PathBuf,
}

/// The single operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Random,
    Count,
    List,
    Add(String),
    Remove(i64),
}

impl Cli {
    /// Resolves the flags to one operation: add > remove > list > count > random.
    pub fn operation(&self) -> Operation {
        if let Some(raw) = &self.add {
            Operation::Add(raw.clone())
        } else if let Some(index) = self.remove {
            Operation::Remove(index)
        } else if self.list {
            Operation::List
        } else if self.count {
            Operation::Count
        } else {
            Operation::Random
        }
    }
}

/// CLI application
pub struct App {
    store: QuoteStore,
}

impl App {
    /// Create a new CLI application around `store`
    pub fn new(store: QuoteStore) -> Self {
        Self { store }
    }

    /// Run one operation, writing its output to `out`.
    ///
    /// User errors (`EmptyInput`, `IndexOutOfRange`, `EmptyStore`) are returned
    /// before anything is saved, so the storage file is left as it was.
    pub fn run<W, R>(&self, operation: Operation, out: &mut W, rng: &mut R) -> Result<()>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        info!("Running {:?} against {}", operation, self.store.path().display());

        match operation {
            Operation::Random => self.print_random(out, rng),
            Operation::Count => self.print_count(out),
            Operation::List => self.list_quotes(out),
            Operation::Add(raw) => self.add_quote(&raw, out),
            Operation::Remove(index) => self.remove_quote(index, out),
        }
    }

    fn print_random<W: Write, R: Rng + ?Sized>(&self, out: &mut W, rng: &mut R) -> Result<()> {
        let quotes = self.store.load()?;
        let quote = quotes.pick_random(rng).ok_or(AppError::EmptyStore)?;
        writeln!(out, "{}", quote)?;
        Ok(())
    }

    fn print_count<W: Write>(&self, out: &mut W) -> Result<()> {
        let quotes = self.store.load()?;
        writeln!(out, "{}", quotes.len())?;
        Ok(())
    }

    fn list_quotes<W: Write>(&self, out: &mut W) -> Result<()> {
        let quotes = self.store.load()?;
        if quotes.is_empty() {
            return Err(AppError::EmptyStore);
        }

        for (i, quote) in quotes.iter().enumerate() {
            writeln!(out, "{}. {} — {}", i + 1, quote.text, quote.author)?;
        }
        Ok(())
    }

    fn add_quote<W: Write>(&self, raw: &str, out: &mut W) -> Result<()> {
        // Validate before touching the file so a blank add never seeds or rewrites it.
        if raw.trim().is_empty() {
            return Err(AppError::EmptyInput);
        }

        let mut quotes = self.store.load()?;
        let added = quotes.add_raw(raw)?;
        self.store.save(&quotes)?;

        info!("Added quote #{}", quotes.len());
        writeln!(out, "{} {}", "✅ Added:".green(), added)?;
        Ok(())
    }

    fn remove_quote<W: Write>(&self, index: i64, out: &mut W) -> Result<()> {
        let mut quotes = self.store.load()?;
        let removed = quotes.remove_at(index)?;
        self.store.save(&quotes)?;

        info!("Removed quote #{}", index);
        writeln!(out, "{} {}", "🗑️ Removed:".green(), removed)?;
        Ok(())
    }
}
