//! Defines the quote record and the ordered list of quotes.
//!
//! Includes:
//! - `Quote`: a single text/author pair, with the one-line storage format.
//! - `QuoteList`: the ordered, 1-based collection that add/remove/random operate on.
//! - `DEFAULT_QUOTES`: the seed set written when no storage file exists yet.

use crate::error::{AppError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Author used when a line or input carries no attribution.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Separator between text and author in a storage line.
pub const FIELD_SEPARATOR: char = '|';

/// Seed quotes, in the order they are written to a fresh storage file.
pub const DEFAULT_QUOTES: [(&str, &str); 10] = [
    (
        "The best way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    (
        "Whether you think you can or you think you can’t, you’re right.",
        "Henry Ford",
    ),
    ("It always seems impossible until it’s done.", "Nelson Mandela"),
    ("Stay hungry, stay foolish.", "Steve Jobs"),
    ("You miss 100% of the shots you don’t take.", "Wayne Gretzky"),
    ("If you’re going through hell, keep going.", "Winston Churchill"),
    ("Dream big and dare to fail.", "Norman Vaughan"),
    ("The secret of getting ahead is getting started.", "Mark Twain"),
    ("Small steps every day.", "Unknown"),
    ("Do one thing every day that scares you.", "Eleanor Roosevelt"),
];

/// A quote and the person it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Creates a quote, trimming both fields. A blank author becomes `UNKNOWN_AUTHOR`.
    pub fn new(text: &str, author: &str) -> Self {
        let author = author.trim();
        Self {
            text: text.trim().to_string(),
            author: if author.is_empty() {
                UNKNOWN_AUTHOR.to_string()
            } else {
                author.to_string()
            },
        }
    }

    /// Parses one storage line (or `--add` argument) into a quote.
    ///
    /// The line is split on the first `|`: the left side is the text and the right side
    /// the author. Without a `|` the whole line is the text. This never fails; anything
    /// unexpected degrades into a text-only quote.
    pub fn parse(line: &str) -> Self {
        match line.split_once(FIELD_SEPARATOR) {
            Some((text, author)) => Self::new(text, author),
            None => Self::new(line, UNKNOWN_AUTHOR),
        }
    }

    /// True when the author is the placeholder rather than a real attribution.
    pub fn has_unknown_author(&self) -> bool {
        self.author.is_empty() || self.author.eq_ignore_ascii_case(UNKNOWN_AUTHOR)
    }

    /// Formats the quote as a storage line, without the trailing newline.
    ///
    /// Unattributed quotes are written as bare text so no trailing `|` appears.
    pub fn to_line(&self) -> String {
        if self.has_unknown_author() {
            self.text.clone()
        } else {
            format!("{}{}{}", self.text, FIELD_SEPARATOR, self.author)
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "“{}” — {}", self.text, self.author)
    }
}

/// Ordered collection of quotes. Positions exposed to users are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteList {
    quotes: Vec<Quote>,
}

impl QuoteList {
    /// The built-in seed set, in its fixed order.
    pub fn defaults() -> Self {
        DEFAULT_QUOTES
            .iter()
            .map(|(text, author)| Quote::new(text, author))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    /// Picks one quote uniformly at random, or `None` if the list is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Quote> {
        self.quotes.choose(rng)
    }

    /// Parses `raw` with the storage line rules and appends the result.
    ///
    /// # Errors
    ///
    /// Returns `AppError::EmptyInput` if `raw` is blank or leaves no quote text
    /// (for example `"|Someone"`). The list is unchanged on error.
    pub fn add_raw(&mut self, raw: &str) -> Result<Quote> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let quote = Quote::parse(raw);
        if quote.text.is_empty() {
            return Err(AppError::EmptyInput);
        }

        debug!("Appending quote at position {}", self.quotes.len() + 1);
        self.quotes.push(quote.clone());
        Ok(quote)
    }

    /// Removes and returns the quote at 1-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::IndexOutOfRange` if `index` is not within `1..=len`.
    /// The list is unchanged on error.
    pub fn remove_at(&mut self, index: i64) -> Result<Quote> {
        let len = self.quotes.len();
        match usize::try_from(index) {
            Ok(position) if (1..=len).contains(&position) => {
                debug!("Removing quote at position {}", position);
                Ok(self.quotes.remove(position - 1))
            },
            _ => Err(AppError::IndexOutOfRange { len }),
        }
    }
}

impl FromIterator<Quote> for QuoteList {
    fn from_iter<I: IntoIterator<Item = Quote>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}
