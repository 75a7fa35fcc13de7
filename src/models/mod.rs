//! Defines the data structures and models used throughout the application.
//!
//! This covers the `Quote` record, the ordered `QuoteList` it lives in, and the
//! single-line text format both are stored in.

mod quote;

pub use quote::*;
