//! Provides persistence for the quote list.
//!
//! Currently, this module focuses on the flat text file backend via the `file` submodule.

mod file;

pub use file::*;
