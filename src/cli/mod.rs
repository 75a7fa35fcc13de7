//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining the flags, resolving them to a single operation, and running
//! that operation against the quote store.

mod commands;

pub use commands::*;
