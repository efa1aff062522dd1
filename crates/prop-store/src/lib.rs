//! Persisted key/value store for settings synchronization
//!
//! Implements a line-oriented `key=value` text format (a subset of the
//! Java properties convention: `=`/`:` separators, `#`/`!` comments,
//! backslash escapes) plus the reserved base-36 `checksum` entry used by
//! the synchronizer as its integrity gate.

pub mod base36;
pub mod error;
pub mod format;
pub mod store;

pub use error::{Error, Result};
pub use store::{CHECKSUM_KEY, PropStore};
