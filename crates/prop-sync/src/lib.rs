//! Checksum-gated settings synchronization
//!
//! Reconciles a caller-declared set of typed settings with a persisted
//! key/value file. The file's values win only when the file carries a
//! checksum matching the declared defaults; otherwise the file is
//! regenerated wholesale from the in-memory values. The comparison is a
//! single global gate, never per-field: one changed default invalidates
//! the whole file, including any end-user edits in it.

pub mod checksum;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod sync;
pub mod value;

pub use descriptor::{PropCell, PropDescriptor};
pub use error::{Error, Result};
pub use registry::SyncRegistry;
pub use sync::Synchronizer;
pub use value::{PropType, PropValue};
