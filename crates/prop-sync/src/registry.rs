//! Named registration of synchronizers for whole-application sweeps

use crate::error::Result;
use crate::sync::Synchronizer;

/// Caller-owned collection of synchronizers keyed by set name.
///
/// `pull_all`/`push_all` visit every registered synchronizer in
/// registration order; all of them run even when one fails, and the first
/// error is reported.
#[derive(Debug, Default)]
pub struct SyncRegistry {
    entries: Vec<(String, Synchronizer)>,
}

impl SyncRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synchronizer under `set_name`, replacing any previous
    /// registration with the same name.
    pub fn register(&mut self, set_name: impl Into<String>, synchronizer: Synchronizer) {
        let set_name = set_name.into();
        match self.entries.iter_mut().find(|(name, _)| *name == set_name) {
            Some(entry) => entry.1 = synchronizer,
            None => self.entries.push((set_name, synchronizer)),
        }
    }

    pub fn get(&self, set_name: &str) -> Option<&Synchronizer> {
        self.entries
            .iter()
            .find(|(name, _)| name == set_name)
            .map(|(_, sync)| sync)
    }

    pub fn get_mut(&mut self, set_name: &str) -> Option<&mut Synchronizer> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == set_name)
            .map(|(_, sync)| sync)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reload every registered set from its file.
    pub fn pull_all(&mut self) -> Result<()> {
        self.sweep(Synchronizer::pull_store_to_fields)
    }

    /// Force every registered set's field values into its file.
    pub fn push_all(&mut self) -> Result<()> {
        self.sweep(Synchronizer::push_fields_to_store)
    }

    fn sweep(&mut self, op: fn(&mut Synchronizer) -> Result<()>) -> Result<()> {
        let mut first_error = None;
        for (set_name, synchronizer) in &mut self.entries {
            if let Err(e) = op(synchronizer) {
                tracing::warn!(set = %set_name, error = %e, "registry sweep failed for set");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
