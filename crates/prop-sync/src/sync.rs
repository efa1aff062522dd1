//! The settings/file merge algorithm

use std::fmt::Write as _;
use std::path::PathBuf;

use prop_store::PropStore;

use crate::checksum;
use crate::descriptor::PropDescriptor;
use crate::error::{Error, Result};
use crate::value::PropValue;

/// Reconciles a declared descriptor set with its persisted settings file.
///
/// Persisted values win only when the file's checksum matches the
/// checksum captured from the descriptors at initial discovery; any
/// mismatch rewrites the whole file from the in-memory values. The gate
/// is global on purpose: one changed default invalidates every persisted
/// entry, user edits included, rather than risking stale values after an
/// upgrade.
#[derive(Debug)]
pub struct Synchronizer {
    dir: PathBuf,
    file_name: String,
    descriptors: Vec<PropDescriptor>,
    store: PropStore,
    comments: String,
    fields_checksum: i32,
}

impl Synchronizer {
    /// Create a synchronizer and run the initial full synchronization.
    ///
    /// Failures during this first pass are logged and swallowed; later
    /// calls through [`push_fields_to_store`](Self::push_fields_to_store)
    /// and [`pull_store_to_fields`](Self::pull_store_to_fields) propagate
    /// their errors.
    pub fn new(
        dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
        descriptors: Vec<PropDescriptor>,
    ) -> Self {
        let mut sync = Self {
            dir: dir.into(),
            file_name: file_name.into(),
            descriptors,
            store: PropStore::new(),
            comments: String::new(),
            fields_checksum: 0,
        };
        if let Err(e) = sync.synchronize(false, true) {
            tracing::warn!(
                file = %sync.file_path().display(),
                error = %e,
                "initial settings synchronization failed"
            );
        }
        sync
    }

    /// Like [`new`](Self::new), deriving the file name from the set name.
    pub fn for_set(
        dir: impl Into<PathBuf>,
        set_name: &str,
        descriptors: Vec<PropDescriptor>,
    ) -> Self {
        Self::new(dir, format!("{set_name}.props"), descriptors)
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn descriptors(&self) -> &[PropDescriptor] {
        &self.descriptors
    }

    /// Force the in-memory values into the file, bypassing the checksum
    /// comparison ("reset config").
    pub fn push_fields_to_store(&mut self) -> Result<()> {
        self.synchronize(true, false)
    }

    /// Normal reload: merge persisted values into the fields, respecting
    /// the checksum comparison.
    pub fn pull_store_to_fields(&mut self) -> Result<()> {
        self.synchronize(false, false)
    }

    fn synchronize(&mut self, force_push: bool, initial_discovery: bool) -> Result<()> {
        if force_push && initial_discovery {
            return Err(Error::InvalidArguments);
        }

        let path = self.file_path();

        // When forcing, keep the last-seen store and zero the persisted
        // checksum so the field values always win.
        let store_checksum = if force_push {
            0
        } else {
            self.store = PropStore::load(&path)?;
            self.store.checksum()
        };

        // Recomputed only at initial discovery: the checksum captures the
        // perceived defaults, which later merges must not disturb.
        if initial_discovery {
            self.fields_checksum = checksum::fields_checksum(&self.descriptors);
        }

        let mut comments = String::new();
        let mut out_of_range = 0usize;

        for descriptor in &self.descriptors {
            let key = descriptor.key();
            let current = descriptor.value();

            if !force_push {
                append_comment_line(&mut comments, descriptor, &current);
            }

            let persisted = if store_checksum == self.fields_checksum {
                self.store.get(key).map(str::to_owned)
            } else {
                None
            };

            match persisted {
                Some(raw) => {
                    let ty = current.prop_type();
                    let parsed =
                        PropValue::parse(ty, &raw)
                            .ok_or_else(|| Error::parse(key, ty, raw.as_str()))?;

                    if let Some(number) = parsed.as_f64() {
                        if descriptor.out_of_bounds(number) {
                            tracing::debug!(
                                key,
                                value = number,
                                "persisted value out of range, keeping field value"
                            );
                            out_of_range += 1;
                            continue;
                        }
                    }

                    tracing::trace!(key, value = %parsed, "resolved from persisted store");
                    if parsed != current {
                        descriptor.cell().set(parsed);
                    }
                }
                None => {
                    tracing::trace!(
                        key,
                        value = %current,
                        "no trustworthy persisted value, using field value"
                    );
                    self.store.set(key, current.to_string());
                }
            }
        }

        self.store.set_checksum(self.fields_checksum);

        // Comments are captured once, at initial discovery, and reused
        // verbatim on every later write.
        if initial_discovery {
            self.comments = comments;
        }

        self.store.save(&path, &self.comments)?;

        if out_of_range > 0 {
            tracing::debug!(skipped = out_of_range, "merge skipped out-of-range values");
        }
        Ok(())
    }
}

/// One header line: `key (type:value[,>=min][,<=max])[ -- description]`.
fn append_comment_line(comments: &mut String, descriptor: &PropDescriptor, current: &PropValue) {
    let mut range = String::new();
    if let Some(min) = descriptor.min_bound() {
        let _ = write!(range, ",>={min:.1}");
    }
    if let Some(max) = descriptor.max_bound() {
        let _ = write!(range, ",<={max:.1}");
    }

    let _ = write!(
        comments,
        "{} ({}:{}{})",
        descriptor.key(),
        current.prop_type(),
        current,
        range
    );
    if let Some(info) = descriptor.description() {
        let _ = write!(comments, " -- {info}");
    }
    comments.push('\n');
}
