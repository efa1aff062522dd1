//! Setting declarations: shared value cells and descriptor records

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::PropValue;

/// Shared, mutable storage for one setting's current value.
///
/// The caller keeps a clone to read and write the setting; the
/// synchronizer borrows write access only for the duration of a merge.
/// Single-threaded by design, hence `Rc<RefCell>` rather than a lock.
#[derive(Debug, Clone)]
pub struct PropCell(Rc<RefCell<PropValue>>);

impl PropCell {
    pub fn new(value: impl Into<PropValue>) -> Self {
        Self(Rc::new(RefCell::new(value.into())))
    }

    /// A clone of the current value.
    pub fn get(&self) -> PropValue {
        self.0.borrow().clone()
    }

    pub fn set(&self, value: PropValue) {
        *self.0.borrow_mut() = value;
    }
}

/// One declared setting: identifier, optional display name, the shared
/// value cell, optional numeric bounds, optional description.
///
/// The cell's type tag is fixed at declaration time; the synchronizer only
/// ever writes values of the same type back into it.
#[derive(Debug, Clone)]
pub struct PropDescriptor {
    id: String,
    name: Option<String>,
    cell: PropCell,
    min: Option<f64>,
    max: Option<f64>,
    description: Option<String>,
}

impl PropDescriptor {
    pub fn new(id: impl Into<String>, cell: PropCell) -> Self {
        Self {
            id: id.into(),
            name: None,
            cell,
            min: None,
            max: None,
            description: None,
        }
    }

    /// Override the persisted key name (defaults to the identifier).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Lower bound for numeric settings.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Upper bound for numeric settings.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Human-readable description for the comment header.
    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Effective persisted key: explicit name if given, else identifier.
    pub fn key(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cell(&self) -> &PropCell {
        &self.cell
    }

    /// A clone of the current value.
    pub fn value(&self) -> PropValue {
        self.cell.get()
    }

    pub fn min_bound(&self) -> Option<f64> {
        self.min
    }

    pub fn max_bound(&self) -> Option<f64> {
        self.max
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether `value` violates a declared bound.
    pub(crate) fn out_of_bounds(&self, value: f64) -> bool {
        self.min.is_some_and(|min| value < min) || self.max.is_some_and(|max| value > max)
    }
}
