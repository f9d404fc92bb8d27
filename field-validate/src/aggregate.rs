//! Form-level validity aggregation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::callback::Callback;
use crate::event::ValidationEvent;

/// Collects [`ValidationEvent`]s from many fields.
///
/// Cheap to clone; clones share the same map. Fields that never reported are
/// unknown rather than valid, since a field only reports when its message
/// changes.
///
/// # Example
///
/// ```
/// use field_validate::{FormValidity, ValidationEvent};
///
/// let form = FormValidity::new();
/// let on_validate = form.callback();
///
/// on_validate.call(ValidationEvent { name: "email".into(), is_valid: false });
/// assert!(!form.is_valid());
///
/// on_validate.call(ValidationEvent { name: "email".into(), is_valid: true });
/// assert!(form.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormValidity {
    fields: Arc<RwLock<HashMap<String, bool>>>,
}

impl FormValidity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one field's latest validity.
    pub fn record(&self, event: ValidationEvent) {
        let mut guard = self
            .fields
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.insert(event.name, event.is_valid);
    }

    /// A callback for `on_validate` that records into this aggregate.
    ///
    /// Every call creates a new callback identity; build it once per field.
    pub fn callback(&self) -> Callback<ValidationEvent> {
        let form = self.clone();
        Callback::new(move |event: ValidationEvent| form.record(event))
    }

    /// Latest validity reported by `name`.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.fields
            .read()
            .map(|guard| guard.get(name).copied())
            .unwrap_or_else(|poisoned| poisoned.into_inner().get(name).copied())
    }

    /// Whether no reporting field is currently invalid.
    pub fn is_valid(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    /// Names of fields whose last report was invalid, sorted.
    pub fn invalid_fields(&self) -> Vec<String> {
        let guard = self
            .fields
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut invalid: Vec<String> = guard
            .iter()
            .filter(|(_, valid)| !**valid)
            .map(|(name, _)| name.clone())
            .collect();
        invalid.sort();
        invalid
    }

    /// Forget a field, e.g. when it is removed from the form.
    pub fn remove(&self, name: &str) -> Option<bool> {
        self.fields
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(name)
    }

    /// Number of fields that have reported.
    pub fn len(&self) -> usize {
        self.fields
            .read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
