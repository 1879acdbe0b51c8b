//! Shared form state visible to every field inside a [`Form`](super::Form)

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

#[derive(Debug, Default)]
struct FormStore {
    values: BTreeMap<String, Value>,
    errors: BTreeMap<String, String>,
    touched: BTreeMap<String, bool>,
    submitting: bool,
}

/// Handle to a form's values, errors and touched flags
///
/// Cloning the handle shares the underlying state. A `Form` provides its
/// handle through the context so descendant fields can record changes and
/// read form-level errors.
#[derive(Debug, Clone, Default)]
pub struct FormHandle {
    store: Arc<Mutex<FormStore>>,
}

impl FormHandle {
    /// Create an empty form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form state seeded with initial values
    pub fn with_values(values: impl IntoIterator<Item = (String, Value)>) -> Self {
        let handle = Self::new();
        handle.lock().values.extend(values);
        handle
    }

    fn lock(&self) -> MutexGuard<'_, FormStore> {
        match self.store.lock() {
            Ok(store) => store,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record a field value
    pub fn set_field_value(&self, name: &str, value: Value) {
        self.lock().values.insert(name.to_string(), value);
    }

    /// Set or clear a field error
    pub fn set_field_error(&self, name: &str, error: Option<String>) {
        let mut store = self.lock();
        match error {
            Some(error) => {
                store.errors.insert(name.to_string(), error);
            }
            None => {
                store.errors.remove(name);
            }
        }
    }

    /// Mark a field as touched or untouched
    pub fn set_field_touched(&self, name: &str, touched: bool) {
        self.lock().touched.insert(name.to_string(), touched);
    }

    /// Replace every error at once
    pub fn replace_errors(&self, errors: BTreeMap<String, String>) {
        self.lock().errors = errors;
    }

    /// Drop every error
    pub fn clear_errors(&self) {
        self.lock().errors.clear();
    }

    pub fn value(&self, name: &str) -> Option<Value> {
        self.lock().values.get(name).cloned()
    }

    pub fn values(&self) -> BTreeMap<String, Value> {
        self.lock().values.clone()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.lock().errors.get(name).cloned()
    }

    pub fn errors(&self) -> BTreeMap<String, String> {
        self.lock().errors.clone()
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.lock().touched.get(name).copied().unwrap_or(false)
    }

    pub fn touched(&self) -> BTreeMap<String, bool> {
        self.lock().touched.clone()
    }

    /// Whether a submit is in progress
    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    /// Claim the submitting flag; false if a submit is already running
    pub(crate) fn begin_submit(&self) -> bool {
        let mut store = self.lock();
        if store.submitting {
            return false;
        }
        store.submitting = true;
        true
    }

    pub(crate) fn end_submit(&self) {
        self.lock().submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errors_set_and_clear() {
        let form = FormHandle::new();
        form.set_field_error("email", Some("invalid".to_string()));
        assert_eq!(form.error("email").as_deref(), Some("invalid"));
        form.set_field_error("email", None);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_clones_share_values() {
        let form = FormHandle::with_values([("name".to_string(), json!("Ada"))]);
        let other = form.clone();
        other.set_field_value("age", json!(36));
        other.set_field_touched("age", true);

        assert_eq!(form.value("name"), Some(json!("Ada")));
        assert_eq!(form.value("age"), Some(json!(36)));
        assert!(form.is_touched("age"));
        assert!(!form.is_touched("name"));
    }

    #[test]
    fn test_submit_flag_is_exclusive() {
        let form = FormHandle::new();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.is_submitting());
        form.end_submit();
        assert!(form.begin_submit());
    }
}
