//! Field state management for FormCraft
//!
//! Every field component owns a [`FieldState`]: its current value, the
//! validation error for that value and whether the user has touched it.
//! Validation may complete immediately or be deferred; deferred results are
//! tagged with a per-field sequence number and dropped when a newer
//! validation has been issued in the meantime.

mod validation;

pub use validation::{validator, validator_async, PendingValidation, Validation, Validator};

use std::sync::{Arc, Mutex};

use crate::component::Callback;
use validation::ErrorSlot;

/// Result of feeding user input into a field
#[derive(Debug)]
#[must_use = "a pending validation must be resolved for its error to be applied"]
pub enum ChangeOutcome {
    /// The input was rejected (disabled, read-only, blocked or unparseable)
    Ignored,
    /// State was updated; any validation already ran synchronously
    Applied,
    /// State was updated and a deferred validation is in flight
    Pending(PendingValidation),
}

impl ChangeOutcome {
    /// Whether the field state changed
    pub fn is_applied(&self) -> bool {
        !matches!(self, ChangeOutcome::Ignored)
    }

    /// Take the deferred validation, if any
    pub fn into_pending(self) -> Option<PendingValidation> {
        match self {
            ChangeOutcome::Pending(pending) => Some(pending),
            _ => None,
        }
    }

    /// Drive a deferred validation to completion, if there is one
    pub async fn settle(self) -> bool {
        match self {
            ChangeOutcome::Pending(pending) => pending.resolve().await,
            ChangeOutcome::Applied => true,
            ChangeOutcome::Ignored => false,
        }
    }
}

/// Value, error and touched state of one field instance
#[derive(Debug)]
pub struct FieldState<T> {
    value: T,
    touched: bool,
    errors: Arc<Mutex<ErrorSlot>>,
}

impl<T: Clone + Send + Sync + 'static> FieldState<T> {
    /// Start from the field's default value
    pub fn new(default_value: T) -> Self {
        Self {
            value: default_value,
            touched: false,
            errors: Arc::new(Mutex::new(ErrorSlot::default())),
        }
    }

    /// Current value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Current validation error
    pub fn error(&self) -> Option<String> {
        self.errors
            .lock()
            .map(|slot| slot.message.clone())
            .unwrap_or(None)
    }

    /// Whether the user has changed this field
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Store a new value, notify `on_change`, then run `validate`
    pub fn commit(
        &mut self,
        value: T,
        on_change: Option<&Callback<T>>,
        validate: Option<&Validator<T>>,
    ) -> ChangeOutcome {
        self.value = value;
        self.touched = true;

        if let Some(on_change) = on_change {
            on_change.call(self.value.clone());
        }

        match validate {
            Some(validate) => self.run_validation(validate),
            None => ChangeOutcome::Applied,
        }
    }

    /// Validate the current value without changing it
    pub fn revalidate(&mut self, validate: &Validator<T>) -> ChangeOutcome {
        self.run_validation(validate)
    }

    fn run_validation(&mut self, validate: &Validator<T>) -> ChangeOutcome {
        let sequence = match self.errors.lock() {
            Ok(mut slot) => slot.issue(),
            Err(_) => return ChangeOutcome::Applied,
        };

        match validate.call(&self.value) {
            Validation::Ready(message) => {
                if let Ok(mut slot) = self.errors.lock() {
                    slot.apply(sequence, message);
                }
                ChangeOutcome::Applied
            }
            Validation::Deferred(future) => ChangeOutcome::Pending(PendingValidation::new(
                sequence,
                self.errors.clone(),
                future,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn required() -> Validator<String> {
        validator(|value: &String| {
            if value.is_empty() {
                Some("required".to_string())
            } else {
                None
            }
        })
    }

    #[test]
    fn test_sync_validation() {
        let mut state = FieldState::new(String::new());
        assert!(!state.is_touched());

        let outcome = state.commit(String::new(), None, Some(&required()));
        assert!(matches!(outcome, ChangeOutcome::Applied));
        assert_eq!(state.error().as_deref(), Some("required"));

        let _ = state.commit("abc".to_string(), None, Some(&required()));
        assert_eq!(state.error(), None);
        assert_eq!(state.value(), "abc");
        assert!(state.is_touched());
    }

    #[test]
    fn test_on_change_runs_once_before_validation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let on_change = Callback::new(move |_: String| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let seen = calls.clone();
        let check = validator(move |_: &String| {
            assert_eq!(seen.load(Ordering::SeqCst), 1);
            None
        });

        let mut state = FieldState::new(String::new());
        let _ = state.commit("x".to_string(), Some(&on_change), Some(&check));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deferred_validation_applies_when_resolved() {
        let mut state = FieldState::new(String::new());
        let (tx, rx) = oneshot::channel::<Option<String>>();
        let rx = Mutex::new(Some(rx));
        let check = validator_async(move |_: &String| {
            let rx = rx.lock().unwrap().take().unwrap();
            async move { rx.await.unwrap_or(None) }
        });

        let pending = state
            .commit("taken".to_string(), None, Some(&check))
            .into_pending()
            .expect("validation should be deferred");
        assert_eq!(state.error(), None);

        tx.send(Some("already taken".to_string())).unwrap();
        assert!(block_on(pending.resolve()));
        assert_eq!(state.error().as_deref(), Some("already taken"));
    }

    #[test]
    fn test_stale_deferred_result_is_discarded() {
        let mut state = FieldState::new(String::new());
        let channels = Arc::new(Mutex::new(Vec::new()));
        let channels_clone = channels.clone();
        let check = validator_async(move |_: &String| {
            let (tx, rx) = oneshot::channel::<Option<String>>();
            channels_clone.lock().unwrap().push(tx);
            async move { rx.await.unwrap_or(None) }
        });

        let first = state
            .commit("a".to_string(), None, Some(&check))
            .into_pending()
            .unwrap();
        let second = state
            .commit("ab".to_string(), None, Some(&check))
            .into_pending()
            .unwrap();

        let mut senders = channels.lock().unwrap().drain(..).collect::<Vec<_>>();
        let first_tx = senders.remove(0);
        let second_tx = senders.remove(0);

        second_tx.send(Some("too short".to_string())).unwrap();
        assert!(block_on(second.resolve()));

        // The older validation settles last but must not overwrite the newer error
        first_tx.send(None).unwrap();
        assert!(!block_on(first.resolve()));
        assert_eq!(state.error().as_deref(), Some("too short"));
    }

    #[test]
    fn test_sync_validation_supersedes_pending() {
        let mut state = FieldState::new(0u32);
        let (tx, rx) = oneshot::channel::<Option<String>>();
        let rx = Mutex::new(Some(rx));
        let check = Validator::new(move |value: &u32| {
            if *value == 1 {
                let rx = rx.lock().unwrap().take().unwrap();
                Validation::deferred(async move { rx.await.unwrap_or(None) })
            } else {
                Validation::Ready(Some("sync".to_string()))
            }
        });

        let pending = state.commit(1, None, Some(&check)).into_pending().unwrap();
        let _ = state.commit(2, None, Some(&check));
        tx.send(Some("stale".to_string())).unwrap();

        assert!(!block_on(pending.resolve()));
        assert_eq!(state.error().as_deref(), Some("sync"));
    }
}
