//! Immediate and deferred validation results

use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use futures::FutureExt;

/// Outcome of invoking a validation function
pub enum Validation {
    /// The error message (or `None` when valid) is known immediately
    Ready(Option<String>),
    /// The result will be available later, e.g. after a remote check
    Deferred(BoxFuture<'static, Option<String>>),
}

impl Validation {
    /// A valid result
    pub fn ok() -> Self {
        Validation::Ready(None)
    }

    /// An immediate error
    pub fn error(message: impl Into<String>) -> Self {
        Validation::Ready(Some(message.into()))
    }

    /// Wrap a future producing the result
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Option<String>> + Send + 'static,
    {
        Validation::Deferred(future.boxed())
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Ready(message) => f.debug_tuple("Ready").field(message).finish(),
            Validation::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

impl From<Option<String>> for Validation {
    fn from(message: Option<String>) -> Self {
        Validation::Ready(message)
    }
}

/// A field validation function
pub struct Validator<T> {
    func: Arc<dyn Fn(&T) -> Validation + Send + Sync>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator")
    }
}

impl<T> Validator<T> {
    /// Wrap a function that may answer immediately or later
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&T) -> Validation + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Run the validation against `value`
    pub fn call(&self, value: &T) -> Validation {
        (self.func)(value)
    }
}

/// Build a validator from a synchronous check
pub fn validator<T, F>(check: F) -> Validator<T>
where
    T: 'static,
    F: Fn(&T) -> Option<String> + Send + Sync + 'static,
{
    Validator::new(move |value: &T| Validation::Ready(check(value)))
}

/// Build a validator whose result is always deferred
pub fn validator_async<T, F, Fut>(check: F) -> Validator<T>
where
    T: 'static,
    F: Fn(&T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<String>> + Send + 'static,
{
    Validator::new(move |value: &T| Validation::deferred(check(value)))
}

/// Error message plus the sequence number of the newest validation issued
#[derive(Debug, Default)]
pub(crate) struct ErrorSlot {
    pub(crate) message: Option<String>,
    issued: u64,
}

impl ErrorSlot {
    /// Reserve the next sequence number
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Store `message` if `sequence` is still the newest issued validation
    pub(crate) fn apply(&mut self, sequence: u64, message: Option<String>) -> bool {
        if sequence != self.issued {
            return false;
        }
        self.message = message;
        true
    }
}

/// A deferred validation result waiting to be committed to its field
#[must_use = "the validation error is only applied once resolved"]
pub struct PendingValidation {
    sequence: u64,
    slot: Arc<Mutex<ErrorSlot>>,
    future: BoxFuture<'static, Option<String>>,
}

impl fmt::Debug for PendingValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingValidation")
            .field("sequence", &self.sequence)
            .finish()
    }
}

impl PendingValidation {
    pub(crate) fn new(
        sequence: u64,
        slot: Arc<Mutex<ErrorSlot>>,
        future: BoxFuture<'static, Option<String>>,
    ) -> Self {
        Self {
            sequence,
            slot,
            future,
        }
    }

    /// Sequence number of this validation within its field
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Wait for the result and apply it unless a newer validation was issued.
    /// Returns whether the result was applied.
    pub async fn resolve(self) -> bool {
        let message = self.future.await;
        let Ok(mut slot) = self.slot.lock() else {
            return false;
        };

        let applied = slot.apply(self.sequence, message);
        if !applied {
            log::warn!(
                "discarding stale validation #{} (newest is #{})",
                self.sequence,
                slot.issued
            );
        }
        applied
    }
}
