//! Error types for component operations

use crate::component::LifecyclePhase;

/// Errors that can occur during component operations
#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    /// Invalid lifecycle transition
    #[error("Invalid lifecycle transition: cannot {1} while in {0:?} phase")]
    InvalidLifecycleTransition(LifecyclePhase, String),

    /// A prop value the component cannot work with
    #[error("Invalid value for property {name}: {reason}")]
    InvalidProp {
        /// Name of the property
        name: String,
        /// Description of the problem
        reason: String,
    },

    /// Error rendering component
    #[error("Error rendering component: {0}")]
    RenderError(String),

    /// Error updating component
    #[error("Error updating component: {0}")]
    UpdateError(String),

    /// Error acquiring lock
    #[error("Lock error: {0}")]
    LockError(String),
}

impl ComponentError {
    /// Shorthand for [`ComponentError::InvalidProp`]
    pub fn invalid_prop(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProp {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
