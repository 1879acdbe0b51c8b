// Core module of the FormCraft component library
pub mod component;
pub mod config;
pub mod events;
pub mod kit;
pub mod platform;
pub mod state;

/// Version of the FormCraft library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        async_callback, callback, root, AsyncCallback, Callback, Component, ComponentError,
        ComponentId, Context, ContextProvider, LifecycleManager, LifecyclePhase, Node, Props,
    };
    pub use crate::config::Config;
    pub use crate::events::{Key, KeyboardEvent};
    pub use crate::kit::prelude::*;
    pub use crate::platform::{Document, History, MemoryHistory, MemoryStorage, Storage};
    pub use crate::state::{validator, validator_async, ChangeOutcome, Validation, Validator};
}

/// Initialize FormCraft
///
/// Builds the root context described by `config` and logs the library
/// version.
pub fn init(config: config::Config) -> Result<component::Context, Error> {
    let context = config.into_context()?;
    log::info!("FormCraft {VERSION} initialized");
    Ok(context)
}

/// Errors that can occur in FormCraft
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Component error: {0}")]
    Component(#[from] component::ComponentError),

    #[error("Storage error: {0}")]
    Storage(#[from] platform::StorageError),
}
