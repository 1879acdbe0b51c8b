//! Component model for FormCraft
//!
//! This module contains the types and traits shared by every component:
//! the [`Component`] trait, the [`Context`] handed to components on creation,
//! the virtual [`Node`] tree they render to and lifecycle management.

mod context;
mod error;
mod lifecycle;
mod node;

#[cfg(test)]
mod tests;

pub use context::{async_callback, callback, AsyncCallback, Callback, ContextProvider};
pub use error::ComponentError;
pub use lifecycle::LifecycleManager;
pub use node::{root, Node, NodeKind};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::platform::{Document, History, MemoryHistory, MemoryStorage, Storage};

/// Lifecycle phase of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Component is created but not yet mounted
    Created,
    /// Component is fully mounted and operational
    Mounted,
    /// Component is unmounted and inactive
    Unmounted,
}

/// Unique, process-wide identifier for a component instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Allocate a fresh id
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::SeqCst))
    }

    /// Raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Props trait - implemented by all component props types
pub trait Props: 'static + Send + Sync + Clone {
    /// Get the type name for debugging
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: 'static + Clone + Send + Sync> Props for T {}

/// Component trait - implemented by all UI components
pub trait Component: Send + Sync {
    /// The props type for this component
    type Props: Props;

    /// Create a new component instance
    fn create(props: Self::Props, context: Context) -> Self
    where
        Self: Sized;

    /// Mount component - called when component is first added to the tree
    fn mount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Update component with new props
    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError>;

    /// Unmount component - called when component is removed from the tree
    fn unmount(&mut self) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Render component - returns child nodes
    fn render(&self) -> Result<Vec<Node>, ComponentError>;
}

/// Create a component and render it once, for embedding stateless children
pub fn render_child<C: Component>(
    props: C::Props,
    context: &Context,
) -> Result<Vec<Node>, ComponentError> {
    C::create(props, context.clone()).render()
}

/// Context passed to components providing access to platform services and
/// values shared by ancestors
#[derive(Clone)]
pub struct Context {
    /// Persisted UI state (collapse flags)
    storage: Arc<dyn Storage>,

    /// Current URL and navigation history (tab persistence)
    history: Arc<dyn History>,

    /// Focus, scroll lock and clipboard
    document: Document,

    /// Prefix for generated element ids
    id_prefix: Arc<str>,

    /// Context provider for parent-child communication
    context_provider: ContextProvider,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("storage", &self.storage)
            .field("history", &self.history)
            .field("document", &self.document)
            .field("id_prefix", &self.id_prefix)
            .field("context_provider", &self.context_provider)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context backed by in-memory platform adapters
    pub fn new() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            history: Arc::new(MemoryHistory::default()),
            document: Document::new(),
            id_prefix: Arc::from("fc"),
            context_provider: ContextProvider::new(),
        }
    }

    /// Create a child context sharing platform services with `parent`
    pub fn with_parent(parent: &Context) -> Self {
        Self {
            storage: parent.storage.clone(),
            history: parent.history.clone(),
            document: parent.document.clone(),
            id_prefix: parent.id_prefix.clone(),
            context_provider: ContextProvider::with_parent(parent.context_provider.clone()),
        }
    }

    /// Replace the storage adapter
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = storage;
        self
    }

    /// Replace the history adapter
    pub fn with_history(mut self, history: Arc<dyn History>) -> Self {
        self.history = history;
        self
    }

    /// Replace the document
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = document;
        self
    }

    /// Replace the prefix used for generated element ids
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Arc::from(prefix.into());
        self
    }

    /// Storage adapter
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// History adapter
    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    /// Document services
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Provider for values shared with descendants
    pub fn provider(&self) -> &ContextProvider {
        &self.context_provider
    }

    /// Generate an element id for a component instance, e.g. `fc-12`
    pub fn element_id(&self, id: ComponentId) -> String {
        format!("{}-{}", self.id_prefix, id)
    }
}
