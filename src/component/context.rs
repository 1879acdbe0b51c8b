//! Context passing and parent-child communication

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::future::Future;
use std::sync::{Arc, RwLock};

use futures::future::BoxFuture;
use futures::FutureExt;

/// A type-erased value that can be stored in a context
trait ContextValue: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Clone + Send + Sync + Debug + 'static> ContextValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Provider for typed values shared from a parent component to its descendants
#[derive(Clone, Default)]
pub struct ContextProvider {
    /// Parent context provider
    parent: Option<Box<ContextProvider>>,
    values: Arc<RwLock<HashMap<TypeId, Box<dyn ContextValue>>>>,
}

impl Debug for ContextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextProvider")
            .field("parent", &self.parent.is_some())
            .field(
                "values",
                &format!(
                    "[{} values]",
                    self.values.read().map(|v| v.len()).unwrap_or(0)
                ),
            )
            .finish()
    }
}

impl ContextProvider {
    /// Create a new context provider
    pub fn new() -> Self {
        Self {
            parent: None,
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a context provider with a parent
    pub fn with_parent(parent: ContextProvider) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set a value in the context
    pub fn provide<T: Clone + Send + Sync + Debug + 'static>(&self, value: T) -> Result<(), String> {
        let type_id = TypeId::of::<T>();
        if let Ok(mut values) = self.values.write() {
            values.insert(type_id, Box::new(value));
            Ok(())
        } else {
            Err("Failed to acquire write lock for context values".to_string())
        }
    }

    /// Get a value from the context, falling back to the parent chain
    pub fn consume<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        let type_id = TypeId::of::<T>();

        let result = self.values.read().ok().and_then(|values| {
            values
                .get(&type_id)
                .and_then(|value| value.as_any().downcast_ref::<T>().cloned())
        });

        if result.is_some() {
            return result;
        }

        self.parent.as_ref().and_then(|parent| parent.consume::<T>())
    }

    /// Check if a type exists in this context or any parent
    pub fn has<T: 'static>(&self) -> bool {
        let exists_here = self
            .values
            .read()
            .map(|values| values.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false);

        exists_here || self.parent.as_ref().is_some_and(|parent| parent.has::<T>())
    }
}

/// A shareable callback used for component event props
pub struct Callback<Args, Ret = ()> {
    /// The function to call
    func: Arc<dyn Fn(Args) -> Ret + Send + Sync>,
}

impl<Args: 'static, Ret: 'static> Clone for Callback<Args, Ret> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args, Ret> Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl<Args, Ret> Callback<Args, Ret> {
    /// Create a new callback
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the callback with the given arguments
    pub fn call(&self, args: Args) -> Ret {
        (self.func)(args)
    }
}

/// Helper function to create a callback
pub fn callback<F, Args, Ret>(func: F) -> Callback<Args, Ret>
where
    F: Fn(Args) -> Ret + Send + Sync + 'static,
{
    Callback::new(func)
}

/// A callback whose completion is awaited by the component (modal actions)
pub struct AsyncCallback<Args = ()> {
    func: Arc<dyn Fn(Args) -> BoxFuture<'static, ()> + Send + Sync>,
}

impl<Args: 'static> Clone for AsyncCallback<Args> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args> Debug for AsyncCallback<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AsyncCallback")
    }
}

impl<Args> AsyncCallback<Args> {
    /// Wrap a function returning a future
    pub fn new<F, Fut>(func: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            func: Arc::new(move |args| func(args).boxed()),
        }
    }

    /// Wrap a synchronous function
    pub fn from_sync<F>(func: F) -> Self
    where
        F: Fn(Args) + Send + Sync + 'static,
        Args: Send + 'static,
    {
        Self {
            func: Arc::new(move |args| {
                func(args);
                futures::future::ready(()).boxed()
            }),
        }
    }

    /// Invoke the callback and wait for it to finish
    pub async fn call(&self, args: Args) {
        (self.func)(args).await
    }
}

/// Helper function to create an async callback
pub fn async_callback<F, Fut, Args>(func: F) -> AsyncCallback<Args>
where
    F: Fn(Args) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    AsyncCallback::new(func)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Locale(&'static str);

    #[test]
    fn test_consume_falls_back_to_parent() {
        let parent = ContextProvider::new();
        parent.provide(Locale("ja")).unwrap();

        let child = ContextProvider::with_parent(parent.clone());
        assert!(child.has::<Locale>());
        assert_eq!(child.consume::<Locale>(), Some(Locale("ja")));

        child.provide(Locale("en")).unwrap();
        assert_eq!(child.consume::<Locale>(), Some(Locale("en")));
        assert_eq!(parent.consume::<Locale>(), Some(Locale("ja")));
    }

    #[test]
    fn test_missing_value() {
        let provider = ContextProvider::new();
        assert!(!provider.has::<Locale>());
        assert_eq!(provider.consume::<Locale>(), None);
    }

    #[test]
    fn test_callback_call() {
        let double = callback(|x: i32| x * 2);
        assert_eq!(double.clone().call(21), 42);
    }

    #[test]
    fn test_async_callback_from_sync() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let cb = AsyncCallback::from_sync(move |n: usize| {
            hits_clone.fetch_add(n, Ordering::SeqCst);
        });

        futures::executor::block_on(cb.call(3));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }
}
