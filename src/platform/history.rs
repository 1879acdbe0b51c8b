//! Current location and navigation history

use std::fmt::Debug;
use std::sync::Mutex;

use url::Url;

use super::StorageError;

/// Access to the current URL and the ability to push new history entries
pub trait History: Send + Sync + Debug {
    /// The current URL, if known
    fn current_url(&self) -> Option<Url>;

    /// Push a new history entry
    fn push_url(&self, url: &Url) -> Result<(), StorageError>;

    /// Read a query parameter from the current URL
    fn query_param(&self, name: &str) -> Option<String> {
        let url = self.current_url()?;
        let value = url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned());
        value
    }

    /// Push the current URL with `name` set to `value`, keeping other parameters
    fn set_query_param(&self, name: &str, value: &str) -> Result<(), StorageError> {
        let Some(mut url) = self.current_url() else {
            return Err(StorageError::Unavailable);
        };

        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != name)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, existing) in &retained {
                pairs.append_pair(key, existing);
            }
            pairs.append_pair(name, value);
        }

        self.push_url(&url)
    }
}

/// In-memory history stack
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<Url>>,
}

impl MemoryHistory {
    /// Start with a single entry
    pub fn new(initial: Url) -> Self {
        Self {
            entries: Mutex::new(vec![initial]),
        }
    }

    /// Parse `initial` and start with it as the only entry
    pub fn parse(initial: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(initial)?))
    }

    /// Number of entries pushed so far, including the initial one
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether the stack is empty (never true for a constructed history)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        let entries = Url::parse("http://localhost/")
            .map(|url| vec![url])
            .unwrap_or_default();
        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl History for MemoryHistory {
    fn current_url(&self) -> Option<Url> {
        self.entries.lock().ok()?.last().cloned()
    }

    fn push_url(&self, url: &Url) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Lock)?;
        entries.push(url.clone());
        Ok(())
    }
}
