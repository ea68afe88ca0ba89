use std::cell::RefCell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use async_trait::async_trait;
use tracing::debug;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::{KeyValueStore, RepositoryStore};

// InMemoryStore keeps values in a map shared between clones, so a catalog can be
// reloaded from the same "browser storage" within a session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // rejects writes whose value is larger than `quota` bytes, like local storage does
    pub fn with_quota(quota: usize) -> Self {
        Self {
            values: Rc::new(RefCell::new(HashMap::new())),
            quota: Some(quota),
        }
    }
}

#[async_trait(?Send)]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> LibraryResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> LibraryResult<()> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(LibraryError::storage(
                    format!("quota exceeded while writing {} ({} > {} bytes)", key, value.len(), quota).as_str(),
                    Some("QuotaExceeded".to_string())));
            }
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// LocalFileStore persists every key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    dir: PathBuf,
}

impl LocalFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> LibraryResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(LibraryError::storage(
                format!("invalid storage key {:?}", key).as_str(), Some("InvalidKey".to_string())));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait(?Send)]
impl KeyValueStore for LocalFileStore {
    async fn get(&self, key: &str) -> LibraryResult<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored value");
                Ok(None)
            }
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> LibraryResult<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, value).await?;
        debug!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }
}

pub fn build_kv_store(config: &Configuration, store: RepositoryStore) -> Box<dyn KeyValueStore> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(InMemoryStore::new())
        }
        RepositoryStore::LocalFile => {
            Box::new(LocalFileStore::new(&config.storage_dir))
        }
    }
}
