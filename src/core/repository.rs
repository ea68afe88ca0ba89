use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// KeyValueStore abstracts the string key-value primitive the catalog is persisted into,
// e.g. browser local storage.
#[async_trait(?Send)]
pub trait KeyValueStore {
    // returns the stored value or None when the key was never written
    async fn get(&self, key: &str) -> LibraryResult<Option<String>>;

    // overwrites the value stored under the key
    async fn set(&self, key: &str, value: &str) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
    LocalFile,
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_serialize_store() {
        let json = serde_json::to_string(&RepositoryStore::LocalFile).expect("should serialize");
        assert_eq!("\"LocalFile\"", json);
        let store: RepositoryStore = serde_json::from_str("\"InMemory\"").expect("should parse");
        assert_eq!(RepositoryStore::InMemory, store);
    }
}
