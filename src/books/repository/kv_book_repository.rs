use async_trait::async_trait;
use tracing::{debug, warn};
use crate::books::domain::model::LibrarySnapshot;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::KeyValueStore;

pub struct KVBookRepository {
    store: Box<dyn KeyValueStore>,
    snapshot_key: String,
}

impl KVBookRepository {
    pub fn new(store: Box<dyn KeyValueStore>, snapshot_key: &str) -> Self {
        Self {
            store,
            snapshot_key: snapshot_key.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl BookRepository for KVBookRepository {
    async fn load(&self) -> LibraryResult<LibrarySnapshot> {
        let key: &str = self.snapshot_key.as_ref();
        match self.store.get(key).await? {
            Some(json) => {
                match serde_json::from_str::<LibrarySnapshot>(json.as_str()) {
                    Ok(snapshot) => {
                        debug!(key, books = snapshot.books.len(), next_id = snapshot.next_id, "loaded snapshot");
                        Ok(snapshot)
                    }
                    Err(err) => {
                        warn!(key, error = %err, "discarding unreadable snapshot");
                        Ok(LibrarySnapshot::default())
                    }
                }
            }
            None => {
                debug!(key, "no snapshot stored, starting empty");
                Ok(LibrarySnapshot::default())
            }
        }
    }

    async fn save(&self, snapshot: &LibrarySnapshot) -> LibraryResult<()> {
        let key: &str = self.snapshot_key.as_ref();
        let json = serde_json::to_string(snapshot)?;
        self.store.set(key, json.as_str()).await?;
        debug!(key, books = snapshot.books.len(), next_id = snapshot.next_id, "saved snapshot");
        Ok(())
    }
}
