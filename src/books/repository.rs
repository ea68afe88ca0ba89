pub mod kv_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::LibrarySnapshot;
use crate::core::library::LibraryResult;

// BookRepository persists the whole catalog as a single snapshot.
#[async_trait(?Send)]
pub trait BookRepository {
    // reads the snapshot; an absent or unreadable snapshot yields an empty catalog
    async fn load(&self) -> LibraryResult<LibrarySnapshot>;

    // overwrites the stored snapshot
    async fn save(&self, snapshot: &LibrarySnapshot) -> LibraryResult<()>;
}
