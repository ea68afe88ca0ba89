use tracing::warn;
use crate::books::domain::model::{BookEntity, FIRST_BOOK_ID, LibrarySnapshot};
use crate::core::library::{LibraryError, LibraryResult};

// CatalogStore owns the ordered records and the id counter of one session.
// Ids are handed out from `next_id` and never reused, even after a removal.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    books: Vec<BookEntity>,
    next_id: i64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: vec![],
            next_id: FIRST_BOOK_ID,
        }
    }

    // a stored id at i64::MAX leaves no id to hand out and is rejected
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> LibraryResult<Self> {
        let mut next_id = snapshot.next_id.max(FIRST_BOOK_ID);
        if let Some(max_id) = snapshot.books.iter().map(|b| b.id).max() {
            if max_id >= next_id {
                warn!(max_id, next_id, "stored id counter is behind stored books, advancing it");
                next_id = max_id.checked_add(1).ok_or_else(|| LibraryError::serialization(
                    format!("stored book id {} leaves no id to allocate", max_id).as_str()))?;
            }
        }
        Ok(Self {
            books: snapshot.books,
            next_id,
        })
    }

    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot::new(self.books.clone(), self.next_id)
    }

    pub fn books(&self) -> &[BookEntity] {
        self.books.as_slice()
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_id(&self, id: i64) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.id == id)
    }

    // exact, case-sensitive comparison
    pub fn contains_isbn(&self, isbn: &str) -> bool {
        self.books.iter().any(|b| b.isbn == isbn)
    }

    // the catalog is left untouched when the counter cannot advance
    pub fn append(&mut self, title: &str, author: &str, isbn: &str, year: i64, genre: &str) -> LibraryResult<BookEntity> {
        let next_id = self.next_id.checked_add(1).ok_or_else(|| LibraryError::storage(
            "No book id left to allocate.", Some("IdExhausted".to_string())))?;
        let book = BookEntity::new(self.next_id, title, author, isbn, year, genre);
        self.next_id = next_id;
        self.books.push(book.clone());
        Ok(book)
    }

    pub fn remove(&mut self, id: i64) -> Option<BookEntity> {
        let index = self.books.iter().position(|b| b.id == id)?;
        Some(self.books.remove(index))
    }
}
