use std::cell::RefCell;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::dto::{BookDto, NewBookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::search::{search, SearchCriteria};
use crate::catalog::domain::store::CatalogStore;
use crate::catalog::domain::validation::validate_new_book;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::current_year;

// CatalogServiceImpl holds the session's catalog. Every successful mutation
// writes the full snapshot back through the book repository; a failed write is
// returned to the caller while the in-memory change is kept.
pub struct CatalogServiceImpl {
    min_year: i64,
    book_repository: Box<dyn BookRepository>,
    store: RefCell<CatalogStore>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>, store: CatalogStore) -> Self {
        Self {
            min_year: config.min_year,
            book_repository,
            store: RefCell::new(store),
        }
    }

    // hydrates the catalog from the stored snapshot
    pub async fn load(config: &Configuration, book_repository: Box<dyn BookRepository>) -> LibraryResult<Self> {
        let snapshot = book_repository.load().await?;
        let store = CatalogStore::from_snapshot(snapshot)?;
        info!(books = store.len(), next_id = store.next_id(), "catalog loaded");
        Ok(Self::new(config, book_repository, store))
    }
}

#[async_trait(?Send)]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookDto> {
        let year = validate_new_book(book, self.min_year, current_year())?;
        // the borrow ends before the write is awaited
        let (added, snapshot) = {
            let mut store = self.store.borrow_mut();
            if store.contains_isbn(book.isbn.as_str()) {
                return Err(LibraryError::duplicate_isbn("A book with this ISBN already exists."));
            }
            let added = store.append(book.title.as_str(), book.author.as_str(),
                                     book.isbn.as_str(), year, book.genre.as_str())?;
            (added, store.snapshot())
        };
        self.book_repository.save(&snapshot).await?;
        info!(id = added.id, isbn = added.isbn.as_str(), "book added");
        Ok(BookDto::from(&added))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        let snapshot = {
            let mut store = self.store.borrow_mut();
            if store.remove(id).is_none() {
                return Err(LibraryError::not_found("Book not found."));
            }
            store.snapshot()
        };
        self.book_repository.save(&snapshot).await?;
        info!(id, "book removed");
        Ok(())
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.store.borrow().find_by_id(id).map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found("Book not found."))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.store.borrow().books().iter().map(BookDto::from).collect())
    }

    async fn search_books(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookDto>> {
        let store = self.store.borrow();
        let results: Vec<BookDto> = search(store.books(), criteria).into_iter().map(BookDto::from).collect();
        debug!(matched = results.len(), total = store.len(), "catalog searched");
        Ok(results)
    }
}
