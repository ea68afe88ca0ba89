pub mod search;
pub mod service;
pub mod store;
pub mod validation;

use async_trait::async_trait;
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::search::SearchCriteria;
use crate::core::library::LibraryResult;

#[async_trait(?Send)]
pub trait CatalogService {
    async fn add_book(&self, book: &NewBookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn search_books(&self, criteria: &SearchCriteria) -> LibraryResult<Vec<BookDto>>;
}
