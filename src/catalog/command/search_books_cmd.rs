use std::rc::Rc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::search::SearchCriteria;
use crate::catalog::view::render_search_results;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    #[serde(flatten)]
    pub criteria: SearchCriteria,
}

impl SearchBooksCommandRequest {
    pub fn new(criteria: SearchCriteria) -> Self {
        Self {
            criteria,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub lines: Vec<String>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        let lines = render_search_results(&books);
        Self {
            books,
            lines,
        }
    }
}

#[async_trait(?Send)]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        self.catalog_service.search_books(&req.criteria)
            .await.map_err(CommandError::from).map(SearchBooksCommandResponse::new)
    }
}
