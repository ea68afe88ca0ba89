use std::rc::Rc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Absent form fields deserialize as empty so they surface as a missing-field error.
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub genre: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, year: Option<i64>, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            year,
            genre: genre.to_string(),
        }
    }

    pub fn build_book(&self) -> NewBookDto {
        NewBookDto {
            title: self.title.to_string(),
            author: self.author.to_string(),
            isbn: self.isbn.to_string(),
            year: self.year,
            genre: self.genre.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
    pub message: String,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
            message: "Book added successfully.".to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
