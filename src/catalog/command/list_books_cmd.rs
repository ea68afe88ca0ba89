use std::rc::Rc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::catalog::view::{render_book_options, render_catalog, BookOption};
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub lines: Vec<String>,
    pub options: Vec<BookOption>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        let lines = render_catalog(&books);
        let options = render_book_options(&books);
        Self {
            books,
            lines,
            options,
        }
    }
}

#[async_trait(?Send)]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn build_service() -> Rc<dyn CatalogService> {
        Rc::from(factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory)
            .await.expect("should create service"))
    }

    #[tokio::test]
    async fn test_should_list_empty_catalog() {
        let cmd = ListBooksCommand::new(build_service().await);
        let res = cmd.execute(ListBooksCommandRequest::default()).await.expect("should list");
        assert!(res.books.is_empty());
        assert_eq!(vec!["No books in the library.".to_string()], res.lines);
        assert_eq!(1, res.options.len());
    }

    #[tokio::test]
    async fn test_should_list_books_in_insertion_order() {
        let svc = build_service().await;
        let add_cmd = AddBookCommand::new(svc.clone());
        let _ = add_cmd.execute(AddBookCommandRequest::new("Emma", "Jane Austen", "123-4-56-789012-1", Some(1815), "Romance"))
            .await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "123-4-56-789012-2", Some(1965), "SF"))
            .await.expect("should add book");

        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default()).await.expect("should list");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Emma", "Dune"], titles);
        assert_eq!(2, res.lines.len());
        assert_eq!("Dune (Frank Herbert)", res.options[2].label.as_str());
    }
}
