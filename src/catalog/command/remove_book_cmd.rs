use std::rc::Rc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Rc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Rc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: "Book deleted successfully.".to_string(),
        }
    }
}

impl Default for RemoveBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn build_service() -> Rc<dyn CatalogService> {
        Rc::from(factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory)
            .await.expect("should create service"))
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = build_service().await;
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let added = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert", "123-4-56-789012-3", Some(1965), "SF"))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new(added.book.id)).await.expect("should remove book");
        assert_eq!("Book deleted successfully.", res.message.as_str());
        assert!(svc.list_books().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_removing_unknown_book() {
        let remove_cmd = RemoveBookCommand::new(build_service().await);
        let err = remove_cmd.execute(RemoveBookCommandRequest::new(999)).await.expect_err("should fail");
        assert_eq!(CommandError::NotFound { message: "Book not found.".to_string() }, err);
    }
}
