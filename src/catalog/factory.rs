use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::{KeyValueStore, RepositoryStore};

pub async fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config, store);
    Ok(Box::new(CatalogServiceImpl::load(config, book_repo).await?))
}

pub async fn create_catalog_service_with(config: &Configuration, kv_store: Box<dyn KeyValueStore>) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository_with(config, kv_store);
    Ok(Box::new(CatalogServiceImpl::load(config, book_repo).await?))
}
