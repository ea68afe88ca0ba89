use crate::books::repository::BookRepository;
use crate::books::repository::kv_book_repository::KVBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::{KeyValueStore, RepositoryStore};
use crate::utils::kv::build_kv_store;

pub fn create_book_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn BookRepository> {
    let kv_store = build_kv_store(config, store);
    create_book_repository_with(config, kv_store)
}

// wires the repository to a caller-supplied store, e.g. the host's local storage
pub fn create_book_repository_with(config: &Configuration, kv_store: Box<dyn KeyValueStore>) -> Box<dyn BookRepository> {
    Box::new(KVBookRepository::new(kv_store, config.snapshot_key.as_str()))
}
