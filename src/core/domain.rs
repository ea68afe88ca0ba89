use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SNAPSHOT_KEY: &str = "bibliotheque";
pub const DEFAULT_MIN_YEAR: i64 = 1000;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    // key under which the whole catalog snapshot is stored
    pub snapshot_key: String,
    // oldest publication year accepted when adding a book
    pub min_year: i64,
    // directory used by the file-backed key-value store
    pub storage_dir: PathBuf,
}

impl Configuration {
    pub fn new(snapshot_key: &str) -> Self {
        Configuration {
            snapshot_key: snapshot_key.to_string(),
            min_year: DEFAULT_MIN_YEAR,
            storage_dir: PathBuf::from("data"),
        }
    }

    pub fn with_storage_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.storage_dir = dir.into();
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_SNAPSHOT_KEY)
    }
}
