use serde::{Deserialize, Deserializer, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

pub const FIRST_BOOK_ID: i64 = 1;

// BookEntity is the persisted form of a catalog record. The field names of the
// stored snapshot are fixed, so existing catalogs keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "auteur")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "annee")]
    pub year: i64,
    pub genre: String,
}

impl BookEntity {
    pub fn new(id: i64, title: &str, author: &str, isbn: &str, year: i64, genre: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            year,
            genre: genre.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn isbn(&self) -> &str {
        self.isbn.as_str()
    }

    fn year(&self) -> i64 {
        self.year
    }

    fn genre(&self) -> &str {
        self.genre.as_str()
    }
}

// Whole-catalog snapshot as written to the key-value store:
// {"livres": [...], "prochainIdLivre": n}. Missing or null members fall back
// to an empty list and the first id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    #[serde(rename = "livres", default, deserialize_with = "null_as_empty")]
    pub books: Vec<BookEntity>,
    #[serde(rename = "prochainIdLivre", default = "first_book_id", deserialize_with = "next_id_or_first")]
    pub next_id: i64,
}

impl LibrarySnapshot {
    pub fn new(books: Vec<BookEntity>, next_id: i64) -> Self {
        Self { books, next_id }
    }
}

impl Default for LibrarySnapshot {
    fn default() -> Self {
        LibrarySnapshot::new(vec![], FIRST_BOOK_ID)
    }
}

fn first_book_id() -> i64 {
    FIRST_BOOK_ID
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BookEntity>, D::Error> {
    let books: Option<Vec<BookEntity>> = Deserialize::deserialize(deserializer)?;
    Ok(books.unwrap_or_default())
}

// a zero, negative or null counter counts as absent
fn next_id_or_first<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let next_id: Option<i64> = Deserialize::deserialize(deserializer)?;
    Ok(next_id.filter(|n| *n >= FIRST_BOOK_ID).unwrap_or(FIRST_BOOK_ID))
}
