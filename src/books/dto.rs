use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i64,
    pub genre: String,
}

impl Identifiable for BookDto {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Book for BookDto {
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

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            year: other.year,
            genre: other.genre.to_string(),
        }
    }
}

// NewBookDto carries the unvalidated fields of a book that is about to be added.
// A year of None (or 0) counts as a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub year: Option<i64>,
    pub genre: String,
}

impl NewBookDto {
    pub fn new(title: &str, author: &str, isbn: &str, year: i64, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            year: Some(year),
            genre: genre.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::{BookDto, NewBookDto};

    #[test]
    fn test_should_build_dto_from_entity() {
        let entity = BookEntity::new(7, "Dune", "Frank Herbert", "123-4-56-789012-3", 1965, "SF");
        let book = BookDto::from(&entity);
        assert_eq!(7, book.id);
        assert_eq!("Frank Herbert", book.author.as_str());
        assert_eq!("123-4-56-789012-3", book.isbn.as_str());
    }

    #[test]
    fn test_should_parse_new_book_without_year() {
        let book: NewBookDto = serde_json::from_str(
            r#"{"title":"Dune","author":"Frank Herbert","isbn":"123-4-56-789012-3","genre":"SF"}"#).expect("should parse");
        assert_eq!(None, book.year);
        assert_eq!(Some(1965), NewBookDto::new("Dune", "Frank Herbert", "123-4-56-789012-3", 1965, "SF").year);
    }
}
