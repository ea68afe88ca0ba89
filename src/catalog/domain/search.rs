use std::cmp::Reverse;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

// SearchCriteria holds the optional search fields. Empty text counts as absent;
// numeric members are constraints whenever they are Some, including Some(0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub year_min: Option<i64>,
    #[serde(default)]
    pub year_max: Option<i64>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_year_range(mut self, year_min: Option<i64>, year_max: Option<i64>) -> Self {
        self.year_min = year_min;
        self.year_max = year_max;
        self
    }
}

// criteria with text terms lower-cased once per search
struct Matcher {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    year: Option<i64>,
    year_min: Option<i64>,
    year_max: Option<i64>,
}

impl Matcher {
    fn new(criteria: &SearchCriteria) -> Self {
        Self {
            title: lowered(&criteria.title),
            author: lowered(&criteria.author),
            genre: lowered(&criteria.genre),
            year: criteria.year,
            year_min: criteria.year_min,
            year_max: criteria.year_max,
        }
    }

    fn title_matches<B: Book + ?Sized>(&self, book: &B) -> Option<bool> {
        self.title.as_ref().map(|t| book.title().to_lowercase().contains(t.as_str()))
    }

    fn author_matches<B: Book + ?Sized>(&self, book: &B) -> Option<bool> {
        self.author.as_ref().map(|a| book.author().to_lowercase().contains(a.as_str()))
    }

    fn genre_matches<B: Book + ?Sized>(&self, book: &B) -> Option<bool> {
        self.genre.as_ref().map(|g| book.genre().to_lowercase() == *g)
    }

    fn year_matches<B: Book + ?Sized>(&self, book: &B) -> Option<bool> {
        self.year.map(|y| book.year() == y)
    }

    fn matches<B: Book + ?Sized>(&self, book: &B) -> bool {
        self.title_matches(book).unwrap_or(true) &&
            self.author_matches(book).unwrap_or(true) &&
            self.genre_matches(book).unwrap_or(true) &&
            self.year_matches(book).unwrap_or(true) &&
            self.year_min.map_or(true, |min| book.year() >= min) &&
            self.year_max.map_or(true, |max| book.year() <= max)
    }

    // year_min/year_max filter but never score
    fn score<B: Book + ?Sized>(&self, book: &B) -> usize {
        [
            self.title_matches(book),
            self.author_matches(book),
            self.genre_matches(book),
            self.year_matches(book),
        ].iter().filter(|m| **m == Some(true)).count()
    }
}

fn lowered(term: &Option<String>) -> Option<String> {
    term.as_ref().filter(|t| !t.is_empty()).map(|t| t.to_lowercase())
}

// how many of the supplied title, author, genre and year criteria the book meets
pub fn relevance_score<B: Book + ?Sized>(book: &B, criteria: &SearchCriteria) -> usize {
    Matcher::new(criteria).score(book)
}

// keeps the books meeting every supplied criterion, best score first; ties keep catalog order
pub fn search<'a, B: Book>(books: &'a [B], criteria: &SearchCriteria) -> Vec<&'a B> {
    let matcher = Matcher::new(criteria);
    let mut results: Vec<&B> = books.iter().filter(|b| matcher.matches(*b)).collect();
    results.sort_by_key(|b| Reverse(matcher.score(*b)));
    results
}
