use serde::{Deserialize, Serialize};
use crate::books::domain::Book;

pub const EMPTY_CATALOG_LINE: &str = "No books in the library.";
pub const EMPTY_SEARCH_LINE: &str = "No books found.";
pub const OPTION_PLACEHOLDER: &str = "--Select a book--";

// BookOption is one entry of the book picker used by the delete form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookOption {
    // empty for the placeholder entry
    pub value: String,
    pub label: String,
}

pub fn render_book_line<B: Book + ?Sized>(book: &B) -> String {
    format!("ID: {}, Title: {}, Author: {}, ISBN: {}, Year: {}, Genre: {}",
            book.id(), book.title(), book.author(), book.isbn(), book.year(), book.genre())
}

pub fn render_catalog<B: Book>(books: &[B]) -> Vec<String> {
    render_lines(books, EMPTY_CATALOG_LINE)
}

pub fn render_search_results<B: Book>(books: &[B]) -> Vec<String> {
    render_lines(books, EMPTY_SEARCH_LINE)
}

pub fn render_book_options<B: Book>(books: &[B]) -> Vec<BookOption> {
    let mut options = Vec::with_capacity(books.len() + 1);
    options.push(BookOption { value: String::new(), label: OPTION_PLACEHOLDER.to_string() });
    options.extend(books.iter().map(|b| BookOption {
        value: b.id().to_string(),
        label: format!("{} ({})", b.title(), b.author()),
    }));
    options
}

fn render_lines<B: Book>(books: &[B], empty_line: &str) -> Vec<String> {
    if books.is_empty() {
        return vec![empty_line.to_string()];
    }
    books.iter().map(render_book_line).collect()
}
