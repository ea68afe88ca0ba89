use lazy_static::lazy_static;
use regex::Regex;
use crate::books::dto::NewBookDto;
use crate::core::library::{LibraryError, LibraryResult};

// NNN-N-NN-NNNNNN-N with ASCII digits only
const ISBN_PATTERN: &str = r"^[0-9]{3}-[0-9]-[0-9]{2}-[0-9]{6}-[0-9]$";

lazy_static! {
    static ref ISBN_REGEX: Regex = Regex::new(ISBN_PATTERN).expect("invalid isbn pattern");
}

pub fn is_valid_isbn(isbn: &str) -> bool {
    ISBN_REGEX.is_match(isbn)
}

// Checks run in order and the first failure wins: missing fields, ISBN shape,
// then the year range [min_year, current_year]. Uniqueness is left to the caller.
pub fn validate_new_book(book: &NewBookDto, min_year: i64, current_year: i64) -> LibraryResult<i64> {
    let year = match book.year {
        Some(year) if year != 0 => year,
        _ => return Err(LibraryError::missing_field("All fields are required.")),
    };
    if book.title.is_empty() || book.author.is_empty() || book.isbn.is_empty() || book.genre.is_empty() {
        return Err(LibraryError::missing_field("All fields are required."));
    }
    if !is_valid_isbn(book.isbn.as_str()) {
        return Err(LibraryError::invalid_isbn("Invalid ISBN format."));
    }
    if year < min_year || year > current_year {
        return Err(LibraryError::invalid_year(
            format!("Invalid year ({} to {}).", min_year, current_year).as_str(), min_year, current_year));
    }
    Ok(year)
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::catalog::domain::validation::{is_valid_isbn, validate_new_book};
    use crate::core::library::LibraryError;

    fn book(title: &str, isbn: &str, year: Option<i64>) -> NewBookDto {
        NewBookDto {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            isbn: isbn.to_string(),
            year,
            genre: "SF".to_string(),
        }
    }

    #[test]
    fn test_should_match_isbn_shape() {
        assert!(is_valid_isbn("123-4-56-789012-3"));
        assert!(!is_valid_isbn("1234-56-789-0"));
        assert!(!is_valid_isbn("123-4-56-789012-3 "));
        assert!(!is_valid_isbn("x123-4-56-789012-3"));
        assert!(!is_valid_isbn("123-4-56-78901a-3"));
        assert!(!is_valid_isbn("١٢٣-4-56-789012-3"));
    }

    #[test]
    fn test_should_accept_valid_book() {
        let year = validate_new_book(&book("Dune", "123-4-56-789012-3", Some(1999)), 1000, 2024)
            .expect("should be valid");
        assert_eq!(1999, year);
    }

    #[test]
    fn test_should_report_missing_field_first() {
        let err = validate_new_book(&book("", "bad", Some(3000)), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::MissingField { .. }));
        let err = validate_new_book(&book("Dune", "bad", None), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::MissingField { .. }));
        let err = validate_new_book(&book("Dune", "bad", Some(0)), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::MissingField { .. }));
    }

    #[test]
    fn test_should_require_every_text_field() {
        let blanks: [(&str, fn(&mut NewBookDto)); 3] = [
            ("author", |b| b.author.clear()),
            ("isbn", |b| b.isbn.clear()),
            ("genre", |b| b.genre.clear()),
        ];
        for (field, blank) in blanks {
            let mut input = book("Dune", "bad", Some(3000));
            blank(&mut input);
            let err = validate_new_book(&input, 1000, 2024).expect_err("should fail");
            assert!(matches!(err, LibraryError::MissingField { .. }), "empty {} gave {:?}", field, err);
        }
    }

    #[test]
    fn test_should_report_isbn_before_year() {
        let err = validate_new_book(&book("Dune", "1234-56-789-0", Some(3000)), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::InvalidIsbn { .. }));
    }

    #[test]
    fn test_should_check_year_bounds() {
        let err = validate_new_book(&book("Dune", "123-4-56-789012-3", Some(3000)), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::InvalidYear { min_year: 1000, max_year: 2024, .. }));
        assert_eq!("Invalid year (1000 to 2024).", err.message());
        let err = validate_new_book(&book("Dune", "123-4-56-789012-3", Some(999)), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::InvalidYear { .. }));
        let err = validate_new_book(&book("Dune", "123-4-56-789012-3", Some(-5)), 1000, 2024).expect_err("should fail");
        assert!(matches!(err, LibraryError::InvalidYear { .. }));
        assert!(validate_new_book(&book("Dune", "123-4-56-789012-3", Some(1000)), 1000, 2024).is_ok());
        assert!(validate_new_book(&book("Dune", "123-4-56-789012-3", Some(2024)), 1000, 2024).is_ok());
    }
}
