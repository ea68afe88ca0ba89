use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    MissingField {
        message: String,
    },
    InvalidIsbn {
        message: String,
    },
    InvalidYear {
        message: String,
        min_year: i64,
        max_year: i64,
    },
    DuplicateIsbn {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The key-value store rejected the read or write (quota exceeded, storage
    // unavailable). Never retried; the in-memory catalog keeps its state.
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn missing_field(message: &str) -> LibraryError {
        LibraryError::MissingField { message: message.to_string() }
    }

    pub fn invalid_isbn(message: &str) -> LibraryError {
        LibraryError::InvalidIsbn { message: message.to_string() }
    }

    pub fn invalid_year(message: &str, min_year: i64, max_year: i64) -> LibraryError {
        LibraryError::InvalidYear { message: message.to_string(), min_year, max_year }
    }

    pub fn duplicate_isbn(message: &str) -> LibraryError {
        LibraryError::DuplicateIsbn { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::MissingField { message } => { message }
            LibraryError::InvalidIsbn { message } => { message }
            LibraryError::InvalidYear { message, .. } => { message }
            LibraryError::DuplicateIsbn { message } => { message }
            LibraryError::NotFound { message } => { message }
            LibraryError::Storage { message, .. } => { message }
            LibraryError::Serialization { message } => { message }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("storage io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            other => {
                write!(f, "{}", other.message())
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
