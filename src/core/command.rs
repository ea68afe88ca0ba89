use async_trait::async_trait;
use serde::Serialize;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq, Serialize)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    // message suitable for direct display next to the form
    pub fn message(&self) -> &str {
        match self {
            CommandError::Database { message, .. } => { message }
            CommandError::DuplicateKey { message } => { message }
            CommandError::NotFound { message } => { message }
            CommandError::Serialization { message } => { message }
            CommandError::Validation { message, .. } => { message }
        }
    }
}

#[async_trait(?Send)]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::MissingField { message } => {
                CommandError::Validation { message, reason_code: Some("missing_field".to_string()) }
            }
            LibraryError::InvalidIsbn { message } => {
                CommandError::Validation { message, reason_code: Some("invalid_isbn".to_string()) }
            }
            LibraryError::InvalidYear { message, .. } => {
                CommandError::Validation { message, reason_code: Some("invalid_year".to_string()) }
            }
            LibraryError::DuplicateIsbn { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Storage { message, reason_code } => {
                CommandError::Database { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}
