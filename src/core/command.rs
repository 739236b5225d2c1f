use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotAvailable {
        message: String,
        isbn: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
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
    pub fn message(&self) -> &str {
        match self {
            CommandError::NotAvailable { message, .. } => message,
            CommandError::NotFound { message } => message,
            CommandError::Runtime { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::BookNotAvailable { message, isbn } => {
                CommandError::NotAvailable { message, isbn }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_convert_library_error() {
        let err = CommandError::from(LibraryError::book_not_available("book 1 is already lent", "1"));
        assert_eq!(CommandError::NotAvailable { message: "book 1 is already lent".to_string(), isbn: "1".to_string() }, err);
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_display_message_only() {
        let err = CommandError::Validation { message: "Title, Author, and ISBN are required.".to_string(), reason_code: Some("400".to_string()) };
        assert_eq!("Title, Author, and ISBN are required.", err.to_string());
    }
}
