use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookFormat;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

pub const MISSING_FIELDS_MESSAGE: &str = "Title, Author, and ISBN are required.";
pub const MISSING_SIZE_MESSAGE: &str = "Download size is required for eBooks.";

// BookDto is a data transfer object for the library service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub is_lent: bool,
    pub format: BookFormat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookDto {
    pub fn new(title: &str, author: &str, isbn: &str) -> BookDto {
        Self::with_format(title, author, isbn, BookFormat::Print)
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, download_size_mb: &str) -> BookDto {
        Self::with_format(title, author, isbn,
                          BookFormat::EBook { download_size_mb: download_size_mb.to_string() })
    }

    fn with_format(title: &str, author: &str, isbn: &str, format: BookFormat) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            is_lent: false,
            format,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Checks the fields a book cannot be added without.
    pub fn validate(&self) -> LibraryResult<()> {
        if self.title.is_empty() || self.author.is_empty() || self.isbn.is_empty() {
            return Err(LibraryError::validation(MISSING_FIELDS_MESSAGE, Some("400".to_string())));
        }
        if let BookFormat::EBook { download_size_mb } = &self.format {
            if download_size_mb.is_empty() {
                return Err(LibraryError::validation(MISSING_SIZE_MESSAGE, Some("400".to_string())));
            }
        }
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
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

    fn is_lent(&self) -> bool {
        self.is_lent
    }

    fn status(&self) -> BookStatus {
        BookStatus::from_lent(self.is_lent)
    }

    fn describe(&self) -> String {
        let summary = format!("'{}' by {} (ISBN: {}) - {}", self.title, self.author, self.isbn, self.status());
        match &self.format {
            BookFormat::Print => summary,
            BookFormat::EBook { download_size_mb } => format!("{} [eBook, {} MB]", summary, download_size_mb),
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
