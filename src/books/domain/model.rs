use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookFormat tells a printed book apart from an eBook, which also carries the
// download size exactly as it was entered.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BookFormat {
    Print,
    EBook { download_size_mb: String },
}

impl BookFormat {
    pub fn is_ebook(&self) -> bool {
        matches!(self, BookFormat::EBook { .. })
    }
}

// BookEntity is the stored record of a book in the inventory, keyed by isbn.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub is_lent: bool,
    pub format: BookFormat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str, format: BookFormat) -> Self {
        Self {
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
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
