use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::LibraryService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub struct LibraryServiceImpl {
    metadata: HashMap<String, String>,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            metadata: HashMap::from([("branch_id".to_string(), config.branch_id.to_string())]),
            book_repository,
            events_publisher,
        }
    }

    // loads a book for a lending transition; unknown isbns are not available
    fn find_for_lending(&self, isbn: &str) -> LibraryResult<BookEntity> {
        self.book_repository.get(isbn).map_err(|_| LibraryError::book_not_available(
            format!("book with isbn {} does not exist", isbn).as_str(), isbn))
    }

    fn set_lent(&mut self, isbn: &str, lent: bool) -> LibraryResult<BookDto> {
        let mut existing = self.find_for_lending(isbn)?;
        if existing.is_lent == lent {
            let message = if lent {
                format!("book with isbn {} is already lent", isbn)
            } else {
                format!("book with isbn {} is not lent", isbn)
            };
            warn!(isbn, lent, "rejected lending transition");
            return Err(LibraryError::book_not_available(message.as_str(), isbn));
        }
        existing.is_lent = lent;
        self.book_repository.update(&existing)?;
        let book = BookDto::from(&self.book_repository.get(isbn)?);
        let event = if lent {
            DomainEvent::lent("book_lent", "books", isbn, &self.metadata, &book)?
        } else {
            DomainEvent::returned("book_returned", "books", isbn, &self.metadata, &book)?
        };
        self.events_publisher.publish(&event)?;
        info!(isbn, lent, "changed lending state");
        Ok(book)
    }
}

impl LibraryService for LibraryServiceImpl {
    fn add_book(&mut self, book: BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        let event = DomainEvent::added("book_added", "books", book.isbn.as_str(), &self.metadata, &book)?;
        self.book_repository.create(BookEntity::from(&book))?;
        self.events_publisher.publish(&event)?;
        info!(isbn = book.isbn.as_str(), title = book.title.as_str(), "added book");
        Ok(book)
    }

    fn lend_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        self.set_lent(isbn, true)
    }

    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto> {
        self.set_lent(isbn, false)
    }

    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()> {
        if self.book_repository.delete(isbn)? == 0 {
            debug!(isbn, "ignored removal of unknown book");
            return Ok(());
        }
        let data = isbn.to_string();
        self.events_publisher.publish(&DomainEvent::removed(
            "book_removed", "books", isbn, &self.metadata, &data)?)?;
        info!(isbn, "removed book");
        Ok(())
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).map(|b| BookDto::from(&b))
    }

    fn books_by_author<'a>(&'a self, author: &'a str) -> Box<dyn Iterator<Item = BookDto> + 'a> {
        debug!(author, "searching books by author");
        Box::new(self.book_repository.find_by_author(author).map(BookDto::from))
    }

    fn books(&self) -> Box<dyn Iterator<Item = BookDto> + '_> {
        Box::new(self.book_repository.iter().map(BookDto::from))
    }

    fn len(&self) -> usize {
        self.book_repository.len()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            is_lent: other.is_lent,
            format: other.format.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            is_lent: other.is_lent,
            format: other.format.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
