pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

/// The book inventory: books keyed by isbn with their lending state.
pub trait LibraryService {
    /// Adds a book, replacing any book with the same isbn.
    fn add_book(&mut self, book: BookDto) -> LibraryResult<BookDto>;
    /// Marks a book as lent; fails with `BookNotAvailable` when the isbn is
    /// unknown or the book is already lent.
    fn lend_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    /// Marks a lent book as returned; fails with `BookNotAvailable` when the
    /// isbn is unknown or the book is not lent.
    fn return_book(&mut self, isbn: &str) -> LibraryResult<BookDto>;
    /// Removes a book. Unknown isbns are ignored.
    fn remove_book(&mut self, isbn: &str) -> LibraryResult<()>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    /// Books whose author matches exactly. Each call scans the current inventory.
    fn books_by_author<'a>(&'a self, author: &'a str) -> Box<dyn Iterator<Item = BookDto> + 'a>;
    fn books(&self) -> Box<dyn Iterator<Item = BookDto> + '_>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
