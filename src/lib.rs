//! In-memory book inventory: add, lend, return, remove and search books by author.
//!
//! The `catalog` module holds the library service and the controller a UI layer
//! drives; `books` holds the book records and their repository.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod utils;

pub use crate::books::domain::model::BookFormat;
pub use crate::books::dto::BookDto;
pub use crate::catalog::controller::LibraryController;
pub use crate::catalog::domain::LibraryService;
pub use crate::core::domain::Configuration;
pub use crate::core::library::{LibraryError, LibraryResult};
