use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand<'a> {
    library_service: &'a dyn LibraryService,
}

impl<'a> FindBooksByAuthorCommand<'a> {
    pub fn new(library_service: &'a dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct FindBooksByAuthorCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksByAuthorCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<FindBooksByAuthorCommandRequest, FindBooksByAuthorCommandResponse> for FindBooksByAuthorCommand<'_> {
    fn execute(&mut self, req: FindBooksByAuthorCommandRequest) -> Result<FindBooksByAuthorCommandResponse, CommandError> {
        let books = self.library_service.books_by_author(req.author.as_str()).collect();
        Ok(FindBooksByAuthorCommandResponse::new(books))
    }
}
