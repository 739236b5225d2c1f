use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand<'a> {
    library_service: &'a mut dyn LibraryService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(library_service: &'a mut dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.library_service.return_book(req.isbn.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
