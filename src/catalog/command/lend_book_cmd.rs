use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct LendBookCommand<'a> {
    library_service: &'a mut dyn LibraryService,
}

impl<'a> LendBookCommand<'a> {
    pub fn new(library_service: &'a mut dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LendBookCommandRequest {
    pub isbn: String,
}

impl LendBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct LendBookCommandResponse {
    pub book: BookDto,
}

impl LendBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<LendBookCommandRequest, LendBookCommandResponse> for LendBookCommand<'_> {
    fn execute(&mut self, req: LendBookCommandRequest) -> Result<LendBookCommandResponse, CommandError> {
        self.library_service.lend_book(req.isbn.as_str())
            .map_err(CommandError::from).map(LendBookCommandResponse::new)
    }
}
