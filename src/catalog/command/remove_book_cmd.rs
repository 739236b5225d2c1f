use serde::{Deserialize, Serialize};
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    library_service: &'a mut dyn LibraryService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(library_service: &'a mut dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}


#[derive(Debug, Default, Serialize)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.library_service.remove_book(req.isbn.as_str())
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}
