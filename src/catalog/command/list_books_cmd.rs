use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    library_service: &'a dyn LibraryService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(library_service: &'a dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse::new(self.library_service.books().collect()))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory::create_library_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_list_books() {
        let mut svc = create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = ListBooksCommand::new(svc.as_ref())
            .execute(ListBooksCommandRequest::new()).expect("should list books");
        assert!(res.books.is_empty());

        let _ = svc.add_book(BookDto::new("1984", "Orwell", "111")).expect("should add book");
        let _ = svc.add_book(BookDto::ebook("Dune", "Herbert", "222", "2.5")).expect("should add book");
        let res = ListBooksCommand::new(svc.as_ref())
            .execute(ListBooksCommandRequest::new()).expect("should list books");
        let isbns: Vec<&str> = res.books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["111", "222"], isbns);
    }
}
