use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    library_service: &'a mut dyn LibraryService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(library_service: &'a mut dyn LibraryService) -> Self {
        Self {
            library_service,
        }
    }
}

// AddBookCommandRequest carries the fields of the add-book form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(default)]
    pub is_ebook: bool,
    #[serde(default)]
    pub download_size_mb: Option<String>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            is_ebook: false,
            download_size_mb: None,
        }
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, download_size_mb: &str) -> Self {
        Self {
            is_ebook: true,
            download_size_mb: Some(download_size_mb.to_string()),
            ..Self::new(title, author, isbn)
        }
    }

    pub fn build_book(&self) -> BookDto {
        if self.is_ebook {
            let size = self.download_size_mb.as_deref().unwrap_or_default();
            BookDto::ebook(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), size)
        } else {
            BookDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str())
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.library_service.add_book(req.build_book()).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookFormat;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory::create_library_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_add_book() {
        let mut svc = create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::new("1984", "Orwell", "111"))
            .expect("should add book");
        assert_eq!("111", res.book.isbn.as_str());
        assert_eq!(1, svc.len());
    }

    #[test]
    fn test_should_run_add_ebook() {
        let mut svc = create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let res = AddBookCommand::new(svc.as_mut())
            .execute(AddBookCommandRequest::ebook("Dune", "Herbert", "222", "2.5"))
            .expect("should add ebook");
        assert_eq!(BookFormat::EBook { download_size_mb: "2.5".to_string() }, res.book.format);
    }

    #[test]
    fn test_should_reject_ebook_without_size() {
        let mut svc = create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let mut req = AddBookCommandRequest::new("Dune", "Herbert", "222");
        req.is_ebook = true;
        let err = AddBookCommand::new(svc.as_mut()).execute(req).expect_err("should reject ebook");
        assert!(matches!(err, CommandError::Validation { .. }));
        assert!(svc.is_empty());
    }

    #[test]
    fn test_should_deserialize_form_request() {
        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"title":"1984","author":"Orwell","isbn":"111"}"#).expect("should parse request");
        assert!(!req.is_ebook);
        assert_eq!(None, req.download_size_mb);
    }
}
