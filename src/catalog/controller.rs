use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::lend_book_cmd::{LendBookCommand, LendBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::LibraryService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{ControllerResponse, Listing, Notice};
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

pub const AVAILABLE_BOOKS_HEADING: &str = "Available Books:";
pub const NO_BOOKS_BY_AUTHOR_MESSAGE: &str = "No books found by this author.";

/// Owns one library and turns the actions of the inventory form into commands.
/// Every action returns the notice to show, if any, and the listing to display.
pub struct LibraryController {
    config: Configuration,
    service: Box<dyn LibraryService>,
}

impl LibraryController {
    pub fn new(config: &Configuration) -> Self {
        let service = factory::create_library_service(config, GatewayPublisherVia::Logs);
        Self::with_service(config, service)
    }

    pub fn with_service(config: &Configuration, service: Box<dyn LibraryService>) -> Self {
        Self {
            config: config.clone(),
            service,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn service(&self) -> &dyn LibraryService {
        self.service.as_ref()
    }

    pub fn add_book(&mut self, req: AddBookCommandRequest) -> ControllerResponse {
        let title = req.title.clone();
        let res = AddBookCommand::new(self.service.as_mut()).execute(req);
        match res {
            Ok(_) => self.respond(Notice::info(format!("Book '{}' added.", title).as_str())),
            Err(err) => self.respond(Notice::from(err)),
        }
    }

    pub fn lend_book(&mut self, isbn: &str) -> ControllerResponse {
        if isbn.is_empty() {
            return self.refresh();
        }
        let res = LendBookCommand::new(self.service.as_mut())
            .execute(LendBookCommandRequest::new(isbn))
            .map(|_| ());
        self.respond(Self::outcome(res, "Book lent successfully."))
    }

    pub fn return_book(&mut self, isbn: &str) -> ControllerResponse {
        if isbn.is_empty() {
            return self.refresh();
        }
        let res = ReturnBookCommand::new(self.service.as_mut())
            .execute(ReturnBookCommandRequest::new(isbn))
            .map(|_| ());
        self.respond(Self::outcome(res, "Book returned successfully."))
    }

    pub fn remove_book(&mut self, isbn: &str) -> ControllerResponse {
        if isbn.is_empty() {
            return self.refresh();
        }
        let res = RemoveBookCommand::new(self.service.as_mut())
            .execute(RemoveBookCommandRequest::new(isbn))
            .map(|_| ());
        self.respond(Self::outcome(res, "Book removed."))
    }

    pub fn view_books_by_author(&self, author: &str) -> ControllerResponse {
        if author.is_empty() {
            return self.refresh();
        }
        match FindBooksByAuthorCommand::new(self.service.as_ref())
            .execute(FindBooksByAuthorCommandRequest::new(author)) {
            Ok(res) if res.books.is_empty() => {
                debug!(author, "no books by author");
                ControllerResponse::new(Some(Notice::info(NO_BOOKS_BY_AUTHOR_MESSAGE)), Listing::empty())
            }
            Ok(res) => {
                let lines = res.books.iter().map(|b| b.to_string()).collect();
                ControllerResponse::new(None, Listing::new(format!("Books by {}:", author).as_str(), lines))
            }
            Err(err) => ControllerResponse::new(Some(Notice::from(err)), Listing::empty()),
        }
    }

    /// The full listing without any notice.
    pub fn refresh(&self) -> ControllerResponse {
        match ListBooksCommand::new(self.service.as_ref()).execute(ListBooksCommandRequest::new()) {
            Ok(res) => {
                let lines = res.books.iter().map(|b| b.to_string()).collect();
                ControllerResponse::new(None, Listing::new(AVAILABLE_BOOKS_HEADING, lines))
            }
            Err(err) => ControllerResponse::new(Some(Notice::from(err)), Listing::empty()),
        }
    }

    fn respond(&self, notice: Notice) -> ControllerResponse {
        let mut res = self.refresh();
        res.notice = Some(notice);
        res
    }

    fn outcome(res: Result<(), CommandError>, success: &str) -> Notice {
        match res {
            Ok(_) => Notice::info(success),
            Err(err) => Notice::from(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
    use crate::catalog::controller::{AVAILABLE_BOOKS_HEADING, LibraryController, NO_BOOKS_BY_AUTHOR_MESSAGE};
    use crate::catalog::factory::create_library_service;
    use crate::core::controller::{Notice, NoticeKind};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    fn build_controller() -> LibraryController {
        let config = Configuration::new("test");
        LibraryController::with_service(&config, create_library_service(&config, GatewayPublisherVia::Memory))
    }

    #[test]
    fn test_should_add_book_and_refresh() {
        let mut controller = build_controller();
        let res = controller.add_book(AddBookCommandRequest::new("1984", "Orwell", "111"));
        assert_eq!(Some(Notice::info("Book '1984' added.")), res.notice);
        assert_eq!(Some(AVAILABLE_BOOKS_HEADING.to_string()), res.listing.heading);
        assert_eq!(vec!["'1984' by Orwell (ISBN: 111) - Available".to_string()], res.listing.lines);
    }

    #[test]
    fn test_should_report_missing_fields() {
        let mut controller = build_controller();
        let res = controller.add_book(AddBookCommandRequest::new("1984", "", "111"));
        assert_eq!(Some(Notice::error("Title, Author, and ISBN are required.")), res.notice);
        assert!(res.listing.lines.is_empty());

        let mut req = AddBookCommandRequest::new("Dune", "Herbert", "222");
        req.is_ebook = true;
        let res = controller.add_book(req);
        assert_eq!(Some(Notice::error("Download size is required for eBooks.")), res.notice);
    }

    #[test]
    fn test_should_lend_and_return_book() {
        let mut controller = build_controller();
        let _ = controller.add_book(AddBookCommandRequest::ebook("Dune", "Herbert", "222", "2.5"));

        let res = controller.lend_book("222");
        assert_eq!(Some(Notice::info("Book lent successfully.")), res.notice);
        assert_eq!(vec!["'Dune' by Herbert (ISBN: 222) - Lent [eBook, 2.5 MB]".to_string()], res.listing.lines);

        let res = controller.lend_book("222");
        assert_eq!(Some(NoticeKind::Error), res.notice.map(|n| n.kind));

        let res = controller.return_book("222");
        assert_eq!(Some(Notice::info("Book returned successfully.")), res.notice);

        let res = controller.return_book("222");
        assert_eq!(Some(Notice::error("book with isbn 222 is not lent")), res.notice);
    }

    #[test]
    fn test_should_report_unknown_book() {
        let mut controller = build_controller();
        let res = controller.lend_book("999");
        assert_eq!(Some(Notice::error("book with isbn 999 does not exist")), res.notice);
        assert_eq!(Some(AVAILABLE_BOOKS_HEADING.to_string()), res.listing.heading);
    }

    #[test]
    fn test_should_remove_book_silently() {
        let mut controller = build_controller();
        let _ = controller.add_book(AddBookCommandRequest::new("1984", "Orwell", "111"));
        let res = controller.remove_book("111");
        assert_eq!(Some(Notice::info("Book removed.")), res.notice);
        assert!(res.listing.lines.is_empty());

        let res = controller.remove_book("111");
        assert_eq!(Some(Notice::info("Book removed.")), res.notice);
    }

    #[test]
    fn test_should_ignore_empty_input() {
        let mut controller = build_controller();
        assert_eq!(None, controller.lend_book("").notice);
        assert_eq!(None, controller.return_book("").notice);
        assert_eq!(None, controller.remove_book("").notice);
        assert_eq!(None, controller.view_books_by_author("").notice);
    }

    #[test]
    fn test_should_view_books_by_author() {
        let mut controller = build_controller();
        let _ = controller.add_book(AddBookCommandRequest::new("1984", "Orwell", "111"));
        let _ = controller.add_book(AddBookCommandRequest::new("Dune", "Herbert", "222"));

        let res = controller.view_books_by_author("Orwell");
        assert_eq!(None, res.notice);
        assert_eq!(Some("Books by Orwell:".to_string()), res.listing.heading);
        assert_eq!(1, res.listing.lines.len());

        let res = controller.view_books_by_author("Tolkien");
        assert_eq!(Some(Notice::info(NO_BOOKS_BY_AUTHOR_MESSAGE)), res.notice);
        assert_eq!(None, res.listing.heading);
        assert!(res.listing.lines.is_empty());
    }

    #[test]
    fn test_should_keep_config() {
        let controller = LibraryController::new(&Configuration::new("north"));
        assert_eq!("north", controller.config().branch_id.as_str());
        assert!(controller.service().is_empty());
    }
}
