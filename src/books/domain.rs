use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;

pub mod model;

// Book is the uniform capability shared by printed books and eBooks
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn isbn(&self) -> &str;
    fn is_lent(&self) -> bool;
    fn status(&self) -> BookStatus;
    fn describe(&self) -> String;
}
