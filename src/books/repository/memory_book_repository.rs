use std::collections::HashMap;
use chrono::Utc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps books keyed by isbn; `order` records first
// insertion so listings stay stable when a book is replaced.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: HashMap<String, BookEntity>,
    order: Vec<String>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        if !self.books.contains_key(&entity.isbn) {
            self.order.push(entity.isbn.clone());
        }
        self.books.insert(entity.isbn.clone(), entity);
        Ok(1)
    }

    fn update(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
        let existing = self.books.get_mut(&entity.isbn).ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", entity.isbn).as_str()))?;
        *existing = BookEntity {
            version: existing.version + 1,
            created_at: existing.created_at,
            updated_at: Utc::now(),
            ..entity.clone()
        };
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.books.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("book with isbn {} not found", id).as_str()))
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        match self.books.remove(id) {
            Some(_) => {
                self.order.retain(|isbn| isbn != id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &BookEntity> + '_> {
        Box::new(self.order.iter().filter_map(|isbn| self.books.get(isbn)))
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {}
