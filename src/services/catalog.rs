//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::book::{Book, BookSort, CreateBook},
    repository::Repository,
};

pub struct CatalogService<'a> {
    repository: &'a mut Repository,
}

impl<'a> CatalogService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    /// Add a new book. The id is checked before the name and quantity.
    pub fn add_book(&mut self, book: CreateBook) -> AppResult<Book> {
        if self.repository.books.contains(book.id) {
            return Err(AppError::DuplicateId { kind: RecordKind::Book, id: book.id });
        }
        book.validate()
            .map_err(|e| AppError::from_validation(RecordKind::Book, &e))?;

        let created = self.repository.books.create(book.into())?.clone();
        tracing::info!(
            "Catalog create: book id={} name={:?} quantity={}",
            created.id,
            created.name,
            created.quantity
        );
        Ok(created)
    }

    /// Get book by ID
    pub fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).cloned()
    }

    /// Find a book by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> AppResult<Book> {
        self.repository.books.get_by_name(name).cloned()
    }

    /// Books whose name starts with `prefix`, ignoring case
    pub fn list_by_prefix(&self, prefix: &str) -> Vec<Book> {
        let books: Vec<Book> = self
            .repository
            .books
            .list_by_prefix(prefix)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!("Catalog prefix search {:?}: {} match(es)", prefix, books.len());
        books
    }

    /// All books in the requested order
    pub fn list_sorted(&self, sort: BookSort) -> Vec<Book> {
        tracing::debug!("Catalog listing sorted by {}", sort.label());
        self.repository
            .books
            .list_sorted(sort)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.repository.books.len()
    }
}
