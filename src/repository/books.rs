//! Books repository: in-memory catalog keyed by book id

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::book::{Book, BookSort},
};

#[derive(Debug, Default)]
pub struct BooksRepository {
    books: IndexMap<i32, Book>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.books.contains_key(&id)
    }

    /// Insert a new book, rejecting an id already in use
    pub fn create(&mut self, book: Book) -> AppResult<&Book> {
        if self.contains(book.id) {
            return Err(AppError::DuplicateId { kind: RecordKind::Book, id: book.id });
        }
        let (index, _) = self.books.insert_full(book.id, book);
        Ok(&self.books[index])
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&Book> {
        self.books.get(&id).ok_or(AppError::BookNotFound(id))
    }

    /// First book, in insertion order, whose name matches ignoring case
    pub fn get_by_name(&self, name: &str) -> AppResult<&Book> {
        self.books
            .values()
            .find(|b| b.name_matches(name))
            .ok_or_else(|| AppError::BookNameNotFound(name.to_string()))
    }

    /// Books whose name starts with `prefix` ignoring case, in insertion order
    pub fn list_by_prefix(&self, prefix: &str) -> Vec<&Book> {
        self.books.values().filter(|b| b.name_starts_with(prefix)).collect()
    }

    /// All books ordered by id or by name; ties keep insertion order
    pub fn list_sorted(&self, sort: BookSort) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.books.values().collect();
        match sort {
            BookSort::Id => books.sort_by_key(|b| b.id),
            BookSort::Name => books.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        books
    }

    /// Take one copy off the shelf, returning the new quantity
    pub fn decrement_quantity(&mut self, id: i32) -> AppResult<i32> {
        let book = self.books.get_mut(&id).ok_or(AppError::BookNotFound(id))?;
        if !book.is_available() {
            return Err(AppError::BookUnavailable(id));
        }
        book.quantity -= 1;
        Ok(book.quantity)
    }

    /// Put one copy back on the shelf, returning the new quantity
    pub fn increment_quantity(&mut self, id: i32) -> AppResult<i32> {
        let book = self.books.get_mut(&id).ok_or(AppError::BookNotFound(id))?;
        book.quantity = book.quantity.checked_add(1).ok_or(AppError::InvalidQuantity)?;
        Ok(book.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i32, name: &str, quantity: i32) -> Book {
        Book {
            id,
            name: name.to_string(),
            quantity,
        }
    }

    fn catalog() -> BooksRepository {
        let mut repo = BooksRepository::new();
        for b in [book(3, "dune", 1), book(1, "Dune", 2), book(2, "Atlas", 0), book(4, "Dune", 5)] {
            repo.create(b).unwrap();
        }
        repo
    }

    #[test]
    fn test_duplicate_id_leaves_original() {
        let mut repo = catalog();
        let err = repo.create(book(1, "Other", 9)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateId { kind: RecordKind::Book, id: 1 }));
        assert_eq!(repo.len(), 4);
        assert_eq!(repo.get_by_id(1).unwrap(), &book(1, "Dune", 2));
    }

    #[test]
    fn test_sort_by_name_is_stable_and_case_sensitive() {
        let repo = catalog();
        let ids: Vec<i32> = repo.list_sorted(BookSort::Name).iter().map(|b| b.id).collect();
        // Uppercase sorts before lowercase; the two "Dune" entries keep insertion order
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_sort_by_id() {
        let repo = catalog();
        let ids: Vec<i32> = repo.list_sorted(BookSort::Id).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_get_by_name_returns_first_inserted() {
        let repo = catalog();
        assert_eq!(repo.get_by_name("DUNE").unwrap().id, 3);
        assert!(matches!(repo.get_by_name("Emma"), Err(AppError::BookNameNotFound(_))));
    }

    #[test]
    fn test_quantity_never_negative() {
        let mut repo = catalog();
        assert!(matches!(repo.decrement_quantity(2), Err(AppError::BookUnavailable(2))));
        assert_eq!(repo.get_by_id(2).unwrap().quantity, 0);
        assert_eq!(repo.decrement_quantity(3).unwrap(), 0);
        assert_eq!(repo.increment_quantity(3).unwrap(), 1);
        assert!(matches!(repo.increment_quantity(99), Err(AppError::BookNotFound(99))));
    }
}
