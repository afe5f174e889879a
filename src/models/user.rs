//! User (borrower) model and related types

use indexmap::IndexSet;
use validator::Validate;

use super::NON_BLANK;

/// Library user with the books they currently hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Book ids in the order they were borrowed
    pub borrowed_books: IndexSet<i32>,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed_books: IndexSet::new(),
        }
    }

    /// Record a borrowed book. Returns false if it was already recorded.
    pub fn borrow_book(&mut self, book_id: i32) -> bool {
        self.borrowed_books.insert(book_id)
    }

    /// Forget a borrowed book. Returns false if it was not recorded.
    pub fn return_book(&mut self, book_id: i32) -> bool {
        self.borrowed_books.shift_remove(&book_id)
    }

    pub fn has_borrowed(&self, book_id: i32) -> bool {
        self.borrowed_books.contains(&book_id)
    }
}

/// Create user request
#[derive(Debug, Clone, Validate)]
pub struct CreateUser {
    pub id: i32,
    #[validate(regex(path = *NON_BLANK, message = "User name cannot be empty"))]
    pub name: String,
}

impl CreateUser {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<CreateUser> for User {
    fn from(user: CreateUser) -> Self {
        User::new(user.id, user.name)
    }
}
