//! Users repository: in-memory membership keyed by user id

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::user::User,
};

#[derive(Debug, Default)]
pub struct UsersRepository {
    users: IndexMap<i32, User>,
}

impl UsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.users.contains_key(&id)
    }

    /// Insert a new user, rejecting an id already in use
    pub fn create(&mut self, user: User) -> AppResult<&User> {
        if self.contains(user.id) {
            return Err(AppError::DuplicateId { kind: RecordKind::User, id: user.id });
        }
        let (index, _) = self.users.insert_full(user.id, user);
        Ok(&self.users[index])
    }

    /// Get user by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<&User> {
        self.users.get(&id).ok_or(AppError::UserNotFound(id))
    }

    fn get_mut(&mut self, id: i32) -> AppResult<&mut User> {
        self.users.get_mut(&id).ok_or(AppError::UserNotFound(id))
    }

    /// Add `book_id` to the user's borrowed set. Quantity is not touched here.
    pub fn borrow(&mut self, user_id: i32, book_id: i32) -> AppResult<bool> {
        Ok(self.get_mut(user_id)?.borrow_book(book_id))
    }

    /// Remove `book_id` from the user's borrowed set, if present
    pub fn return_book(&mut self, user_id: i32, book_id: i32) -> AppResult<bool> {
        Ok(self.get_mut(user_id)?.return_book(book_id))
    }

    /// All users ordered by id
    pub fn list_all(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Users currently holding `book_id`, in insertion order
    pub fn list_borrowers_of(&self, book_id: i32) -> Vec<&User> {
        self.users.values().filter(|u| u.has_borrowed(book_id)).collect()
    }
}
