//! Loan management service

use crate::{
    error::{AppError, AppResult},
    models::loan::{Loan, LoanState},
    repository::Repository,
};

pub struct LoansService<'a> {
    repository: &'a mut Repository,
}

impl<'a> LoansService<'a> {
    pub fn new(repository: &'a mut Repository) -> Self {
        Self { repository }
    }

    /// Current state of the (user, book) pair
    pub fn state(&self, user_id: i32, book_id: i32) -> AppResult<LoanState> {
        let user = self.repository.users.get_by_id(user_id)?;
        self.repository.books.get_by_id(book_id)?;
        Ok(if user.has_borrowed(book_id) {
            LoanState::Borrowed
        } else {
            LoanState::NotBorrowed
        })
    }

    /// Borrow a book.
    ///
    /// Fails without touching anything unless the user and book exist, a copy
    /// is on the shelf and the user does not already hold the book.
    pub fn borrow(&mut self, user_id: i32, book_id: i32) -> AppResult<Loan> {
        self.check_borrow(user_id, book_id).inspect_err(|e| {
            tracing::warn!("Loan refused: user id={} book id={}: {}", user_id, book_id, e);
        })?;

        let remaining = self.repository.books.decrement_quantity(book_id)?;
        self.repository.users.borrow(user_id, book_id)?;
        tracing::info!(
            "Loan created: user id={} book id={} remaining={}",
            user_id,
            book_id,
            remaining
        );

        Ok(Loan {
            user_id,
            book_id,
            state: LoanState::Borrowed,
            remaining,
        })
    }

    /// Return a borrowed book
    pub fn return_book(&mut self, user_id: i32, book_id: i32) -> AppResult<Loan> {
        self.check_return(user_id, book_id).inspect_err(|e| {
            tracing::warn!("Return refused: user id={} book id={}: {}", user_id, book_id, e);
        })?;

        let remaining = self.repository.books.increment_quantity(book_id)?;
        self.repository.users.return_book(user_id, book_id)?;
        tracing::info!(
            "Loan returned: user id={} book id={} remaining={}",
            user_id,
            book_id,
            remaining
        );

        Ok(Loan {
            user_id,
            book_id,
            state: LoanState::NotBorrowed,
            remaining,
        })
    }

    fn check_borrow(&self, user_id: i32, book_id: i32) -> AppResult<()> {
        let user = self.repository.users.get_by_id(user_id)?;
        let book = self.repository.books.get_by_id(book_id)?;
        if !book.is_available() {
            return Err(AppError::BookUnavailable(book_id));
        }
        if user.has_borrowed(book_id) {
            return Err(AppError::AlreadyBorrowed { user_id, book_id });
        }
        Ok(())
    }

    fn check_return(&self, user_id: i32, book_id: i32) -> AppResult<()> {
        let user = self.repository.users.get_by_id(user_id)?;
        self.repository.books.get_by_id(book_id)?;
        if !user.has_borrowed(book_id) {
            return Err(AppError::NotBorrowed { user_id, book_id });
        }
        Ok(())
    }
}
