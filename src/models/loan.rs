//! Loan (borrow) model and related types

/// Borrowing state of a (user, book) pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoanState {
    #[default]
    NotBorrowed,
    Borrowed,
}

/// Outcome of a successful borrow or return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub user_id: i32,
    pub book_id: i32,
    pub state: LoanState,
    /// Copies of the book left on the shelf after the operation
    pub remaining: i32,
}
