//! Data models for the library console

pub mod book;
pub mod loan;
pub mod user;

use once_cell::sync::Lazy;
use regex::Regex;

// Re-export commonly used types
pub use book::{Book, BookSort, CreateBook};
pub use loan::{Loan, LoanState};
pub use user::{CreateUser, User};

/// Matches any name with at least one non-whitespace character
pub(crate) static NON_BLANK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S").expect("NON_BLANK pattern is valid"));
