//! Main menu entries

/// One entry of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    AddBook,
    AddUser,
    BorrowBook,
    ReturnBook,
    ListBooksSorted,
    ListBooksByPrefix,
    ListUsersByBook,
    ListAllUsers,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 9] = [
        MenuItem::AddBook,
        MenuItem::AddUser,
        MenuItem::BorrowBook,
        MenuItem::ReturnBook,
        MenuItem::ListBooksSorted,
        MenuItem::ListBooksByPrefix,
        MenuItem::ListUsersByBook,
        MenuItem::ListAllUsers,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::AddBook => "Add Book",
            MenuItem::AddUser => "Add User",
            MenuItem::BorrowBook => "Borrow Book",
            MenuItem::ReturnBook => "Return Book",
            MenuItem::ListBooksSorted => "List Books Sorted",
            MenuItem::ListBooksByPrefix => "List Books with Prefix",
            MenuItem::ListUsersByBook => "List Users Who Borrowed a Book",
            MenuItem::ListAllUsers => "List All Users",
            MenuItem::Exit => "Exit",
        }
    }

    /// Parse a 1-based menu number as typed by the operator
    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}
