//! Interactive console session.
//!
//! Reads menu choices and field values line by line, calls into the
//! services and prints the outcome. Input and output are generic so the
//! same session runs against a terminal or a scripted buffer.

pub mod menu;
pub mod render;

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult, RecordKind},
    models::{
        book::{BookSort, CreateBook},
        user::CreateUser,
    },
    AppState,
};

pub use menu::MenuItem;

/// What the operator gave us for a prompt
enum Prompted<T> {
    Value(T),
    /// Input was rejected and reported; back to the menu
    Rejected,
    /// Input stream ended
    Closed,
}

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Unwrap a prompt result or leave the current action
macro_rules! prompted {
    ($prompt:expr) => {
        match $prompt? {
            Prompted::Value(value) => value,
            Prompted::Rejected => return Ok(Step::Continue),
            Prompted::Closed => return Ok(Step::Exit),
        }
    };
}

pub struct Session<'a, R, W> {
    state: &'a mut AppState,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(state: &'a mut AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let Some(item) = MenuItem::from_choice(&choice) else {
                writeln!(
                    self.output,
                    "Invalid option. Please enter a number from 1 to {}.",
                    MenuItem::ALL.len()
                )?;
                continue;
            };

            tracing::debug!("Menu selection: {}", item.label());
            if self.handle(item)? == Step::Exit {
                break;
            }
            if self.state.config.console.pause_after_action && !self.pause()? {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.state.config.console.title)?;
        writeln!(self.output)?;
        for (index, item) in MenuItem::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}", index + 1, item.label())?;
        }
        write!(self.output, "\nSelect an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns false if input ended while waiting
    fn pause(&mut self) -> AppResult<bool> {
        write!(self.output, "\n\nPress Enter to return to the menu...")?;
        self.output.flush()?;
        Ok(self.read_line()?.is_some())
    }

    fn handle(&mut self, item: MenuItem) -> AppResult<Step> {
        let step = match item {
            MenuItem::AddBook => self.add_book(),
            MenuItem::AddUser => self.add_user(),
            MenuItem::BorrowBook => self.borrow_book(),
            MenuItem::ReturnBook => self.return_book(),
            MenuItem::ListBooksSorted => self.list_books_sorted(),
            MenuItem::ListBooksByPrefix => self.list_books_by_prefix(),
            MenuItem::ListUsersByBook => self.list_users_by_book(),
            MenuItem::ListAllUsers => self.list_all_users(),
            MenuItem::Exit => {
                writeln!(self.output, "Exiting the program...")?;
                return Ok(Step::Exit);
            }
        };

        match step {
            Err(err) if err.is_recoverable() => {
                self.report(&err)?;
                Ok(Step::Continue)
            }
            other => other,
        }
    }

    fn report(&mut self, err: &AppError) -> AppResult<()> {
        tracing::debug!("Reported error code={:?}: {}", err.code(), err);
        writeln!(self.output, "{}", err)?;
        Ok(())
    }

    fn add_book(&mut self) -> AppResult<Step> {
        let id = prompted!(self.read_int(
            "Enter Book ID: ",
            "Invalid input for Book ID. Please enter a valid number."
        ));
        if self.state.services.repository().books.contains(id) {
            return Err(AppError::DuplicateId { kind: RecordKind::Book, id });
        }

        let name = prompted!(self.read_name("Enter Book Name: ", RecordKind::Book));

        let quantity = prompted!(self.read_int(
            "Enter Quantity: ",
            "Invalid input for Quantity. Please enter a valid number."
        ));

        self.state
            .services
            .catalog()
            .add_book(CreateBook::new(id, name, quantity))?;
        writeln!(self.output, "Book added successfully.")?;
        Ok(Step::Continue)
    }

    fn add_user(&mut self) -> AppResult<Step> {
        let id = prompted!(self.read_int(
            "Enter User ID: ",
            "Invalid input for User ID. Please enter a valid number."
        ));
        if self.state.services.repository().users.contains(id) {
            return Err(AppError::DuplicateId { kind: RecordKind::User, id });
        }

        let name = prompted!(self.read_name("Enter User Name: ", RecordKind::User));

        self.state.services.users().add_user(CreateUser::new(id, name))?;
        writeln!(self.output, "User added successfully.")?;
        Ok(Step::Continue)
    }

    fn borrow_book(&mut self) -> AppResult<Step> {
        let user_id = prompted!(self.read_int("Enter User ID: ", "Invalid User ID."));
        let book_id = prompted!(self.read_int("Enter Book ID: ", "Invalid Book ID."));

        self.state.services.loans().borrow(user_id, book_id)?;
        writeln!(self.output, "Book borrowed successfully.")?;
        Ok(Step::Continue)
    }

    fn return_book(&mut self) -> AppResult<Step> {
        let user_id = prompted!(self.read_int("Enter User ID: ", "Invalid User ID."));
        let book_id = prompted!(self.read_int("Enter Book ID: ", "Invalid Book ID."));

        self.state.services.loans().return_book(user_id, book_id)?;
        writeln!(self.output, "Book returned successfully.")?;
        Ok(Step::Continue)
    }

    fn list_books_sorted(&mut self) -> AppResult<Step> {
        let choice = prompted!(self.prompt("Sort by (1 = ID, 2 = Name): "));
        let sort = match choice.trim() {
            "1" => BookSort::Id,
            "2" => BookSort::Name,
            _ => {
                writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?;
                return Ok(Step::Continue);
            }
        };

        let books = self.state.services.catalog().list_sorted(sort);
        writeln!(self.output, "\nBooks sorted by {}:", sort.label())?;
        for book in &books {
            writeln!(self.output, "{}", render::book_line(book))?;
        }
        Ok(Step::Continue)
    }

    fn list_books_by_prefix(&mut self) -> AppResult<Step> {
        let prefix = prompted!(self.read_text("Enter book prefix: ", "Prefix cannot be empty."));

        let books = self.state.services.catalog().list_by_prefix(&prefix);
        if books.is_empty() {
            writeln!(self.output, "\nNo books found with the given prefix.")?;
            return Ok(Step::Continue);
        }
        writeln!(self.output, "\nBooks with the prefix '{}' :", prefix)?;
        for book in &books {
            writeln!(self.output, "{}", render::book_line(book))?;
        }
        Ok(Step::Continue)
    }

    fn list_users_by_book(&mut self) -> AppResult<Step> {
        let name = prompted!(self.read_text("Enter book name: ", "Book name cannot be empty."));

        let (_, borrowers) = match self.state.services.users().list_borrowers_by_name(&name) {
            Ok(found) => found,
            Err(err @ AppError::BookNameNotFound(_)) => {
                writeln!(self.output)?;
                self.report(&err)?;
                return Ok(Step::Continue);
            }
            Err(err) => return Err(err),
        };

        if borrowers.is_empty() {
            writeln!(self.output, "\nNo users have borrowed the book '{}'.", name)?;
            return Ok(Step::Continue);
        }
        writeln!(self.output, "\nUsers who borrowed the book '{}':", name)?;
        for user in &borrowers {
            writeln!(self.output, "{}", render::borrower_line(user))?;
        }
        Ok(Step::Continue)
    }

    fn list_all_users(&mut self) -> AppResult<Step> {
        let users = self.state.services.users().list_users();
        writeln!(self.output, "\nAll users with borrowed books:")?;
        for user in &users {
            writeln!(self.output, "{}", render::user_line(user))?;
        }
        Ok(Step::Continue)
    }

    /// Read one line without its line ending; `None` once input is exhausted.
    /// Bytes that are not UTF-8 are replaced rather than ending the session.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        while matches!(bytes.last(), Some(&(b'\n' | b'\r'))) {
            bytes.pop();
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn prompt(&mut self, label: &str) -> AppResult<Prompted<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(line) => Prompted::Value(line),
            None => Prompted::Closed,
        })
    }

    fn read_int(&mut self, label: &str, invalid: &str) -> AppResult<Prompted<i32>> {
        let line = match self.prompt(label)? {
            Prompted::Value(line) => line,
            Prompted::Rejected => return Ok(Prompted::Rejected),
            Prompted::Closed => return Ok(Prompted::Closed),
        };
        match line.trim().parse() {
            Ok(value) => Ok(Prompted::Value(value)),
            Err(_) => {
                writeln!(self.output, "{}", invalid)?;
                Ok(Prompted::Rejected)
            }
        }
    }

    /// Read a non-blank line, reporting `empty` otherwise
    fn read_text(&mut self, label: &str, empty: &str) -> AppResult<Prompted<String>> {
        let line = match self.prompt(label)? {
            Prompted::Value(line) => line,
            other => return Ok(other),
        };
        if line.trim().is_empty() {
            writeln!(self.output, "{}", empty)?;
            return Ok(Prompted::Rejected);
        }
        Ok(Prompted::Value(line))
    }

    fn read_name(&mut self, label: &str, kind: RecordKind) -> AppResult<Prompted<String>> {
        let message = AppError::InvalidName { kind }.to_string();
        self.read_text(label, &message)
    }
}
