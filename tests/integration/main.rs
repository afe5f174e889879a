//! Integration tests driving the library through its public API

mod library_tests;
mod session_tests;
