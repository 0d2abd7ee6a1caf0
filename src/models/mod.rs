//! Data models for the LocalLibrary catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod enums;
pub mod genre;
pub mod language;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use book_instance::BookInstance;
pub use enums::LoanStatus;
pub use genre::Genre;
pub use language::Language;
