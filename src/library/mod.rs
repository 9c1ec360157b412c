//! Library module - Read books and annotations from Apple Books.
//!
//! The formatters never touch SQLite directly: commands receive a
//! `LibrarySource` and pull plain records from it.

pub mod ibooks;

pub use ibooks::{IBooksLibrary, LibraryPaths};

use std::path::PathBuf;
use thiserror::Error;

/// A book that has at least one highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    /// Apple Books asset ID
    pub id: String,
    pub title: String,
    /// One or more names joined by " & "
    pub author: String,
    /// Number of highlights and notes
    pub annotation_count: i64,
}

/// Title and author of a single book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
}

/// A highlight with its optional note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Selected text
    pub highlight: String,
    /// Note attached to the highlight (if any)
    pub note: Option<String>,
    /// Highlighter style code (1-5 are colors)
    pub style: i64,
}

/// Errors reported by a library source.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Book {0} is not found in Apple Books")]
    BookNotFound(String),

    #[error("Cannot find {kind} database at {}", path.display())]
    DatabaseNotFound { kind: &'static str, path: PathBuf },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of books and annotations.
pub trait LibrarySource {
    /// List all books with highlights, in the order the source yields them.
    fn list_books(&self) -> Result<Vec<BookSummary>, LibraryError>;

    /// Look up title and author; `BookNotFound` when the ID is unknown.
    fn book_metadata(&self, book_id: &str) -> Result<BookMetadata, LibraryError>;

    /// Highlights of a book in reading order, skipping the first `skip`.
    fn list_annotations(&self, book_id: &str, skip: usize)
        -> Result<Vec<Annotation>, LibraryError>;
}
