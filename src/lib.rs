//! ibooks-notes-exporter core library
//!
//! Reads the Apple Books databases and renders highlights and notes as text.
//! Provides the following capabilities:
//! - Locate and open the library (`BKLibrary`) and annotation (`AEAnnotation`) databases
//! - List every book that has highlights, with a compact title and author column
//! - Export one book's highlights and notes as Markdown with colored spans
//!
//! Pipeline: Library (rows) -> Formatters (text) -> stdout

pub mod cli;
pub mod config;
pub mod formatters;
pub mod library;

// Re-export main types
pub use config::Config;
pub use library::{
    Annotation, BookMetadata, BookSummary, IBooksLibrary, LibraryError, LibraryPaths,
    LibrarySource,
};
