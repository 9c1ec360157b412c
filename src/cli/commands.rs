//! Command implementations for the ibooks-notes-exporter CLI.
//!
//! Main commands:
//! - books: List every book that has highlights
//! - export: Render one book's highlights and notes as Markdown
//! - version: Print the version string
//!
//! Commands take the library as a `&dyn LibrarySource` and write to any
//! `io::Write`, so tests can drive them without touching stdout.

use super::Commands;
use crate::config::Config;
use crate::formatters::{render_annotation, render_book_header, render_book_table};
use crate::library::{IBooksLibrary, LibraryPaths, LibrarySource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use tracing::debug;

/// Version string printed by `version`.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Run a parsed command, opening the Apple Books databases only when needed.
pub fn run(command: &Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Version => version(out),
        Commands::Books => with_library(config, |library| books(library, out)),
        Commands::Export {
            book_id,
            skip_first_x_notes,
        } => with_library(config, |library| {
            export(library, book_id, *skip_first_x_notes, out)
        }),
    }
}

/// Open the library for the duration of `f`.
///
/// The connection is closed explicitly on success; on error it is dropped
/// together with the library.
fn with_library<F>(config: &Config, f: F) -> Result<()>
where
    F: FnOnce(&IBooksLibrary) -> Result<()>,
{
    let paths = LibraryPaths::discover(config).context("Cannot locate Apple Books databases")?;
    let library = IBooksLibrary::open(&paths).context("Cannot open Apple Books databases")?;

    f(&library)?;

    library
        .close()
        .context("Cannot close Apple Books databases")
}

/// List all books with highlights as a table.
pub fn books(source: &dyn LibrarySource, out: &mut dyn Write) -> Result<()> {
    let books = source.list_books().context("Cannot list books")?;

    out.write_all(render_book_table(&books).as_bytes())?;
    out.flush()?;

    if books.is_empty() {
        eprintln!("{}", "No books with highlights found.".yellow());
    }

    Ok(())
}

/// Export all highlights and notes of one book.
///
/// The book is looked up before anything is written, so an unknown ID
/// produces no output at all.
pub fn export(
    source: &dyn LibrarySource,
    book_id: &str,
    skip: usize,
    out: &mut dyn Write,
) -> Result<()> {
    debug!("Exporting book {} (skipping first {} notes)", book_id, skip);

    let metadata = source
        .book_metadata(book_id)
        .with_context(|| format!("Cannot export book {}", book_id))?;
    let annotations = source
        .list_annotations(book_id, skip)
        .with_context(|| format!("Cannot read highlights of book {}", book_id))?;

    out.write_all(render_book_header(&metadata).as_bytes())?;
    for annotation in &annotations {
        out.write_all(render_annotation(annotation).as_bytes())?;
    }
    out.flush()?;

    debug!("Exported {} annotations", annotations.len());
    Ok(())
}

/// Print the version string.
pub fn version(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", VERSION)?;
    Ok(())
}
