//! Apple Books Library
//!
//! Reads books and highlights from the two Apple Books SQLite databases.
//!
//! # Storage Locations
//!
//! - **Library**: `~/Library/Containers/com.apple.iBooksX/Data/Documents/BKLibrary/BKLibrary-*.sqlite`
//!   - Table `ZBKLIBRARYASSET(ZASSETID, ZTITLE, ZAUTHOR, ...)`
//! - **Annotations**: `~/Library/Containers/com.apple.iBooksX/Data/Documents/AEAnnotation/AEAnnotation_*.sqlite`
//!   - Table `ZAEANNOTATION(ZANNOTATIONASSETID, ZANNOTATIONSELECTEDTEXT, ZANNOTATIONNOTE,
//!     ZANNOTATIONSTYLE, ZANNOTATIONDELETED, ZPLLOCATIONRANGESTART, ...)`
//!
//! The library database is opened read-only and the annotation database is
//! attached to the same connection as schema `annotations`.

use super::{Annotation, BookMetadata, BookSummary, LibraryError, LibrarySource};
use crate::config::Config;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::debug;

const LIST_BOOKS_QUERY: &str = "
    SELECT b.ZASSETID, COALESCE(b.ZTITLE, ''), COALESCE(b.ZAUTHOR, ''), COUNT(a.Z_PK)
    FROM ZBKLIBRARYASSET b
    JOIN annotations.ZAEANNOTATION a ON a.ZANNOTATIONASSETID = b.ZASSETID
    WHERE a.ZANNOTATIONSELECTEDTEXT IS NOT NULL
      AND COALESCE(a.ZANNOTATIONDELETED, 0) = 0
    GROUP BY b.ZASSETID
    ORDER BY b.ZTITLE COLLATE NOCASE, b.ZASSETID";

const BOOK_METADATA_QUERY: &str = "
    SELECT COALESCE(ZTITLE, ''), COALESCE(ZAUTHOR, '')
    FROM ZBKLIBRARYASSET
    WHERE ZASSETID = ?1
    LIMIT 1";

const LIST_ANNOTATIONS_QUERY: &str = "
    SELECT ZANNOTATIONSELECTEDTEXT, ZANNOTATIONNOTE, COALESCE(ZANNOTATIONSTYLE, 0)
    FROM annotations.ZAEANNOTATION
    WHERE ZANNOTATIONASSETID = ?1
      AND ZANNOTATIONSELECTEDTEXT IS NOT NULL
      AND COALESCE(ZANNOTATIONDELETED, 0) = 0
    ORDER BY ZPLLOCATIONRANGESTART, Z_PK
    LIMIT -1 OFFSET ?2";

/// Resolved paths of the two databases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    pub library_db: PathBuf,
    pub annotation_db: PathBuf,
}

impl LibraryPaths {
    /// Resolve database paths: explicit config paths win, otherwise the first
    /// `*.sqlite` file (by name) in each Apple Books directory.
    pub fn discover(config: &Config) -> Result<Self, LibraryError> {
        let library_db = match &config.library_db {
            Some(path) => path.clone(),
            None => find_sqlite_file(&config.library_db_dir(), "library")?,
        };
        let annotation_db = match &config.annotation_db {
            Some(path) => path.clone(),
            None => find_sqlite_file(&config.annotation_db_dir(), "annotation")?,
        };

        Ok(Self {
            library_db,
            annotation_db,
        })
    }
}

/// Find the first `*.sqlite` file in a directory, sorted by file name.
fn find_sqlite_file(dir: &Path, kind: &'static str) -> Result<PathBuf, LibraryError> {
    if !dir.is_dir() {
        return Err(LibraryError::DatabaseNotFound {
            kind,
            path: dir.to_path_buf(),
        });
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "sqlite"))
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| LibraryError::DatabaseNotFound {
            kind,
            path: dir.to_path_buf(),
        })
}

/// Read-only handle over the Apple Books databases.
///
/// The connection is released when the value is dropped; call [`close`](Self::close)
/// to observe close errors.
pub struct IBooksLibrary {
    conn: Connection,
}

impl IBooksLibrary {
    /// Open the library database and attach the annotation database.
    pub fn open(paths: &LibraryPaths) -> Result<Self, LibraryError> {
        for (kind, path) in [
            ("library", &paths.library_db),
            ("annotation", &paths.annotation_db),
        ] {
            if !path.is_file() {
                return Err(LibraryError::DatabaseNotFound {
                    kind,
                    path: path.clone(),
                });
            }
        }

        let conn = Connection::open_with_flags(
            &paths.library_db,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("Opened library database {}", paths.library_db.display());

        conn.execute(
            "ATTACH DATABASE ?1 AS annotations",
            params![paths.annotation_db.to_string_lossy().to_string()],
        )?;
        debug!(
            "Attached annotation database {}",
            paths.annotation_db.display()
        );

        Ok(Self { conn })
    }

    /// Close the connection explicitly.
    pub fn close(self) -> Result<(), LibraryError> {
        self.conn.close().map_err(|(_, e)| LibraryError::Sqlite(e))
    }
}

impl LibrarySource for IBooksLibrary {
    fn list_books(&self) -> Result<Vec<BookSummary>, LibraryError> {
        let mut stmt = self.conn.prepare(LIST_BOOKS_QUERY)?;
        let books = stmt
            .query_map([], |row| {
                Ok(BookSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    author: row.get(2)?,
                    annotation_count: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Found {} books with highlights", books.len());
        Ok(books)
    }

    fn book_metadata(&self, book_id: &str) -> Result<BookMetadata, LibraryError> {
        self.conn
            .query_row(BOOK_METADATA_QUERY, params![book_id], |row| {
                Ok(BookMetadata {
                    title: row.get(0)?,
                    author: row.get(1)?,
                })
            })
            .optional()?
            .ok_or_else(|| LibraryError::BookNotFound(book_id.to_string()))
    }

    fn list_annotations(
        &self,
        book_id: &str,
        skip: usize,
    ) -> Result<Vec<Annotation>, LibraryError> {
        let offset = i64::try_from(skip).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(LIST_ANNOTATIONS_QUERY)?;
        let annotations = stmt
            .query_map(params![book_id, offset], |row| {
                Ok(Annotation {
                    highlight: row.get(0)?,
                    note: row.get(1)?,
                    style: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Loaded {} annotations for book {} (skipped {})",
            annotations.len(),
            book_id,
            skip
        );
        Ok(annotations)
    }
}
