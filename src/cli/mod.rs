//! CLI definitions and command implementations for ibooks-notes-exporter.

pub mod commands;

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Export your highlights and notes from Apple Books
#[derive(Parser, Debug)]
#[command(name = "ibooks-notes-exporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: <config dir>/ibooks-notes-exporter/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a BKLibrary*.sqlite file
    #[arg(long, global = true)]
    pub library_db: Option<PathBuf>,

    /// Path to an AEAnnotation*.sqlite file
    #[arg(long, global = true)]
    pub annotation_db: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Get list of the books with notes and highlights
    Books,

    /// Export all notes and highlights from book with [BOOK_ID]
    Export {
        /// Apple Books asset ID (see `books`)
        #[arg(long = "book_id")]
        book_id: String,

        /// Skip the first N highlights
        #[arg(long = "skip_first_x_notes", default_value_t = 0)]
        skip_first_x_notes: usize,
    },

    /// Print version
    Version,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_default()?,
        };

        if let Some(path) = &self.library_db {
            config.library_db = Some(path.clone());
        }
        if let Some(path) = &self.annotation_db {
            config.annotation_db = Some(path.clone());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from([
            "ibooks-notes-exporter",
            "export",
            "--book_id=ABC123",
            "--skip_first_x_notes=5",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Export {
                book_id: "ABC123".to_string(),
                skip_first_x_notes: 5,
            }
        );
    }

    #[test]
    fn test_parse_export_default_skip() {
        let cli =
            Cli::try_parse_from(["ibooks-notes-exporter", "export", "--book_id", "X"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Export {
                book_id: "X".to_string(),
                skip_first_x_notes: 0,
            }
        );
    }

    #[test]
    fn test_export_requires_book_id() {
        let err = Cli::try_parse_from(["ibooks-notes-exporter", "export"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_books_and_version() {
        let cli = Cli::try_parse_from(["ibooks-notes-exporter", "books", "-v"]).unwrap();
        assert_eq!(cli.command, Commands::Books);
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["ibooks-notes-exporter", "version"]).unwrap();
        assert_eq!(cli.command, Commands::Version);
    }

    #[test]
    fn test_overrides_replace_config_paths() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "library_db = \"/from/file.sqlite\"\nannotation_db = \"/from/file-ann.sqlite\"\n",
        )?;

        let cli = Cli::try_parse_from([
            "ibooks-notes-exporter",
            "books",
            "--config",
            config_path.to_str().unwrap(),
            "--library-db",
            "/from/flag.sqlite",
        ])?;
        let config = cli.resolve_config()?;

        assert_eq!(config.library_db, Some(PathBuf::from("/from/flag.sqlite")));
        assert_eq!(
            config.annotation_db,
            Some(PathBuf::from("/from/file-ann.sqlite"))
        );
        Ok(())
    }
}
