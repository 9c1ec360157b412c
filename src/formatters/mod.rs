//! Formatters module - Turn library records into text.
//!
//! Every function here is pure: same input, same output, no I/O.
//! - `author`: compact "(LastName)" form of one or more authors
//! - `title`: truncation for the book table
//! - `markdown`: highlight/note blocks for export
//! - `table`: bordered table for the book list

pub mod author;
pub mod markdown;
pub mod table;
pub mod title;

pub use author::{last_name, last_names};
pub use markdown::{
    render_annotation, render_book_header, strip_newlines, style_to_color, HighlightColor,
};
pub use table::render_book_table;
pub use title::truncate_title;
