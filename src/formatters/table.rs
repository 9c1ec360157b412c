//! Book list table.
//!
//! ```text
//! +-----------+---------+---------------------------+
//! | BOOK ID   | # NOTES | TITLE AND AUTHOR          |
//! +-----------+---------+---------------------------+
//! | 1A2B3C4D  |      12 | Moby-Dick (Melville)      |
//! +-----------+---------+---------------------------+
//! ```

use super::{last_names, truncate_title};
use crate::library::BookSummary;

/// Column headers, left to right.
pub const HEADERS: [&str; 3] = ["BOOK ID", "# NOTES", "TITLE AND AUTHOR"];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const ALIGNMENTS: [Align; 3] = [Align::Left, Align::Right, Align::Left];

/// Cells of one table row: ID, highlight count, "<title> <authors>".
pub fn book_row(book: &BookSummary) -> [String; 3] {
    [
        book.id.clone(),
        book.annotation_count.to_string(),
        format!("{} {}", truncate_title(&book.title), last_names(&book.author)),
    ]
}

/// Render books in the given order; an empty list still gets a header.
pub fn render_book_table(books: &[BookSummary]) -> String {
    let header = HEADERS.map(str::to_string);
    let rows: Vec<[String; 3]> = books.iter().map(book_row).collect();

    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut output = String::new();

    output.push_str(&border);
    output.push_str(&row_line(&header, &widths, &[Align::Left; 3]));
    output.push_str(&border);
    for row in &rows {
        output.push_str(&row_line(row, &widths, &ALIGNMENTS));
    }
    if !rows.is_empty() {
        output.push_str(&border);
    }

    output
}

fn border_line(widths: &[usize; 3]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[String; 3], widths: &[usize; 3], aligns: &[Align; 3]) -> String {
    let mut line = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(aligns) {
        // Pad by chars so multi-byte titles line up with ASCII ones
        let padding = " ".repeat(width - cell.chars().count());
        match align {
            Align::Left => line.push_str(&format!(" {}{} |", cell, padding)),
            Align::Right => line.push_str(&format!(" {}{} |", padding, cell)),
        }
    }
    line.push('\n');
    line
}
