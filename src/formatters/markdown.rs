//! Markdown Formatter
//!
//! Renders a book export: a title header followed by one block per highlight.
//!
//! Output format:
//! ```markdown
//! # The Book Title — Jane Doe
//!
//! > <span style='background-color:#fde15c;color:black'>Highlighted text</span>
//!
//! Optional note
//! ---
//!
//!
//! ```

use crate::library::{Annotation, BookMetadata};

/// Line written after every annotation block.
pub const BLOCK_SEPARATOR: &str = "---\n\n\n";

/// Apple Books highlighter colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightColor {
    Green,
    Blue,
    Yellow,
    Pink,
    Purple,
}

impl HighlightColor {
    /// Map a `ZANNOTATIONSTYLE` value; underline and unknown styles have no color.
    pub fn from_style_code(style: i64) -> Option<Self> {
        match style {
            1 => Some(Self::Green),
            2 => Some(Self::Blue),
            3 => Some(Self::Yellow),
            4 => Some(Self::Pink),
            5 => Some(Self::Purple),
            _ => None,
        }
    }

    /// CSS hex value used as span background.
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#a8e196",
            Self::Blue => "#a5c3ff",
            Self::Yellow => "#fde15c",
            Self::Pink => "#ffaabf",
            Self::Purple => "#cdbbfb",
        }
    }
}

/// Background color for a style code, empty when unknown.
pub fn style_to_color(style: i64) -> &'static str {
    HighlightColor::from_style_code(style)
        .map(|c| c.hex())
        .unwrap_or("")
}

/// Remove line breaks so a highlight stays on one Markdown line.
pub fn strip_newlines(text: &str) -> String {
    text.replace('\n', "")
}

/// `# <title> — <author>` followed by a blank line.
pub fn render_book_header(metadata: &BookMetadata) -> String {
    format!("# {} — {}\n\n", metadata.title, metadata.author)
}

/// Render one highlight (and its note, if any) as a Markdown block.
pub fn render_annotation(annotation: &Annotation) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "> <span style='background-color:{};color:black'>{}</span>\n",
        style_to_color(annotation.style),
        strip_newlines(&annotation.highlight)
    ));

    if let Some(note) = &annotation.note {
        output.push_str(&format!("\n{}\n", strip_newlines(note)));
    }

    output.push_str(BLOCK_SEPARATOR);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(highlight: &str, note: Option<&str>, style: i64) -> Annotation {
        Annotation {
            highlight: highlight.to_string(),
            note: note.map(|n| n.to_string()),
            style,
        }
    }

    #[test]
    fn test_style_colors() {
        assert_eq!(style_to_color(1), "#a8e196");
        assert_eq!(style_to_color(2), "#a5c3ff");
        assert_eq!(style_to_color(3), "#fde15c");
        assert_eq!(style_to_color(4), "#ffaabf");
        assert_eq!(style_to_color(5), "#cdbbfb");
    }

    #[test]
    fn test_unknown_style_has_no_color() {
        assert_eq!(style_to_color(0), "");
        assert_eq!(style_to_color(99), "");
        assert_eq!(style_to_color(-1), "");
        assert_eq!(HighlightColor::from_style_code(6), None);
    }

    #[test]
    fn test_render_highlight_only() {
        let rendered = render_annotation(&annotation("Call me Ishmael.", None, 3));
        assert_eq!(
            rendered,
            "> <span style='background-color:#fde15c;color:black'>Call me Ishmael.</span>\n---\n\n\n"
        );
    }

    #[test]
    fn test_render_with_note() {
        let rendered = render_annotation(&annotation("Quote", Some("My note"), 1));
        assert_eq!(
            rendered,
            "> <span style='background-color:#a8e196;color:black'>Quote</span>\n\nMy note\n---\n\n\n"
        );
    }

    #[test]
    fn test_newlines_removed_without_separator() {
        let rendered = render_annotation(&annotation("line1\nline2", Some("a\nb\n"), 2));
        assert!(rendered.contains(">line1line2</span>"));
        assert!(rendered.contains("\nab\n"));
    }

    #[test]
    fn test_unknown_style_renders_unstyled_span() {
        let rendered = render_annotation(&annotation("Text", None, 99));
        assert!(rendered.starts_with("> <span style='background-color:;color:black'>Text</span>\n"));
    }

    #[test]
    fn test_empty_note_is_still_rendered() {
        let rendered = render_annotation(&annotation("Text", Some(""), 4));
        assert!(rendered.ends_with("</span>\n\n\n---\n\n\n"));
    }

    #[test]
    fn test_book_header() {
        let header = render_book_header(&BookMetadata {
            title: "Moby-Dick".to_string(),
            author: "Herman Melville".to_string(),
        });
        assert_eq!(header, "# Moby-Dick — Herman Melville\n\n");
    }
}
