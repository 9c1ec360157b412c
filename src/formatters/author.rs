//! Author name normalization.
//!
//! Reduces an author field such as `"Dr. John Smith Jr. & Jane Doe"` to the
//! compact `"(Smith) & (Doe)"` shown in the book table.

/// Separator between names in the Apple Books author field.
pub const AUTHOR_SEPARATOR: &str = " & ";

/// Short capitalized word ending in `.` or `,` ("Dr.", "Jr.", "Mr,").
pub fn is_honorific(word: &str) -> bool {
    let (Some(first), Some(last)) = (word.chars().next(), word.chars().next_back()) else {
        return false;
    };

    word.chars().count() <= 3 && first.is_uppercase() && (last == '.' || last == ',')
}

/// Last name of a single person, wrapped in parentheses.
///
/// Words are scanned from the end and honorifics are skipped. A name made only
/// of honorifics yields `"()"`.
pub fn last_name(name: &str) -> String {
    let last = name
        .split_whitespace()
        .rev()
        .find(|word| !is_honorific(word))
        .unwrap_or_default();

    let last = last.strip_suffix(',').unwrap_or(last);
    let last = last.strip_suffix('.').unwrap_or(last);

    format!("({})", last)
}

/// Last names of every author in a `" & "`-separated list.
pub fn last_names(names: &str) -> String {
    let name_list: Vec<&str> = names.split(AUTHOR_SEPARATOR).collect();

    match name_list.as_slice() {
        [single] => last_name(single),
        [first, second] => format!(
            "{}{}{}",
            last_name(first),
            AUTHOR_SEPARATOR,
            last_name(second)
        ),
        [first, rest @ ..] => {
            let rest: Vec<String> = rest.iter().map(|name| last_name(name)).collect();
            format!(
                "{}{}{}",
                last_name(first),
                AUTHOR_SEPARATOR,
                rest.join(AUTHOR_SEPARATOR)
            )
        }
        [] => last_name(""),
    }
}
