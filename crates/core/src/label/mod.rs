//! Slug-to-label formatting.
//!
//! Detection results come back as machine-friendly slugs such as
//! `traffic-police-stop`; this module turns them into display labels.

/// Convert a slug into a title-cased, human-readable label.
///
/// Runs of `-`/`_` become a single space, whitespace runs collapse to one
/// space, and the ends are trimmed. Then every ASCII word character
/// (`[A-Za-z0-9_]`) that follows a non-word character, or starts the string,
/// is upper-cased. Everything else is left untouched, so `left/right` gives
/// `Left/Right` and a non-ASCII letter never starts a word.
///
/// ```
/// use gesture_core::slug_to_label;
///
/// assert_eq!(slug_to_label("traffic-police-stop"), "Traffic Police Stop");
/// assert_eq!(slug_to_label("go__straight"), "Go Straight");
/// assert_eq!(slug_to_label("3-way-turn"), "3 Way Turn");
/// assert_eq!(slug_to_label("left/right-turn"), "Left/Right Turn");
/// assert_eq!(slug_to_label("--__--"), "");
/// ```
pub fn slug_to_label(slug: &str) -> String {
    let spaced: String = slug.chars().map(|c| if is_separator(c) { ' ' } else { c }).collect();

    // join over split_whitespace covers the collapse and trim steps.
    let normalized = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut label = String::with_capacity(normalized.len());
    let mut prev_is_word = false;
    for c in normalized.chars() {
        let is_word = is_word_char(c);
        if is_word && !prev_is_word {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        prev_is_word = is_word;
    }
    label
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
