//! Page title normalization shared by classes, concepts, pages and properties.

/// Characters that can never appear in a title.
pub const ILLEGAL_TITLE_CHARS: &[char] = &['[', ']', '{', '}', '|', '#', '<', '>'];

/// Listed illegal characters and control characters.
pub fn is_illegal_title_char(c: char) -> bool {
    ILLEGAL_TITLE_CHARS.contains(&c) || c.is_control()
}

/// Canonical form of a title: trimmed, `_` read as space, whitespace runs
/// collapsed and the first character upper-cased.
pub fn normalize_title(text: &str) -> String {
    let spaced = text.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    for word in spaced.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    upcase_first(&out)
}

/// Normalized title, or `None` when the text cannot name a page.
pub fn valid_title(text: &str) -> Option<String> {
    let title = normalize_title(text);
    if title.is_empty() || title.contains(is_illegal_title_char) {
        return None;
    }
    Some(title)
}

fn upcase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
