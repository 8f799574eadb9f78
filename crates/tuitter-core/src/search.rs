//! Text matching helpers shared by providers.
//!
//! All matching is case-insensitive over Unicode lowercase.

/// Lowercased search needle. `None` only for the empty query.
///
/// Whitespace is part of the needle: `"rust "` does not match `"#rust"`.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.is_empty() { None } else { Some(query.to_lowercase()) }
}

/// `haystack` contains an already-lowercased `needle`, ignoring case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Hashtags in `body`, lowercased, without the `#`, in order of first
/// appearance.
///
/// A tag is a `#` at the start of a word followed by alphanumerics or `_`.
/// Trailing punctuation ends the tag (`#rust!` yields `rust`).
pub fn hashtags(body: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for word in body.split_whitespace() {
        let Some(rest) = word.strip_prefix('#') else {
            continue;
        };

        let tag: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .flat_map(char::to_lowercase)
            .collect();

        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    tags
}
