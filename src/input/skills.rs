//! Parsing of the dataset's skill-list fields
//!
//! The dataset serializes skill lists inconsistently: some rows carry a
//! list-like literal (`"['nursing', 'registration']"`), others a plain
//! comma-separated string (`"nursing, registration"`). Parsing is two-tier:
//! the literal form is attempted first, and any malformation falls back to
//! comma splitting. This function never fails.

/// Parse a raw skill-list field into individual skill strings.
///
/// Empty and whitespace-only items are dropped, so a degenerate field
/// yields an empty vector rather than an error.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    let items = match parse_list_literal(raw) {
        Some(items) => items,
        None => raw.split(',').map(|s| s.to_string()).collect(),
    };

    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Attempt to parse a bracketed list literal with quoted items.
///
/// Accepts single or double quotes and arbitrary whitespace between items.
/// Returns `None` on any deviation from that shape so the caller can fall
/// back to comma splitting of the raw string.
fn parse_list_literal(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        // Skip whitespace between items
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let quote = match chars.next() {
            Some(c @ ('\'' | '"')) => c,
            Some(_) => return None,
            None => break,
        };

        let mut item = String::new();
        loop {
            match chars.next() {
                Some(c) if c == quote => break,
                Some('\\') => item.push(chars.next()?),
                Some(c) => item.push(c),
                None => return None, // unterminated quote
            }
        }
        items.push(item);

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        match chars.next() {
            Some(',') => continue,
            Some(_) => return None,
            None => break,
        }
    }

    Some(items)
}
