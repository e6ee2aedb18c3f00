//! Escape processing for char and string literals.
//!
//! Valid escapes: `\n` `\t` `\r` `\0` `\\` `\'` `\"`.

use crate::error::LexErrorKind;

fn resolve_escape(c: char) -> Result<char, LexErrorKind> {
    match c {
        'n' => Ok('\n'),
        't' => Ok('\t'),
        'r' => Ok('\r'),
        '0' => Ok('\0'),
        '\\' | '\'' | '"' => Ok(c),
        other => Err(LexErrorKind::InvalidEscape(other)),
    }
}

/// Resolve escapes in the text between the quotes.
fn unescape(content: &str) -> Result<String, LexErrorKind> {
    if !content.contains('\\') {
        return Ok(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // The literal regexes guarantee a character follows every backslash.
            let escaped = chars.next().ok_or(LexErrorKind::InvalidEscape('\\'))?;
            result.push(resolve_escape(escaped)?);
        } else {
            result.push(c);
        }
    }
    Ok(result)
}

/// Strip one leading and one trailing quote.
fn inner(slice: &str) -> &str {
    slice
        .get(1..slice.len().saturating_sub(1))
        .unwrap_or_default()
}

pub(crate) fn string_literal(slice: &str) -> Result<String, LexErrorKind> {
    unescape(inner(slice))
}

pub(crate) fn char_literal(slice: &str) -> Result<char, LexErrorKind> {
    let text = unescape(inner(slice))?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(LexErrorKind::EmptyChar),
        (Some(_), Some(_)) => Err(LexErrorKind::MultiCharLiteral),
    }
}
