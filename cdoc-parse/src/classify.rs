//! Line classification for the block mini-markup.

use crate::types::LineKind;

/// Indentation that turns a line into code.
const CODE_INDENT: &str = "  ";

/// Classify one block line. Leading whitespace is significant.
///
/// Precedence: tag, code, list item, plain.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some((start, end)) = find_tag(line) {
        let remainder = format!("{}{}", &line[..start], &line[end..]);
        return LineKind::Tag {
            tag: &line[start + 1..end],
            remainder: remainder.trim().to_string(),
        };
    }

    if let Some(content) = code_content(line) {
        return LineKind::Code { content };
    }

    if let Some(content) = list_item_content(line) {
        return LineKind::ListItem { content };
    }

    LineKind::Plain { content: line }
}

/// Content of a code line with exactly two leading spaces removed.
pub fn code_content(line: &str) -> Option<&str> {
    line.strip_prefix(CODE_INDENT)
}

/// Content of a `- ` / `* ` list item, or `None`.
pub fn list_item_content(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// Byte range of the first `@word` token, including the `@`.
fn find_tag(line: &str) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'@' {
            let end = bytes[pos + 1..]
                .iter()
                .position(|b| !is_word_byte(*b))
                .map_or(bytes.len(), |n| pos + 1 + n);
            if end > pos + 1 {
                return Some((pos, end));
            }
        }
        pos += 1;
    }

    None
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
