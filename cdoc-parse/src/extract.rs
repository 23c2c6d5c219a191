//! Documentation block extraction.
//!
//! A block opens at a line whose trimmed content is exactly the marker
//! (`#doc`) and continues over the following comment lines. Blank lines are
//! skipped; the first non-comment line closes the block.

use std::path::Path;

use crate::error::Error;
use crate::types::RawBlock;

/// Marker and comment conventions for a source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub marker: String,
    pub comment_prefix: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: "#doc".to_string(),
            comment_prefix: "#".to_string(),
        }
    }
}

/// Extract all documentation blocks from `lines`, in source order.
pub fn extract<S: AsRef<str>>(lines: &[S], options: &ExtractOptions) -> Vec<RawBlock> {
    let mut blocks = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut recording = false;

    for line in lines {
        let line = line.as_ref();

        if recording {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(comment) = trimmed.strip_prefix(options.comment_prefix.as_str()) {
                pending.push(strip_separator(comment).to_string());
                continue;
            }

            // A non-comment line closes the block; it is re-checked below.
            flush(&mut blocks, &mut pending);
            recording = false;
        }

        if line.trim() == options.marker {
            recording = true;
        }
    }

    if recording {
        flush(&mut blocks, &mut pending);
    }

    blocks
}

/// Extract blocks from a string, normalising CRLF line endings.
pub fn extract_str(content: &str, options: &ExtractOptions) -> Vec<RawBlock> {
    let lines: Vec<&str> = content.lines().collect();
    extract(&lines, options)
}

/// Read `path` and extract its blocks.
///
/// A read failure is returned as [`Error::FileRead`]; callers are expected to
/// report it and carry on with the remaining files.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Vec<RawBlock>, Error> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_str(&content, options))
}

fn flush(blocks: &mut Vec<RawBlock>, pending: &mut Vec<String>) {
    if let Some(block) = RawBlock::new(std::mem::take(pending)) {
        blocks.push(block);
    }
}

/// Drop the single space that conventionally follows the comment prefix.
fn strip_separator(comment: &str) -> &str {
    comment.strip_prefix(' ').unwrap_or(comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks_of(input: &str) -> Vec<Vec<String>> {
        extract_str(input, &ExtractOptions::default())
            .into_iter()
            .map(RawBlock::into_lines)
            .collect()
    }

    #[test]
    fn single_block_before_code() {
        let blocks = blocks_of("#doc\n# Title\n# @param x\ncode_here()\n");
        assert_eq!(blocks, vec![vec!["Title".to_string(), "@param x".to_string()]]);
    }

    #[test]
    fn no_marker_no_blocks() {
        assert!(blocks_of("# just a comment\ndef index; end\n").is_empty());
    }

    #[test]
    fn marker_without_comments_yields_nothing() {
        assert!(blocks_of("#doc\ndef index\nend\n").is_empty());
    }

    #[test]
    fn marker_must_match_exactly() {
        assert!(blocks_of("# doc\n# Title\n").is_empty());
        assert!(blocks_of("#DOC\n# Title\n").is_empty());
        assert!(blocks_of("#doc please\n# Title\n").is_empty());
    }

    #[test]
    fn indented_marker_is_accepted() {
        let blocks = blocks_of("class A\n  #doc\n  # Index\n  def index; end\nend\n");
        assert_eq!(blocks, vec![vec!["Index".to_string()]]);
    }

    #[test]
    fn blank_lines_do_not_end_block() {
        let blocks = blocks_of("#doc\n# Title\n\n   \n# More\nend\n");
        assert_eq!(blocks, vec![vec!["Title".to_string(), "More".to_string()]]);
    }

    #[test]
    fn multiple_blocks_in_order() {
        let input = "#doc\n# First\ndef a; end\n\n#doc\n# Second\n# line\ndef b; end\n";
        let blocks = blocks_of(input);
        assert_eq!(
            blocks,
            vec![
                vec!["First".to_string()],
                vec!["Second".to_string(), "line".to_string()],
            ]
        );
    }

    #[test]
    fn block_at_end_of_file_is_flushed() {
        let blocks = blocks_of("#doc\n# Trailing");
        assert_eq!(blocks, vec![vec!["Trailing".to_string()]]);
    }

    #[test]
    fn code_indentation_is_preserved() {
        let blocks = blocks_of("#doc\n# Title\n#   {\"a\": 1}\n#     nested\nx\n");
        assert_eq!(
            blocks,
            vec![vec![
                "Title".to_string(),
                "  {\"a\": 1}".to_string(),
                "    nested".to_string(),
            ]]
        );
    }

    #[test]
    fn marker_inside_open_block_is_content() {
        let blocks = blocks_of("#doc\n# Title\n#doc\n# Body\nx\n");
        assert_eq!(
            blocks,
            vec![vec!["Title".to_string(), "doc".to_string(), "Body".to_string()]]
        );
    }

    #[test]
    fn crlf_line_endings() {
        let blocks = blocks_of("#doc\r\n# Title\r\n# Body\r\nx\r\n");
        assert_eq!(blocks, vec![vec!["Title".to_string(), "Body".to_string()]]);
    }

    #[test]
    fn custom_marker_and_prefix() {
        let options = ExtractOptions {
            marker: "//doc".into(),
            comment_prefix: "//".into(),
        };
        let blocks = extract_str("//doc\n// Title\n//   code\nfn main() {}\n", &options);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines(), ["Title".to_string(), "  code".to_string()]);
    }

    #[test]
    fn closing_line_may_reopen_with_distinct_marker() {
        // With a marker that is not itself a comment, the closing line is re-checked.
        let options = ExtractOptions {
            marker: "=begin doc".into(),
            comment_prefix: "#".into(),
        };
        let blocks = extract_str("=begin doc\n# One\n=begin doc\n# Two\n", &options);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].lines(), ["Two".to_string()]);
    }

    #[test]
    fn unreadable_file_is_reported() {
        let path = Path::new("/definitely/not/here/accounts_controller.rb");
        match extract_file(path, &ExtractOptions::default()) {
            Err(Error::FileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected FileRead error, got {other:?}"),
        }
    }
}
