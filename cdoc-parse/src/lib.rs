//! `cdoc-parse` — parser and renderers for `#doc` comment blocks.
//!
//! A documentation block starts at a line that is exactly `#doc` and runs over
//! the following comment lines. Inside a block, the first line is the section
//! title; later lines are prose, `@tag` annotations, two-space indented code
//! (pretty-printed when it is JSON) or `-`/`*` list items.
//!
//! # Quick start
//!
//! ```
//! use cdoc_parse::{ExtractOptions, Format, Fragment};
//!
//! let source = "#doc\n# List accounts\n# @param page optional page number\ndef index; end\n";
//! let sections = cdoc_parse::parse_str(source, &ExtractOptions::default());
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].header, Fragment::plain("List accounts"));
//!
//! let md = cdoc_parse::render(&sections[0], Format::Markdown);
//! assert!(md.starts_with("### List accounts"));
//! ```

pub mod classify;
pub mod document;
pub mod error;
pub mod extract;
pub mod highlight;
pub mod layout;
pub mod render;
pub mod render_html;
pub mod render_md;
#[cfg(feature = "terminal")]
pub mod render_term;
pub mod section;
pub mod types;
pub mod validate;

pub use classify::classify;
pub use document::{DocumentBuilder, anchor, group_anchors, group_name};
pub use error::*;
pub use extract::{ExtractOptions, extract, extract_file, extract_str};
pub use highlight::{HighlightError, Highlighter, JsonHighlighter, NoHighlighter};
pub use layout::{Layout, PageParts};
pub use render::{Format, Renderer, render};
pub use section::{parse_section, parse_sections};
pub use types::*;
pub use validate::validate;

/// Extract and parse every block in `content`.
pub fn parse_str(content: &str, options: &ExtractOptions) -> Vec<Section> {
    parse_sections(&extract_str(content, options))
}
