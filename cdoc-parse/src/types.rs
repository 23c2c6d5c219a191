use serde::{Deserialize, Serialize};

/// The comment lines of one `#doc` block, with the comment prefix removed.
///
/// Leading indentation past the conventional single space is kept, since the
/// classifier needs it to spot code lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    lines: Vec<String>,
}

impl RawBlock {
    /// Returns `None` for an empty line list; raw blocks are never empty.
    pub fn new(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Classification of a single block line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Line carrying an `@tag` token. `tag` excludes the `@`.
    Tag { tag: &'a str, remainder: String },
    /// Line indented by at least two spaces; `content` has two spaces removed.
    Code { content: &'a str },
    /// Line starting with `- ` or `* ` after trimming.
    ListItem { content: &'a str },
    Plain { content: &'a str },
}

/// One typed, renderable unit of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Fragment {
    Tagged {
        tag: String,
        value: String,
    },
    Code {
        raw_text: String,
        is_json: bool,
        /// Canonical pretty JSON when `is_json`, otherwise a copy of `raw_text`.
        pretty_text: String,
    },
    List {
        items: Vec<String>,
    },
    Plain {
        text: String,
    },
}

impl Fragment {
    /// Build a code fragment, pretty-printing the text when it is valid JSON.
    pub fn code(raw_text: String) -> Self {
        match serde_json::from_str::<serde_json::Value>(&raw_text) {
            Ok(value) => {
                let pretty_text =
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw_text.clone());
                Fragment::Code {
                    raw_text,
                    is_json: true,
                    pretty_text,
                }
            }
            Err(_) => Fragment::Code {
                pretty_text: raw_text.clone(),
                raw_text,
                is_json: false,
            },
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Fragment::Plain { text: text.into() }
    }

    pub fn tagged(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Fragment::Tagged {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A parsed documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// First line of the block, either `Tagged` or `Plain`.
    pub header: Fragment,
    pub body: Vec<Fragment>,
}

impl Section {
    /// Plain-text title of the section, used by the terminal and sidebar views.
    pub fn title(&self) -> String {
        match &self.header {
            Fragment::Plain { text } => text.trim().to_string(),
            Fragment::Tagged { tag, value } if value.is_empty() => capitalize(tag),
            Fragment::Tagged { tag, value } => format!("{} {}", capitalize(tag), value),
            Fragment::Code { raw_text, .. } => raw_text.clone(),
            Fragment::List { items } => items.join(", "),
        }
    }
}

/// A named cluster of sections, derived from file naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub sections: Vec<Section>,
}

/// The full documentation set for one run.
///
/// Groups keep their first-encountered order; names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub groups: Vec<Group>,
}

impl Document {
    /// Group names in order, used to build the sidebar.
    pub fn sidebar_keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn section_count(&self) -> usize {
        self.groups.iter().map(|g| g.sections.len()).sum()
    }
}

/// Upper-case the first character and lower-case the rest (`param` → `Param`).
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_block_rejects_empty() {
        assert!(RawBlock::new(Vec::new()).is_none());
        let block = RawBlock::new(vec!["Title".into()]).unwrap();
        assert_eq!(block.lines(), ["Title".to_string()]);
    }

    #[test]
    fn code_fragment_pretty_prints_json() {
        match Fragment::code("{\"b\": 1, \"a\": [true, null]}".into()) {
            Fragment::Code {
                is_json,
                pretty_text,
                ..
            } => {
                assert!(is_json);
                assert_eq!(
                    pretty_text,
                    "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}"
                );
            }
            other => panic!("Expected Code fragment, got {other:?}"),
        }
    }

    #[test]
    fn code_fragment_keeps_large_numbers_exact() {
        let fragment = Fragment::code(
            "{\"account_number\": 123456789012345678901234, \"rate\": 0.10}".into(),
        );
        match fragment {
            Fragment::Code { pretty_text, .. } => assert_eq!(
                pretty_text,
                "{\n  \"account_number\": 123456789012345678901234,\n  \"rate\": 0.10\n}"
            ),
            other => panic!("Expected Code fragment, got {other:?}"),
        }
    }

    #[test]
    fn code_fragment_falls_back_for_non_json() {
        let fragment = Fragment::code("curl -X GET /accounts".into());
        assert_eq!(
            fragment,
            Fragment::Code {
                raw_text: "curl -X GET /accounts".into(),
                is_json: false,
                pretty_text: "curl -X GET /accounts".into(),
            }
        );
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("param"), "Param");
        assert_eq!(capitalize("RETURNS"), "Returns");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn section_title_from_tagged_header() {
        let section = Section {
            header: Fragment::tagged("route", "GET /accounts"),
            body: vec![],
        };
        assert_eq!(section.title(), "Route GET /accounts");
    }
}
