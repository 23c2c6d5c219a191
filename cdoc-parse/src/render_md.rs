//! Markdown renderer.
//!
//! Emits CommonMark. Code is always a plain fenced block; highlighting is left
//! to whatever renders the Markdown downstream.

use crate::document::group_anchors;
use crate::types::{Document, Fragment, Section, capitalize};

/// Render a section as Markdown, header first.
pub fn section_to_markdown(section: &Section) -> String {
    let mut out = format!("### {}", render_header(&section.header));
    let mut previous_plain = false;

    for fragment in &section.body {
        let is_plain = matches!(fragment, Fragment::Plain { .. });
        // Consecutive prose lines stay in one paragraph.
        out.push_str(if is_plain && previous_plain { "\n" } else { "\n\n" });
        out.push_str(&render_fragment(fragment));
        previous_plain = is_plain;
    }

    out
}

/// Render the whole document: title, table of contents, then each group.
pub fn document_to_markdown(doc: &Document) -> String {
    let mut parts = vec![format!("# {}", doc.title)];

    let toc: Vec<String> = doc
        .sidebar_keys()
        .into_iter()
        .zip(group_anchors(doc))
        .map(|(key, id)| format!("- [{key}](#{id})"))
        .collect();
    if !toc.is_empty() {
        parts.push(toc.join("\n"));
    }

    for group in &doc.groups {
        parts.push(format!("## {}", group.name));
        for section in &group.sections {
            parts.push(section_to_markdown(section));
        }
    }

    let mut out = parts.join("\n\n");
    out.push('\n');
    out
}

fn render_header(header: &Fragment) -> String {
    match header {
        Fragment::Plain { text } => text.trim().to_string(),
        other => render_fragment(other),
    }
}

fn render_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Tagged { tag, value } => {
            let label = capitalize(tag);
            if value.is_empty() {
                label
            } else {
                format!("{label} **{value}**")
            }
        }

        Fragment::Code {
            is_json,
            pretty_text,
            ..
        } => {
            let lang = if *is_json { "json" } else { "" };
            format!("```{lang}\n{pretty_text}\n```")
        }

        Fragment::List { items } => items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n"),

        Fragment::Plain { text } => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Group;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_section() {
        let section = Section {
            header: Fragment::plain("Show account"),
            body: vec![
                Fragment::plain("Returns one account."),
                Fragment::plain("Requires a token."),
                Fragment::tagged("param", "id account id"),
                Fragment::tagged("deprecated", ""),
                Fragment::code("{\"id\": 1}".into()),
                Fragment::code("GET /accounts/1".into()),
                Fragment::List {
                    items: vec!["a".into(), "b".into()],
                },
            ],
        };
        let expected = "### Show account\n\n\
Returns one account.\n\
Requires a token.\n\n\
Param **id account id**\n\n\
Deprecated\n\n\
```json\n{\n  \"id\": 1\n}\n```\n\n\
```\nGET /accounts/1\n```\n\n\
- a\n- b";
        assert_eq!(section_to_markdown(&section), expected);
    }

    #[test]
    fn tagged_header() {
        let section = Section {
            header: Fragment::tagged("route", "GET /accounts"),
            body: vec![],
        };
        assert_eq!(section_to_markdown(&section), "### Route **GET /accounts**");
    }

    #[test]
    fn document_with_toc() {
        let doc = Document {
            title: "API Documentation".into(),
            groups: vec![
                Group {
                    name: "Accounts".into(),
                    sections: vec![Section {
                        header: Fragment::plain("List accounts"),
                        body: vec![],
                    }],
                },
                Group {
                    name: "Users".into(),
                    sections: vec![],
                },
            ],
        };
        let expected = "# API Documentation\n\n\
- [Accounts](#accounts)\n- [Users](#users)\n\n\
## Accounts\n\n\
### List accounts\n\n\
## Users\n";
        assert_eq!(document_to_markdown(&doc), expected);
    }
}
