//! Documentation checks.
//!
//! Returns a list of `Diagnostic` items (non-fatal). Nothing here changes
//! how a document renders.

use crate::error::{Diagnostic, Severity};
use crate::types::{Document, Fragment, Section};

/// Validate a built document.
pub fn validate(doc: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for group in &doc.groups {
        if group.sections.is_empty() {
            diagnostics.push(Diagnostic {
                severity: Severity::Warning,
                message: format!("Group '{}' has no documentation blocks", group.name),
                location: Some(group.name.clone()),
                code: Some("V001".into()),
            });
        }

        for section in &group.sections {
            validate_section(section, &group.name, &mut diagnostics);
        }
    }

    diagnostics
}

/// Validate the sections parsed from a single file.
pub fn validate_sections(sections: &[Section], location: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for section in sections {
        validate_section(section, location, &mut diagnostics);
    }
    diagnostics
}

fn validate_section(section: &Section, location: &str, diagnostics: &mut Vec<Diagnostic>) {
    if let Fragment::Tagged { tag, .. } = &section.header {
        diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message: format!(
                "Block starts with tag '@{tag}'; the first line is used as the section title"
            ),
            location: Some(location.to_string()),
            code: Some("V002".into()),
        });
    }

    for fragment in &section.body {
        if let Fragment::Code {
            raw_text,
            is_json: false,
            ..
        } = fragment
        {
            if let Some(message) = json_lookalike_error(raw_text) {
                diagnostics.push(Diagnostic {
                    severity: Severity::Info,
                    message: format!(
                        "Code block in '{}' looks like JSON but does not parse: {message}",
                        section.title()
                    ),
                    location: Some(location.to_string()),
                    code: Some("V003".into()),
                });
            }
        }
    }
}

/// Parser message for text that opens like JSON but is not valid JSON.
fn json_lookalike_error(text: &str) -> Option<String> {
    let trimmed = text.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }
    serde_json::from_str::<serde_json::Value>(text)
        .err()
        .map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Group;

    fn doc(groups: Vec<Group>) -> Document {
        Document {
            title: "API".into(),
            groups,
        }
    }

    #[test]
    fn clean_document() {
        let d = doc(vec![Group {
            name: "Accounts".into(),
            sections: vec![Section {
                header: Fragment::plain("List accounts"),
                body: vec![Fragment::code("{\"ok\": true}".into())],
            }],
        }]);
        assert!(validate(&d).is_empty());
    }

    #[test]
    fn empty_group_warns() {
        let d = doc(vec![Group {
            name: "Health".into(),
            sections: vec![],
        }]);
        let diags = validate(&d);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].code.as_deref(), Some("V001"));
    }

    #[test]
    fn tagged_header_warns() {
        let sections = vec![Section {
            header: Fragment::tagged("param", "id"),
            body: vec![],
        }];
        let diags = validate_sections(&sections, "accounts_controller.rb");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code.as_deref(), Some("V002"));
        assert_eq!(diags[0].location.as_deref(), Some("accounts_controller.rb"));
    }

    #[test]
    fn broken_json_is_info() {
        let sections = vec![Section {
            header: Fragment::plain("Create"),
            body: vec![
                Fragment::code("{\"id\": 1,}".into()),
                Fragment::code("curl -X POST".into()),
            ],
        }];
        let diags = validate_sections(&sections, "Accounts");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Info);
        assert!(diags[0].message.contains("'Create'"));
    }
}
