//! ANSI terminal renderer.
//!
//! Produces colored output using the `colored` crate, for previewing a file's
//! documentation from the command line.

use colored::Colorize;

use crate::types::{Document, Fragment, Section, capitalize};

/// Render a section as ANSI-colored terminal text.
pub fn section_to_terminal(section: &Section) -> String {
    let title = section.title();
    let mut lines = vec![format!("{}", title.bold().underline())];

    for fragment in &section.body {
        lines.push(render_fragment(fragment));
    }

    lines.join("\n")
}

/// Render a whole document, one heading per group.
pub fn document_to_terminal(doc: &Document) -> String {
    let mut parts = vec![format!("{}", doc.title.bold())];

    for group in &doc.groups {
        parts.push(format!("{}", group.name.cyan().bold()));
        for section in &group.sections {
            parts.push(section_to_terminal(section));
        }
    }

    parts.join("\n\n")
}

fn render_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Tagged { tag, value } => {
            let label = format!("{}", capitalize(tag).cyan());
            if value.is_empty() {
                label
            } else {
                format!("{label} {}", value.bold())
            }
        }

        Fragment::Code { pretty_text, .. } => {
            let border = "\u{2502}".dimmed(); // │
            pretty_text
                .lines()
                .map(|line| format!("  {border} {}", line.green()))
                .collect::<Vec<_>>()
                .join("\n")
        }

        Fragment::List { items } => items
            .iter()
            .map(|item| format!("  \u{2022} {item}")) // •
            .collect::<Vec<_>>()
            .join("\n"),

        Fragment::Plain { text } => text.clone(),
    }
}
