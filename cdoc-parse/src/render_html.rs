//! HTML fragment renderer.
//!
//! Produces semantic HTML with `cdoc-*` CSS classes. Prose goes through
//! `pulldown-cmark` for inline emphasis, code spans and links; everything else
//! is HTML-escaped.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::document::group_anchors;
use crate::highlight::Highlighter;
use crate::types::{Document, Fragment, Section, capitalize};

/// Escape HTML special characters.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render one line of prose, keeping only inline markup.
///
/// Block-level constructs (headings, list markers, quotes) are flattened to
/// their text; raw HTML is escaped.
fn render_inline(text: &str) -> String {
    let events = Parser::new(text).filter_map(|event| match event {
        Event::Start(Tag::Emphasis | Tag::Strong | Tag::Link { .. })
        | Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link)
        | Event::Text(_)
        | Event::Code(_) => Some(event),
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        Event::SoftBreak | Event::HardBreak => Some(Event::Text(" ".into())),
        _ => None,
    });
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, events);
    html
}

/// Render a section as an HTML fragment.
pub fn section_to_html(section: &Section, highlighter: &dyn Highlighter) -> String {
    let mut parts = vec![
        "<div class=\"cdoc-section\">".to_string(),
        format!(
            "<h3 class=\"cdoc-section-title\">{}</h3>",
            render_header(&section.header, highlighter)
        ),
    ];

    for fragment in &section.body {
        parts.push(render_fragment(fragment, highlighter));
    }

    parts.push("</div>".to_string());
    parts.join("\n")
}

/// Render every group of `doc` as `<section>` elements with anchors.
pub fn document_content(doc: &Document, highlighter: &dyn Highlighter) -> String {
    let mut parts = Vec::new();

    for (group, id) in doc.groups.iter().zip(group_anchors(doc)) {
        parts.push(format!("<section class=\"cdoc-group\" id=\"{id}\">"));
        parts.push(format!("<h2>{}</h2>", escape_html(&group.name)));
        for section in &group.sections {
            parts.push(section_to_html(section, highlighter));
        }
        parts.push("</section>".to_string());
    }

    parts.join("\n")
}

/// Render the navigation sidebar: one link per group, in document order.
pub fn sidebar(doc: &Document) -> String {
    let mut html = String::from("<nav class=\"cdoc-sidebar\" aria-label=\"Contents\">\n<ul>\n");
    for (key, id) in doc.sidebar_keys().into_iter().zip(group_anchors(doc)) {
        html.push_str(&format!(
            "<li><a href=\"#{id}\">{}</a></li>\n",
            escape_html(key)
        ));
    }
    html.push_str("</ul>\n</nav>");
    html
}

fn render_header(header: &Fragment, highlighter: &dyn Highlighter) -> String {
    match header {
        Fragment::Plain { text } => render_inline(text.trim()),
        Fragment::Tagged { tag, value } => tag_label(tag, value),
        other => render_fragment(other, highlighter),
    }
}

fn render_fragment(fragment: &Fragment, highlighter: &dyn Highlighter) -> String {
    match fragment {
        Fragment::Tagged { tag, value } => {
            format!("<p class=\"cdoc-tag\">{}</p>", tag_label(tag, value))
        }

        Fragment::Code {
            is_json,
            pretty_text,
            ..
        } => {
            if *is_json {
                if let Ok(highlighted) = highlighter.highlight(pretty_text, "json") {
                    return format!(
                        "<pre class=\"cdoc-code\" data-lang=\"json\"><code class=\"language-json\">{highlighted}</code></pre>"
                    );
                }
            }
            format!(
                "<pre class=\"cdoc-code\"><code>{}</code></pre>",
                escape_html(pretty_text)
            )
        }

        Fragment::List { items } => {
            let mut html = String::from("<ul class=\"cdoc-list\">\n");
            for item in items {
                html.push_str(&format!("<li>{}</li>\n", render_inline(item)));
            }
            html.push_str("</ul>");
            html
        }

        Fragment::Plain { text } => format!("{}<br>", render_inline(text)),
    }
}

fn tag_label(tag: &str, value: &str) -> String {
    let label = format!(
        "<span class=\"cdoc-tag-label\">{}</span>",
        escape_html(&capitalize(tag))
    );
    if value.is_empty() {
        label
    } else {
        format!("{label} <strong>{}</strong>", escape_html(value))
    }
}
