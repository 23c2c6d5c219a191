//! Page assembly: substitutes title, sidebar and content into a layout.
//!
//! Layouts are plain HTML files with `{{title}}`, `{{sidebar}}` and
//! `{{content}}` placeholders. Substitution is a single left-to-right pass, so
//! placeholder-looking text inside the content is never expanded.

use std::path::Path;

use crate::error::Error;
use crate::render_html::escape_html;

/// The three values a layout receives.
#[derive(Debug, Clone, Copy)]
pub struct PageParts<'a> {
    /// Plain text; escaped on substitution.
    pub title: &'a str,
    /// Pre-rendered HTML.
    pub sidebar: &'a str,
    /// Pre-rendered HTML.
    pub content: &'a str,
}

/// An HTML page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    template: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT)
    }
}

impl Layout {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let template = std::fs::read_to_string(path).map_err(|source| Error::Layout {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(template))
    }

    /// Fill the template. Unknown `{{…}}` placeholders are left as they are.
    pub fn assemble(&self, parts: &PageParts<'_>) -> String {
        let title = escape_html(parts.title);
        let mut out = String::with_capacity(self.template.len() + parts.content.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];

            let Some(close) = after.find("}}") else {
                out.push_str(&rest[open..]);
                return out;
            };

            match after[..close].trim() {
                "title" => out.push_str(&title),
                "sidebar" => out.push_str(parts.sidebar),
                "content" => out.push_str(parts.content),
                _ => out.push_str(&rest[open..open + 2 + close + 2]),
            }
            rest = &after[close + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Built-in page layout.
pub const DEFAULT_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="generator" content="cdoc">
    <title>{{title}}</title>
    <link rel="stylesheet" href="css/cdoc.css">
</head>
<body>
<div class="cdoc-page">
<aside>
{{sidebar}}
</aside>
<main class="cdoc">
<h1>{{title}}</h1>
{{content}}
</main>
</div>
</body>
</html>
"#;

/// Stylesheet written to `css/cdoc.css` when no styles directory is configured.
pub const DEFAULT_CSS: &str = r#":root {
    --bg: #0a0a0f;
    --bg-card: #12121a;
    --border: #2a2a3a;
    --border-subtle: #1e1e2e;
    --text: #e8e8f0;
    --text-dim: #8888a0;
    --text-muted: #5a5a72;
    --accent: #3b82f6;
}

*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { background: var(--bg); color: var(--text); font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; line-height: 1.7; }

/* Layout */
.cdoc-page { display: grid; grid-template-columns: 16rem 1fr; min-height: 100vh; }
.cdoc-page aside { position: sticky; top: 0; height: 100vh; overflow-y: auto; padding: 2rem 1rem; border-right: 1px solid var(--border-subtle); background: var(--bg-card); }
.cdoc { max-width: 52rem; padding: 2rem 2.5rem 4rem; }
@media (max-width: 720px) {
    .cdoc-page { grid-template-columns: 1fr; }
    .cdoc-page aside { position: static; height: auto; border-right: none; border-bottom: 1px solid var(--border-subtle); }
}

/* Sidebar */
.cdoc-sidebar ul { list-style: none; }
.cdoc-sidebar li { margin: 0.125rem 0; }
.cdoc-sidebar a { display: block; padding: 0.25rem 0.5rem; border-radius: 6px; color: var(--text-dim); text-decoration: none; font-size: 0.9rem; }
.cdoc-sidebar a:hover { color: var(--text); background: rgba(255,255,255,0.04); }

/* Typography */
.cdoc h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; letter-spacing: -0.025em; }
.cdoc h2 { font-size: 1.5rem; font-weight: 600; margin: 2.5rem 0 1rem; padding-bottom: 0.5rem; border-bottom: 1px solid var(--border-subtle); }
.cdoc a { color: var(--accent); text-decoration: none; }
.cdoc code { font-family: "SF Mono", "Fira Code", monospace; font-size: 0.85em; background: rgba(255,255,255,0.06); padding: 0.15em 0.4em; border-radius: 4px; }

/* Sections */
.cdoc-section { margin: 1.25rem 0; padding: 1rem 1.25rem; background: var(--bg-card); border: 1px solid var(--border-subtle); border-radius: 8px; }
.cdoc-section-title { font-size: 1.1rem; font-weight: 600; margin-bottom: 0.5rem; }
.cdoc-tag { margin: 0.5rem 0; }
.cdoc-tag-label { display: inline-block; min-width: 6rem; color: var(--text-muted); font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.04em; }
.cdoc-list { margin: 0.5rem 0; padding-left: 1.5rem; }

/* Code */
.cdoc-code { background: #0d1117; border: 1px solid var(--border-subtle); border-radius: 8px; padding: 1rem; overflow-x: auto; margin: 0.75rem 0; font-size: 0.8rem; line-height: 1.6; }
.cdoc-code code { background: transparent; padding: 0; }
.cdoc-code a-p, .cdoc-code a-pr { color: #79c0ff; }
.cdoc-code a-s { color: #a5d6ff; }
.cdoc-code a-n { color: #f2cc60; }
.cdoc-code a-k, .cdoc-code a-co, .cdoc-code a-cb { color: #ff7b72; }
.cdoc-code a-pu, .cdoc-code a-pb { color: var(--text-muted); }
"#;
