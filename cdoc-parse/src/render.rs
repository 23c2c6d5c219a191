//! Format-polymorphic rendering entry point.

use std::sync::LazyLock;

use crate::highlight::{Highlighter, JsonHighlighter};
use crate::types::{Document, Section};
use crate::{render_html, render_md};

static DEFAULT_HIGHLIGHTER: LazyLock<JsonHighlighter> = LazyLock::new(JsonHighlighter::new);

/// Output format for [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Markdown,
    #[cfg(feature = "terminal")]
    Terminal,
}

/// Serializes sections and documents into one output format.
///
/// HTML output decorates JSON code through the configured highlighter
/// (the built-in [`JsonHighlighter`] unless replaced).
#[derive(Clone, Copy)]
pub struct Renderer<'h> {
    format: Format,
    highlighter: &'h dyn Highlighter,
}

impl Renderer<'static> {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            highlighter: &*DEFAULT_HIGHLIGHTER,
        }
    }
}

impl<'h> Renderer<'h> {
    /// Swap in a different highlighter collaborator.
    pub fn with_highlighter<'a>(self, highlighter: &'a dyn Highlighter) -> Renderer<'a> {
        Renderer {
            format: self.format,
            highlighter,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn render_section(&self, section: &Section) -> String {
        match self.format {
            Format::Html => render_html::section_to_html(section, self.highlighter),
            Format::Markdown => render_md::section_to_markdown(section),
            #[cfg(feature = "terminal")]
            Format::Terminal => crate::render_term::section_to_terminal(section),
        }
    }

    /// Render the document body. For HTML this is the content only; pair it
    /// with [`Renderer::render_sidebar`] and a layout to build a page.
    pub fn render_document(&self, doc: &Document) -> String {
        match self.format {
            Format::Html => render_html::document_content(doc, self.highlighter),
            Format::Markdown => render_md::document_to_markdown(doc),
            #[cfg(feature = "terminal")]
            Format::Terminal => crate::render_term::document_to_terminal(doc),
        }
    }

    /// Sidebar markup. Markdown and terminal output carry their own table of
    /// contents, so only HTML produces a separate sidebar.
    pub fn render_sidebar(&self, doc: &Document) -> String {
        match self.format {
            Format::Html => render_html::sidebar(doc),
            _ => String::new(),
        }
    }
}

/// Render `section` with the default highlighter.
pub fn render(section: &Section, format: Format) -> String {
    Renderer::new(format).render_section(section)
}
