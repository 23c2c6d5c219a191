//! `cdoc build` — extract `#doc` blocks from the source tree and write the
//! HTML page, the Markdown page and the stylesheet directory.

use anyhow::{Context, Result};
use cdoc_parse::{
    Diagnostic, Document, DocumentBuilder, Format, Layout, PageParts, Renderer, Severity,
};
use colored::Colorize;
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

use crate::config::{self, CdocConfig};
use crate::discover::{self, SourceFile};

/// Options passed from the CLI to the build pipeline.
#[derive(Debug, Clone, Default)]
pub struct BuildOpts {
    pub root: PathBuf,
    pub source: Option<String>,
    pub out: Option<String>,
    pub title: Option<String>,
    pub no_markdown: bool,
    pub verbose: bool,
    pub quiet: bool,
}

/// Summary of one build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub files: usize,
    pub groups: usize,
    pub sections: usize,
    pub skipped: Vec<String>,
    pub written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    pub fn print_summary(&self, verbose: bool) {
        for path in &self.written {
            println!("  {} {}", "wrote".dimmed(), path.display());
        }

        for diag in &self.diagnostics {
            let label = match diag.severity {
                Severity::Error => format!("{}", "error".red().bold()),
                Severity::Warning => format!("{}", "warning".yellow().bold()),
                Severity::Info if verbose => format!("{}", "info".cyan().bold()),
                Severity::Info => continue,
            };
            let location = diag.location.as_deref().unwrap_or("-");
            eprintln!("{location}: {label}: {}", diag.message);
        }

        println!(
            "{} {} sections in {} groups from {} files",
            "Built".green().bold(),
            self.sections,
            self.groups,
            self.files,
        );
        if !self.skipped.is_empty() {
            println!("{} {} unreadable", "Skipped".yellow(), self.skipped.len());
        }
    }
}

/// Run the full pipeline: discover, extract, parse, render, write.
pub fn run_build(opts: &BuildOpts) -> Result<BuildReport> {
    let config = config::load_config(&opts.root)?;
    let source_dir = discover::resolve(
        &opts.root,
        opts.source.as_deref().unwrap_or(&config.source_dir),
    );
    let out_dir = discover::resolve(&opts.root, opts.out.as_deref().unwrap_or(&config.out_dir));
    let title = config::resolve_title(
        opts.title.as_deref(),
        std::env::var(config::TITLE_ENV).ok(),
        config.title.as_deref(),
    );

    let files = discover::discover(&source_dir, &config.file_suffix)?;
    let mut report = BuildReport {
        files: files.len(),
        ..Default::default()
    };

    let doc = collect_document(&files, &config, title, opts, &mut report);
    report.groups = doc.groups.len();
    report.sections = doc.section_count();
    report.diagnostics = cdoc_parse::validate(&doc);

    let layout = match &config.layout {
        Some(path) => Layout::from_file(&discover::resolve(&opts.root, path))?,
        None => Layout::default(),
    };
    let styles = config
        .styles
        .as_deref()
        .map(|dir| discover::resolve(&opts.root, dir));

    report.written = write_output(
        &doc,
        &layout,
        &out_dir,
        config.markdown && !opts.no_markdown,
        styles.as_deref(),
    )?;

    Ok(report)
}

/// Extract and parse every file; unreadable files are reported and skipped.
fn collect_document(
    files: &[SourceFile],
    config: &CdocConfig,
    title: String,
    opts: &BuildOpts,
    report: &mut BuildReport,
) -> Document {
    let options = config.extract_options();
    let mut builder = DocumentBuilder::new(title);

    for file in files {
        match cdoc_parse::extract_file(&file.path, &options) {
            Ok(blocks) => {
                let sections = cdoc_parse::parse_sections(&blocks);
                if opts.verbose && !opts.quiet {
                    println!(
                        "  {} {} ({} blocks → {})",
                        "read".dimmed(),
                        file.path.display(),
                        sections.len(),
                        file.group
                    );
                }
                builder.add_sections(&file.group, sections);
            }
            Err(e) => {
                if !opts.quiet {
                    eprintln!("{} {}. Skip", "warning:".yellow().bold(), e);
                }
                report.skipped.push(file.path.display().to_string());
            }
        }
    }

    builder.build()
}

/// Write `index.html`, optionally `index.md`, and the `css` directory.
///
/// The styles directory is only created when it does not exist yet, so local
/// edits to the stylesheet survive rebuilds. Any failure here is fatal.
pub fn write_output(
    doc: &Document,
    layout: &Layout,
    out_dir: &Path,
    markdown: bool,
    styles: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    discover::ensure_dir(out_dir)?;
    let mut written = Vec::new();

    let renderer = Renderer::new(Format::Html);
    let content = renderer.render_document(doc);
    let sidebar = renderer.render_sidebar(doc);
    let html = layout.assemble(&PageParts {
        title: &doc.title,
        sidebar: &sidebar,
        content: &content,
    });
    written.push(write_file(&out_dir.join("index.html"), &html)?);

    if markdown {
        let md = Renderer::new(Format::Markdown).render_document(doc);
        written.push(write_file(&out_dir.join("index.md"), &md)?);
    }

    let css_dir = out_dir.join("css");
    if !css_dir.exists() {
        match styles {
            Some(src) => copy_dir(src, &css_dir)?,
            None => {
                discover::ensure_dir(&css_dir)?;
                write_file(&css_dir.join("cdoc.css"), cdoc_parse::layout::DEFAULT_CSS)?;
            }
        }
        written.push(css_dir);
    }

    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf> {
    std::fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path.to_path_buf())
}

/// Copy `src` into `dest` verbatim, recursively.
fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_dir() {
        anyhow::bail!("Styles directory '{}' does not exist", src.display());
    }

    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk '{}'", src.display()))?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            discover::ensure_dir(&target)?;
        } else {
            std::fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy '{}' to '{}'",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Watch the source directory and rebuild on each change.
///
/// Debounces rapid events (e.g. editors that write in stages) with a 200ms window.
/// Ctrl+C exits cleanly.
pub fn watch_and_rebuild(opts: &BuildOpts) -> Result<()> {
    let config = config::load_config(&opts.root)?;
    let source_dir = discover::resolve(
        &opts.root,
        opts.source.as_deref().unwrap_or(&config.source_dir),
    );
    let suffix = config.file_suffix.clone();

    println!(
        "{} {} for changes (Ctrl+C to stop)",
        "Watching".cyan().bold(),
        source_dir.display()
    );

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&source_dir, RecursiveMode::Recursive)?;

    let mut last_rebuild = Instant::now();
    let debounce = Duration::from_millis(200);

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                let relevant_kind = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );
                let affects_sources = event.paths.iter().any(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|name| name.ends_with(&suffix))
                });

                if relevant_kind && affects_sources && last_rebuild.elapsed() > debounce {
                    // Small delay to let the editor finish writing
                    std::thread::sleep(Duration::from_millis(50));

                    match run_build(opts) {
                        Ok(report) => {
                            if !opts.quiet {
                                report.print_summary(opts.verbose);
                            }
                            last_rebuild = Instant::now();
                        }
                        Err(e) => {
                            eprintln!("{} {:#}", "Build error:".red().bold(), e);
                        }
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}
