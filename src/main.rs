use anyhow::Result;
use cdoc_parse::{Format, Renderer, Severity};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

mod build;
mod config;
mod discover;
mod init;

#[derive(Parser)]
#[command(name = "cdoc", version, about = "Generate API documentation from #doc comment blocks")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    Terminal,
    Markdown,
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build doc/index.html (and doc/index.md) from the source tree
    Build {
        /// Project root containing cdoc.json (default: current directory)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Directory to scan, overriding `sourceDir`
        #[arg(long)]
        source: Option<String>,

        /// Output directory, overriding `outDir`
        #[arg(long)]
        out: Option<String>,

        /// Document title (falls back to $CDOC_TITLE, then `title`)
        #[arg(long)]
        title: Option<String>,

        /// Skip writing index.md
        #[arg(long)]
        no_markdown: bool,

        /// Rebuild whenever a source file changes
        #[arg(long)]
        watch: bool,

        /// List every processed file and informational diagnostics
        #[arg(long)]
        verbose: bool,
    },

    /// Render the documentation blocks of a single file to stdout
    Render {
        /// Path to the source file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "terminal")]
        format: RenderFormat,
    },

    /// Check documentation blocks in source file(s)
    Validate {
        /// Path to the source file(s)
        files: Vec<String>,
    },

    /// Write a default cdoc.json
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<String>,

        /// Title to store in the config
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            root,
            source,
            out,
            title,
            no_markdown,
            watch,
            verbose,
        } => {
            let opts = build::BuildOpts {
                root,
                source,
                out,
                title,
                no_markdown,
                verbose,
                quiet: cli.quiet,
            };
            let report = build::run_build(&opts)?;
            if !cli.quiet {
                report.print_summary(verbose);
            }
            if watch {
                build::watch_and_rebuild(&opts)?;
            }
        }
        Commands::Render { file, format } => {
            handle_render(&file, format)?;
        }
        Commands::Validate { files } => {
            handle_validate(&files)?;
        }
        Commands::Init { path, title } => {
            init::init_config(path.as_deref(), title.as_deref(), cli.quiet)?;
        }
    }

    Ok(())
}

fn handle_render(file: &str, format: RenderFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let config = config::load_config(Path::new("."))?;
    let sections = cdoc_parse::parse_str(&content, &config.extract_options());

    let output = match format {
        RenderFormat::Json => serde_json::to_string_pretty(&sections)?,
        RenderFormat::Terminal => render_all(&sections, Format::Terminal),
        RenderFormat::Markdown => render_all(&sections, Format::Markdown),
        RenderFormat::Html => render_all(&sections, Format::Html),
    };

    println!("{output}");
    Ok(())
}

fn render_all(sections: &[cdoc_parse::Section], format: Format) -> String {
    let renderer = Renderer::new(format);
    sections
        .iter()
        .map(|section| renderer.render_section(section))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn handle_validate(files: &[String]) -> Result<()> {
    let config = config::load_config(Path::new("."))?;
    let options = config.extract_options();
    let mut has_errors = false;

    for file in files {
        let diagnostics = match cdoc_parse::extract_file(Path::new(file), &options) {
            Ok(blocks) => {
                let sections = cdoc_parse::parse_sections(&blocks);
                cdoc_parse::validate::validate_sections(&sections, file)
            }
            Err(e) => vec![cdoc_parse::Diagnostic {
                severity: Severity::Error,
                message: e.to_string(),
                location: Some(file.clone()),
                code: Some("E001".into()),
            }],
        };

        if diagnostics.is_empty() {
            println!("{}: {}", file, "OK".green());
            continue;
        }

        for diag in &diagnostics {
            let severity_str = match diag.severity {
                Severity::Error => {
                    has_errors = true;
                    format!("{}", "error".red().bold())
                }
                Severity::Warning => format!("{}", "warning".yellow().bold()),
                Severity::Info => format!("{}", "info".cyan().bold()),
            };

            let code_str = match &diag.code {
                Some(c) => format!("[{}] ", c),
                None => String::new(),
            };

            println!("{file}: {severity_str}: {code_str}{}", diag.message);
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
