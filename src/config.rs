use anyhow::{Context, Result};
use cdoc_parse::ExtractOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional config file in the project root.
pub const CONFIG_FILE: &str = "cdoc.json";

/// Environment variable that overrides the configured title.
pub const TITLE_ENV: &str = "CDOC_TITLE";

pub const DEFAULT_TITLE: &str = "API Documentation";

/// Top-level cdoc.json schema. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CdocConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,

    /// Also write `index.md` next to `index.html`.
    #[serde(default = "default_markdown")]
    pub markdown: bool,

    /// Custom layout template with `{{title}}`, `{{sidebar}}`, `{{content}}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,

    /// Directory copied to `<outDir>/css` instead of the built-in stylesheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<String>,
}

impl Default for CdocConfig {
    fn default() -> Self {
        Self {
            title: None,
            source_dir: default_source_dir(),
            file_suffix: default_file_suffix(),
            out_dir: default_out_dir(),
            marker: default_marker(),
            comment_prefix: default_comment_prefix(),
            markdown: default_markdown(),
            layout: None,
            styles: None,
        }
    }
}

impl CdocConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            marker: self.marker.clone(),
            comment_prefix: self.comment_prefix.clone(),
        }
    }
}

fn default_source_dir() -> String {
    "app/controllers".to_string()
}
fn default_file_suffix() -> String {
    cdoc_parse::document::DEFAULT_FILE_SUFFIX.to_string()
}
fn default_out_dir() -> String {
    "doc".to_string()
}
fn default_marker() -> String {
    "#doc".to_string()
}
fn default_comment_prefix() -> String {
    "#".to_string()
}
fn default_markdown() -> bool {
    true
}

/// Load `cdoc.json` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<CdocConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(CdocConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<CdocConfig> {
    let config: CdocConfig = serde_json::from_str(content)?;
    if config.marker.trim().is_empty() {
        anyhow::bail!("marker must not be empty");
    }
    if config.comment_prefix.is_empty() {
        anyhow::bail!("commentPrefix must not be empty");
    }
    Ok(config)
}

/// Pick the document title: CLI flag, then environment, then config, then default.
pub fn resolve_title(cli: Option<&str>, env: Option<String>, config: Option<&str>) -> String {
    cli.map(str::to_string)
        .or(env.filter(|t| !t.trim().is_empty()))
        .or_else(|| config.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, CdocConfig::default());
        assert_eq!(config.source_dir, "app/controllers");
        assert_eq!(config.file_suffix, "_controller.rb");
        assert!(config.markdown);
    }

    #[test]
    fn camel_case_fields() {
        let config = parse_config(
            r#"{"title": "Chillr API", "sourceDir": "src", "fileSuffix": ".rs", "commentPrefix": "//", "marker": "//doc", "markdown": false}"#,
        )
        .unwrap();
        assert_eq!(config.title.as_deref(), Some("Chillr API"));
        assert_eq!(config.source_dir, "src");
        assert!(!config.markdown);
        let options = config.extract_options();
        assert_eq!(options.marker, "//doc");
        assert_eq!(options.comment_prefix, "//");
    }

    #[test]
    fn empty_marker_rejected() {
        assert!(parse_config(r#"{"marker": " "}"#).is_err());
        assert!(parse_config(r#"{"commentPrefix": ""}"#).is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = std::env::temp_dir().join("cdoc-config-test-missing");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        assert_eq!(load_config(&dir).unwrap(), CdocConfig::default());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn title_precedence() {
        assert_eq!(
            resolve_title(Some("Flag"), Some("Env".into()), Some("Config")),
            "Flag"
        );
        assert_eq!(resolve_title(None, Some("Env".into()), Some("Config")), "Env");
        assert_eq!(resolve_title(None, Some("  ".into()), Some("Config")), "Config");
        assert_eq!(resolve_title(None, None, None), DEFAULT_TITLE);
    }
}
