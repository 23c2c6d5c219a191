use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use crate::config::{CONFIG_FILE, CdocConfig};

/// Write a default `cdoc.json` into `path` (or the current directory).
///
/// Refuses to overwrite an existing config.
pub fn init_config(path: Option<&str>, title: Option<&str>, quiet: bool) -> Result<PathBuf> {
    let target = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create '{}'", target.display()))?;

    let config_path = target.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let config = CdocConfig {
        title: title.map(str::to_string),
        ..Default::default()
    };
    let mut json = serde_json::to_string_pretty(&config)?;
    json.push('\n');
    fs::write(&config_path, json)
        .with_context(|| format!("Failed to write '{}'", config_path.display()))?;

    if !quiet {
        println!("  {} {}", "Created".green(), config_path.display());
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;

    #[test]
    fn writes_loadable_config_once() {
        let dir = std::env::temp_dir().join("cdoc-init-test");
        let _ = fs::remove_dir_all(&dir);
        let dir_str = dir.to_string_lossy().into_owned();

        let path = init_config(Some(&dir_str), Some("Chillr API"), true).unwrap();
        assert_eq!(path, dir.join(CONFIG_FILE));

        let config = load_config(&dir).unwrap();
        assert_eq!(config.title.as_deref(), Some("Chillr API"));
        assert_eq!(config.out_dir, "doc");

        assert!(init_config(Some(&dir_str), None, true).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
