//! Source file discovery and grouping.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A source file and the group its sections belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub group: String,
}

/// Walk `source_dir` recursively and collect files ending with `suffix`.
///
/// Files are sorted by path so group and section order is stable between
/// runs. Unreadable directory entries are skipped.
pub fn discover(source_dir: &Path, suffix: &str) -> Result<Vec<SourceFile>> {
    if !source_dir.is_dir() {
        anyhow::bail!("Source directory '{}' does not exist", source_dir.display());
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(source_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.ends_with(suffix))
        })
        .collect();
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| SourceFile {
            group: cdoc_parse::group_name(&path, suffix),
            path,
        })
        .collect())
}

/// Resolve `dir` against `root` unless it is already absolute.
pub fn resolve(root: &Path, dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Ensure `dir` exists, creating it if needed.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create '{}'", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/app/controllers")
    }

    #[test]
    fn finds_controllers_in_sorted_order() {
        let files = discover(&fixtures(), "_controller.rb").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| {
                f.path
                    .strip_prefix(fixtures())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "accounts_controller.rb",
                "admin/users_controller.rb",
                "health_controller.rb",
                "users_controller.rb",
            ]
        );
        let groups: Vec<&str> = files.iter().map(|f| f.group.as_str()).collect();
        assert_eq!(groups, vec!["Accounts", "Users", "Health", "Users"]);
    }

    #[test]
    fn missing_source_dir_fails() {
        assert!(discover(Path::new("/no/such/dir"), "_controller.rb").is_err());
    }

    #[test]
    fn resolve_relative_and_absolute() {
        let root = Path::new("/project");
        assert_eq!(resolve(root, "doc"), PathBuf::from("/project/doc"));
        assert_eq!(resolve(root, "/tmp/out"), PathBuf::from("/tmp/out"));
    }
}
