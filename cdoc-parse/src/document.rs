//! Grouping sections into a [`Document`].

use std::path::Path;

use crate::types::{Document, Group, Section, capitalize};

/// File name suffix stripped when deriving group names.
pub const DEFAULT_FILE_SUFFIX: &str = "_controller.rb";

/// Derive a group name from a file path.
///
/// The file name loses `suffix` (or, if it does not end with it, its
/// extension) and the result is capitalized:
/// `app/controllers/user_roles_controller.rb` → `User_roles`.
pub fn group_name(path: &Path, suffix: &str) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let base = match file_name.strip_suffix(suffix) {
        Some(stripped) if !suffix.is_empty() && !stripped.is_empty() => stripped.to_string(),
        _ => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.clone()),
    };

    capitalize(&base)
}

/// HTML anchor for a group name: lowercase, non-alphanumerics collapsed to `-`.
pub fn anchor(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("group");
    }
    slug
}

/// Anchors for every group of `doc`, in order and pairwise distinct.
///
/// A slug already taken by an earlier group gets `-1`, `-2`, ... appended.
pub fn group_anchors(doc: &Document) -> Vec<String> {
    let mut taken: Vec<String> = Vec::with_capacity(doc.groups.len());
    for group in &doc.groups {
        let base = anchor(&group.name);
        let mut slug = base.clone();
        let mut n = 0;
        while taken.contains(&slug) {
            n += 1;
            slug = format!("{base}-{n}");
        }
        taken.push(slug);
    }
    taken
}

/// Collects sections group by group, keeping first-encountered group order.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    title: String,
    groups: Vec<Group>,
}

impl DocumentBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            groups: Vec::new(),
        }
    }

    /// Append `sections` to `group`, creating the group on first sight.
    ///
    /// A group is registered even when `sections` is empty, so a file with no
    /// documentation still shows up in the sidebar.
    pub fn add_sections(&mut self, group: &str, sections: Vec<Section>) -> &mut Self {
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.sections.extend(sections),
            None => self.groups.push(Group {
                name: group.to_string(),
                sections,
            }),
        }
        self
    }

    pub fn build(self) -> Document {
        Document {
            title: self.title,
            groups: self.groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Fragment;

    fn section(title: &str) -> Section {
        Section {
            header: Fragment::plain(title),
            body: vec![],
        }
    }

    #[test]
    fn group_names() {
        let suffix = DEFAULT_FILE_SUFFIX;
        assert_eq!(group_name(Path::new("app/controllers/accounts_controller.rb"), suffix), "Accounts");
        assert_eq!(group_name(Path::new("user_roles_controller.rb"), suffix), "User_roles");
        assert_eq!(group_name(Path::new("api/V1_controller.rb"), suffix), "V1");
        assert_eq!(group_name(Path::new("lib/helpers.rb"), suffix), "Helpers");
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor("Accounts"), "accounts");
        assert_eq!(anchor("User roles"), "user-roles");
        assert_eq!(anchor("  Admin / Users  "), "admin-users");
        assert_eq!(anchor("!!!"), "group");
    }

    #[test]
    fn colliding_slugs_get_suffixes() {
        let mut builder = DocumentBuilder::new("API");
        builder
            .add_sections("User_roles", Vec::new())
            .add_sections("User-roles", Vec::new())
            .add_sections("User roles", Vec::new())
            .add_sections("User-roles-1", Vec::new());
        let doc = builder.build();
        assert_eq!(
            group_anchors(&doc),
            vec!["user-roles", "user-roles-1", "user-roles-2", "user-roles-1-1"]
        );
    }

    #[test]
    fn groups_merge_in_first_seen_order() {
        let mut builder = DocumentBuilder::new("API");
        builder
            .add_sections("Users", vec![section("a")])
            .add_sections("Accounts", vec![section("b")])
            .add_sections("Users", vec![section("c")]);
        let doc = builder.build();

        assert_eq!(doc.sidebar_keys(), vec!["Users", "Accounts"]);
        assert_eq!(doc.groups[0].sections.len(), 2);
        assert_eq!(doc.groups[0].sections[1].header, Fragment::plain("c"));
        assert_eq!(doc.section_count(), 3);
    }

    #[test]
    fn empty_group_is_kept() {
        let mut builder = DocumentBuilder::new("API");
        builder.add_sections("Health", Vec::new());
        let doc = builder.build();
        assert_eq!(doc.sidebar_keys(), vec!["Health"]);
        assert!(doc.groups[0].sections.is_empty());
    }
}
