//! Catalog enumeration and search utilities.
//!
//! The `available_*` helpers enumerate match keys across *enabled* entries
//! only and ignore the active pack; the `all_*` views and [`search_icons`]
//! do filter by pack. The asymmetry is deliberate and mirrors the resolution
//! engine's data source, where pack gating applies to lookups but not to
//! the advertised key sets.

use std::collections::BTreeSet;

use material_icons_catalog::{Catalog, catalog};
use material_icons_catalog::model::{
    FileIcon, FolderIcon, FolderThemeName, IconDef, LanguageIcon,
};

/// Category of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// File icons matched by extension or file name.
    Files,
    /// Language icons matched by language id.
    Languages,
    /// Folder icons matched by folder name.
    Folders,
}

impl Category {
    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Files => "files",
            Category::Languages => "languages",
            Category::Folders => "folders",
        }
    }

    /// Human-readable category title.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Files => "File Icons",
            Category::Languages => "Language Icons",
            Category::Folders => "Folder Icons",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one catalog entry for browsing and search.
#[derive(Debug, Clone)]
pub struct IconInfo {
    /// Icon asset name.
    pub name: String,
    /// Human-readable description synthesized from the match keys.
    pub description: String,
    /// Category the entry belongs to.
    pub category: Category,
    /// Match keys: extensions and file names, language ids, or folder names.
    pub tags: Vec<String>,
}

/// One category's worth of icon summaries.
#[derive(Debug, Clone)]
pub struct IconCategory {
    /// The category.
    pub category: Category,
    /// Entries sorted by icon name.
    pub icons: Vec<IconInfo>,
}

/// Synthetic folder defaults appended to the folders category. These have
/// no catalog entry; they are the computed fallbacks of folder resolution.
const BASIC_FOLDER_ICONS: [(&str, &str); 4] = [
    ("folder", "Default folder"),
    ("folder-open", "Open folder"),
    ("folder-root", "Root folder"),
    ("folder-root-open", "Open root folder"),
];

// ---------------------------------------------------------------------------
// Key enumeration (enabled entries only, independent of the active pack)
// ---------------------------------------------------------------------------

/// Sorted, deduplicated extensions across enabled file entries.
pub fn available_file_extensions() -> Vec<String> {
    available_file_extensions_in(&catalog::global())
}

/// See [`available_file_extensions`].
pub fn available_file_extensions_in(catalog: &Catalog) -> Vec<String> {
    let mut extensions = BTreeSet::new();
    for icon in enabled_file_icons(catalog) {
        extensions.extend(icon.file_extensions.iter().cloned());
    }
    extensions.into_iter().collect()
}

/// Sorted, deduplicated file names across enabled file entries.
pub fn available_file_names() -> Vec<String> {
    available_file_names_in(&catalog::global())
}

/// See [`available_file_names`].
pub fn available_file_names_in(catalog: &Catalog) -> Vec<String> {
    let mut names = BTreeSet::new();
    for icon in enabled_file_icons(catalog) {
        names.extend(icon.file_names.iter().cloned());
    }
    names.into_iter().collect()
}

/// Sorted, deduplicated folder names (including root-only names) across the
/// specific theme's enabled entries.
pub fn available_folder_names() -> Vec<String> {
    available_folder_names_in(&catalog::global())
}

/// See [`available_folder_names`].
pub fn available_folder_names_in(catalog: &Catalog) -> Vec<String> {
    let mut names = BTreeSet::new();
    for icon in enabled_folder_icons(catalog) {
        names.extend(icon.folder_names.iter().cloned());
        names.extend(icon.root_folder_names.iter().cloned());
    }
    names.into_iter().collect()
}

/// Sorted, deduplicated language ids across enabled language entries.
pub fn available_language_ids() -> Vec<String> {
    available_language_ids_in(&catalog::global())
}

/// See [`available_language_ids`].
pub fn available_language_ids_in(catalog: &Catalog) -> Vec<String> {
    let mut ids = BTreeSet::new();
    for icon in catalog.language_icons() {
        if !icon.is_disabled() {
            ids.extend(icon.ids.iter().cloned());
        }
    }
    ids.into_iter().collect()
}

fn enabled_file_icons<'a>(catalog: &'a Catalog) -> impl Iterator<Item = &'a FileIcon> {
    catalog
        .file_icons()
        .icons
        .iter()
        .filter(|icon| !icon.is_disabled())
}

fn enabled_folder_icons<'a>(catalog: &'a Catalog) -> impl Iterator<Item = &'a FolderIcon> {
    catalog
        .folder_theme(FolderThemeName::Specific)
        .into_iter()
        .flat_map(|theme| theme.icons.iter())
        .filter(|icon| !icon.is_disabled())
}

// ---------------------------------------------------------------------------
// Catalog views (filtered by the active pack)
// ---------------------------------------------------------------------------

/// Pack-eligible file icon definitions.
pub fn all_file_icons<'a>(catalog: &'a Catalog, pack: &str) -> Vec<&'a FileIcon> {
    catalog
        .file_icons()
        .icons
        .iter()
        .filter(|icon| icon.eligible_for(pack))
        .collect()
}

/// Enabled folder icon definitions of the specific theme. Folder icons are
/// never pack-gated at resolution time, so no pack parameter exists here.
pub fn all_folder_icons<'a>(catalog: &'a Catalog) -> Vec<&'a FolderIcon> {
    enabled_folder_icons(catalog).collect()
}

/// Pack-eligible language icon definitions.
pub fn all_language_icons<'a>(catalog: &'a Catalog, pack: &str) -> Vec<&'a LanguageIcon> {
    catalog
        .language_icons()
        .iter()
        .filter(|icon| icon.eligible_for(pack))
        .collect()
}

/// All pack-eligible icons grouped by category, sorted by name within each
/// group. The folders category carries the four synthetic defaults on top
/// of the catalog entries.
pub fn all_icons_with_categories(pack: &str) -> Vec<IconCategory> {
    all_icons_with_categories_in(&catalog::global(), pack)
}

/// See [`all_icons_with_categories`].
pub fn all_icons_with_categories_in(catalog: &Catalog, pack: &str) -> Vec<IconCategory> {
    let mut files: Vec<IconInfo> = all_file_icons(catalog, pack)
        .into_iter()
        .map(|icon| {
            let mut tags = icon.file_extensions.clone();
            tags.extend(icon.file_names.iter().cloned());
            IconInfo {
                name: icon.name().to_string(),
                description: format!("File icon for {}", icon.name()),
                category: Category::Files,
                tags,
            }
        })
        .collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    let mut languages: Vec<IconInfo> = all_language_icons(catalog, pack)
        .into_iter()
        .map(|icon| IconInfo {
            name: icon.name().to_string(),
            description: format!("Language icon for {}", icon.ids.join(", ")),
            category: Category::Languages,
            tags: icon.ids.clone(),
        })
        .collect();
    languages.sort_by(|a, b| a.name.cmp(&b.name));

    let mut folders: Vec<IconInfo> = all_folder_icons(catalog)
        .into_iter()
        .map(|icon| {
            let mut tags = icon.folder_names.clone();
            tags.extend(icon.root_folder_names.iter().cloned());
            IconInfo {
                name: icon.name().to_string(),
                description: format!("Folder icon for {}", tags.join(", ")),
                category: Category::Folders,
                tags,
            }
        })
        .collect();
    for (name, description) in BASIC_FOLDER_ICONS {
        folders.push(IconInfo {
            name: name.to_string(),
            description: description.to_string(),
            category: Category::Folders,
            tags: vec!["folder".to_string()],
        });
    }
    folders.sort_by(|a, b| a.name.cmp(&b.name));

    vec![
        IconCategory {
            category: Category::Files,
            icons: files,
        },
        IconCategory {
            category: Category::Languages,
            icons: languages,
        },
        IconCategory {
            category: Category::Folders,
            icons: folders,
        },
    ]
}

/// All pack-eligible icons as a flat list, in category order.
pub fn all_icons(pack: &str) -> Vec<IconInfo> {
    all_icons_in(&catalog::global(), pack)
}

/// See [`all_icons`].
pub fn all_icons_in(catalog: &Catalog, pack: &str) -> Vec<IconInfo> {
    all_icons_with_categories_in(catalog, pack)
        .into_iter()
        .flat_map(|category| category.icons)
        .collect()
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive icon search over names, match keys, and descriptions.
///
/// The query is split on whitespace and every token must appear somewhere
/// in an entry's searchable text for the entry to match (conjunctive, not
/// disjunctive). An empty query matches everything.
pub fn search_icons(query: &str, pack: &str) -> Vec<IconInfo> {
    search_icons_in(&catalog::global(), query, pack)
}

/// See [`search_icons`].
pub fn search_icons_in(catalog: &Catalog, query: &str, pack: &str) -> Vec<IconInfo> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect();

    all_icons_in(catalog, pack)
        .into_iter()
        .filter(|icon| {
            let mut haystack = String::with_capacity(
                icon.name.len() + icon.description.len() + icon.tags.len() * 8,
            );
            haystack.push_str(&icon.name.to_lowercase());
            haystack.push(' ');
            haystack.push_str(&icon.description.to_lowercase());
            for tag in &icon.tags {
                haystack.push(' ');
                haystack.push_str(&tag.to_lowercase());
            }
            tokens.iter().all(|token| haystack.contains(token.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::fixtures;

    #[test]
    fn available_extensions_are_sorted_and_deduplicated() {
        let catalog = fixtures::catalog();
        let extensions = available_file_extensions_in(&catalog);
        let mut sorted = extensions.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(extensions, sorted);
        assert!(extensions.contains(&"ts".to_string()));
    }

    #[test]
    fn disabled_entries_are_excluded_from_enumeration() {
        let catalog = fixtures::catalog();
        assert!(!available_file_extensions_in(&catalog).contains(&"old".to_string()));
        assert!(!available_folder_names_in(&catalog).contains(&"old".to_string()));
    }

    #[test]
    fn enumeration_ignores_the_active_pack() {
        // "angular.json" belongs to a pack-gated entry, yet still shows up:
        // key enumeration filters only on `disabled`.
        let catalog = fixtures::catalog();
        assert!(available_file_names_in(&catalog).contains(&"angular.json".to_string()));
    }

    #[test]
    fn folder_enumeration_includes_root_names() {
        let catalog = fixtures::catalog();
        let names = available_folder_names_in(&catalog);
        assert!(names.contains(&"db".to_string()));
        assert!(names.contains(&"database".to_string()));
    }

    #[test]
    fn pack_filtering_applies_to_views_but_not_enumeration() {
        let catalog = fixtures::catalog();

        let without_pack = all_file_icons(&catalog, "");
        assert!(without_pack.iter().all(|icon| icon.name() != "angular"));

        let with_pack = all_file_icons(&catalog, "angular");
        assert!(with_pack.iter().any(|icon| icon.name() == "angular"));
    }

    #[test]
    fn categories_carry_the_basic_folder_defaults() {
        let catalog = fixtures::catalog();
        let categories = all_icons_with_categories_in(&catalog, "");
        let folders = categories
            .iter()
            .find(|category| category.category == Category::Folders)
            .unwrap();
        for name in ["folder", "folder-open", "folder-root", "folder-root-open"] {
            assert!(folders.icons.iter().any(|icon| icon.name == name));
        }
    }

    #[test]
    fn category_entries_are_sorted_by_name() {
        let catalog = fixtures::catalog();
        for category in all_icons_with_categories_in(&catalog, "") {
            let names: Vec<&str> = category.icons.iter().map(|icon| icon.name.as_str()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            assert_eq!(names, sorted);
        }
    }

    #[test]
    fn search_is_conjunctive_across_tokens() {
        let catalog = fixtures::catalog();

        // Both tokens appear in "typescript".
        let hits = search_icons_in(&catalog, "type script", "");
        assert!(hits.iter().any(|icon| icon.name == "typescript"));

        // No fixture entry carries both tokens.
        let hits = search_icons_in(&catalog, "typescript folder", "");
        assert!(hits.is_empty());
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let catalog = fixtures::catalog();
        let hits = search_icons_in(&catalog, "PACKAGE.JSON", "");
        assert!(hits.iter().any(|icon| icon.name == "nodejs"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let catalog = fixtures::catalog();
        assert_eq!(
            search_icons_in(&catalog, "", "").len(),
            all_icons_in(&catalog, "").len()
        );
    }
}
