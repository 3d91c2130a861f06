//! Integration tests for enumeration, catalog views, and search against
//! the built-in catalog.

use material_icons::{
    Category, available_file_extensions, available_file_names, available_folder_names,
    available_language_ids, all_icons, all_icons_with_categories, catalog, query, search_icons,
};

fn is_sorted_and_unique(values: &[String]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[test]
fn extension_listing_is_sorted_without_duplicates() {
    let extensions = available_file_extensions();
    assert!(is_sorted_and_unique(&extensions));
    for expected in ["rs", "ts", "json", "yaml"] {
        assert!(extensions.contains(&expected.to_string()), "{expected}");
    }
}

#[test]
fn name_listing_covers_pattern_generated_names() {
    let names = available_file_names();
    assert!(is_sorted_and_unique(&names));
    for expected in [".prettierrc", ".gitignore", "package.json", "Cargo.toml"] {
        assert!(names.contains(&expected.to_string()), "{expected}");
    }
}

#[test]
fn folder_listing_includes_root_only_names() {
    let names = available_folder_names();
    assert!(is_sorted_and_unique(&names));
    assert!(names.contains(&"src".to_string()));
    assert!(names.contains(&"frontend".to_string()));
}

#[test]
fn language_listing_is_sorted_without_duplicates() {
    let ids = available_language_ids();
    assert!(is_sorted_and_unique(&ids));
    for expected in ["typescript", "rust", "shellscript"] {
        assert!(ids.contains(&expected.to_string()), "{expected}");
    }
}

#[test]
fn disabled_entries_are_excluded_from_every_listing() {
    assert!(!available_file_names().contains(&"tslint.json".to_string()));
    assert!(!available_folder_names().contains(&"bower_components".to_string()));
    assert!(!available_language_ids().contains(&"haml".to_string()));
}

#[test]
fn enumeration_ignores_the_active_pack_but_views_do_not() {
    // The "angular.json" key belongs to a pack-gated entry and is still
    // advertised by the enumeration helpers...
    assert!(available_file_names().contains(&"angular.json".to_string()));

    // ...while the pack-filtered views hide the entry without its pack.
    let snapshot = catalog::global();
    let unpacked = query::all_file_icons(&snapshot, "");
    assert!(unpacked.iter().all(|icon| icon.base.name != "angular"));
    let packed = query::all_file_icons(&snapshot, "angular");
    assert!(packed.iter().any(|icon| icon.base.name == "angular"));
}

#[test]
fn categories_are_complete_and_sorted() {
    let categories = all_icons_with_categories("");
    let kinds: Vec<Category> = categories.iter().map(|category| category.category).collect();
    assert_eq!(
        kinds,
        [Category::Files, Category::Languages, Category::Folders]
    );

    for category in &categories {
        assert!(!category.icons.is_empty());
        let names: Vec<&str> = category
            .icons
            .iter()
            .map(|icon| icon.name.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted, "{} not sorted", category.category.as_str());
    }

    let folders = &categories[2];
    for name in ["folder", "folder-open", "folder-root", "folder-root-open"] {
        assert!(folders.icons.iter().any(|icon| icon.name == name));
    }
}

#[test]
fn flat_listing_matches_the_categorized_one() {
    let flat = all_icons("");
    let categorized: usize = all_icons_with_categories("")
        .iter()
        .map(|category| category.icons.len())
        .sum();
    assert_eq!(flat.len(), categorized);
}

#[test]
fn search_requires_every_token() {
    let hits = search_icons("java script", "");
    assert!(hits.iter().any(|icon| icon.name == "javascript"));
    // "java" alone satisfies only one token and must be excluded.
    assert!(hits.iter().all(|icon| icon.name != "java"));
}

#[test]
fn search_is_case_insensitive_and_spans_tags() {
    let hits = search_icons("PACKAGE.JSON", "");
    assert!(hits.iter().any(|icon| icon.name == "nodejs"));

    let hits = search_icons("node_modules", "");
    assert!(hits.iter().any(|icon| icon.name == "folder-node"));
}

#[test]
fn search_respects_the_active_pack() {
    assert!(search_icons("nest-cli", "").is_empty());
    let hits = search_icons("nest-cli", "nest");
    assert!(hits.iter().any(|icon| icon.name == "nest"));
}
