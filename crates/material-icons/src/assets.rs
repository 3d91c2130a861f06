//! Compile-time embedded icon assets.
//!
//! The external bundling step minifies SVG artwork into `assets/icons/`;
//! `include_dir` embeds that directory into the binary so lookups need no
//! filesystem access at runtime. The resolution engine never consults
//! assets — a resolved name without a shipped asset is the renderer's
//! concern, and the shipped set can lag behind the catalog.
//!
//! Light variants follow the `{name}_light` naming convention.

use include_dir::{Dir, include_dir};

static ICONS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Raw SVG content for `name`, if the asset shipped.
pub fn icon_svg(name: &str) -> Option<&'static str> {
    ICONS
        .get_file(format!("{name}.svg"))
        .and_then(|file| file.contents_utf8())
}

/// Whether an asset named `name` shipped with the crate.
pub fn has_icon(name: &str) -> bool {
    ICONS.get_file(format!("{name}.svg")).is_some()
}

/// Sorted names of all shipped assets.
pub fn available_icons() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ICONS
        .files()
        .filter_map(|file| file.path().file_stem().and_then(|stem| stem.to_str()))
        .collect();
    names.sort_unstable();
    names
}

/// The asset name honoring the light variant convention.
///
/// Returns `{name}_light` when `light` is requested and that asset
/// shipped; otherwise the plain name. Callers resolve a catalog name
/// first and pass it through here before rendering.
pub fn themed_icon_name(name: &str, light: bool) -> String {
    if light {
        let candidate = format!("{name}_light");
        if has_icon(&candidate) {
            return candidate;
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_assets_resolve_to_svg_content() {
        let svg = icon_svg("file").expect("default file asset ships");
        assert!(svg.starts_with("<svg"));
        assert!(has_icon("folder"));
        assert!(!has_icon("definitely-not-an-icon"));
    }

    #[test]
    fn available_icons_are_sorted() {
        let names = available_icons();
        assert!(!names.is_empty());
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"file"));
    }

    #[test]
    fn light_variant_is_used_only_when_it_ships() {
        assert_eq!(themed_icon_name("typescript", true), "typescript_light");
        assert_eq!(themed_icon_name("typescript", false), "typescript");
        assert_eq!(themed_icon_name("rust", true), "rust");
    }
}
