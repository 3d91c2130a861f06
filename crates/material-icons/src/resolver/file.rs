//! File icon resolution.

use material_icons_catalog::{Catalog, catalog};

use super::{
    DEFAULT_FILE_ICON, find_file_icon_by_extension, find_file_icon_by_name, find_language_icon,
};

/// Query for resolving a file icon.
///
/// Any combination of file name, extension, and language id may be set;
/// unset inputs skip their precedence level. A query with none of the three
/// returns the fallback without scanning the catalog.
///
/// # Example
///
/// ```
/// use material_icons::FileIconQuery;
///
/// let icon = FileIconQuery::new().file_name("package.json").resolve();
/// assert_eq!(icon, "nodejs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileIconQuery {
    file_name: Option<String>,
    file_extension: Option<String>,
    language_id: Option<String>,
    fallback: Option<String>,
    pack: String,
}

impl FileIconQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exact file name, e.g. `package.json`.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Set the file extension; one leading dot is stripped while matching.
    pub fn file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = Some(extension.into());
        self
    }

    /// Set the language id, e.g. `typescript`.
    pub fn language_id(mut self, id: impl Into<String>) -> Self {
        self.language_id = Some(id.into());
        self
    }

    /// Set the icon name returned when nothing matches (default `file`).
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Set the active icon pack (default: none).
    pub fn pack(mut self, pack: impl Into<String>) -> Self {
        self.pack = pack.into();
        self
    }

    /// Resolve against the global catalog snapshot.
    pub fn resolve(&self) -> String {
        self.resolve_in(&catalog::global())
    }

    /// Resolve against an explicit catalog.
    pub fn resolve_in(&self, catalog: &Catalog) -> String {
        for (label, strategy) in FILE_STRATEGIES {
            if let Some(name) = strategy(catalog, self) {
                tracing::trace!(strategy = label, icon = %name, "file icon resolved");
                return name;
            }
        }
        self.fallback
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_ICON.to_string())
    }
}

/// One precedence level of the file lookup.
type FileStrategy = fn(&Catalog, &FileIconQuery) -> Option<String>;

/// The precedence order for file queries. First match wins: a language id
/// match beats a file name match, which beats an extension match.
const FILE_STRATEGIES: [(&str, FileStrategy); 3] = [
    ("language-id", by_language_id),
    ("file-name", by_file_name),
    ("file-extension", by_file_extension),
];

fn by_language_id(catalog: &Catalog, query: &FileIconQuery) -> Option<String> {
    let id = query.language_id.as_deref()?;
    find_language_icon(catalog, id, &query.pack).map(|icon| icon.base.name.clone())
}

fn by_file_name(catalog: &Catalog, query: &FileIconQuery) -> Option<String> {
    let name = query.file_name.as_deref()?;
    find_file_icon_by_name(catalog, name, &query.pack).map(|icon| icon.base.name.clone())
}

fn by_file_extension(catalog: &Catalog, query: &FileIconQuery) -> Option<String> {
    let extension = query.file_extension.as_deref()?;
    find_file_icon_by_extension(catalog, extension, &query.pack).map(|icon| icon.base.name.clone())
}

/// Resolve a file icon against the global catalog snapshot.
pub fn resolve_file_icon(query: &FileIconQuery) -> String {
    query.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::fixtures;

    #[test]
    fn empty_query_returns_fallback_without_scanning() {
        let catalog = fixtures::catalog();
        assert_eq!(FileIconQuery::new().resolve_in(&catalog), "file");
        assert_eq!(
            FileIconQuery::new().fallback("blank").resolve_in(&catalog),
            "blank"
        );
    }

    #[test]
    fn language_id_beats_file_name_and_extension() {
        let catalog = fixtures::catalog();
        let icon = FileIconQuery::new()
            .file_name("package.json")
            .file_extension("json")
            .language_id("typescript")
            .resolve_in(&catalog);
        assert_eq!(icon, "typescript");
    }

    #[test]
    fn file_name_beats_extension() {
        let catalog = fixtures::catalog();
        let icon = FileIconQuery::new()
            .file_name("package.json")
            .file_extension("json")
            .resolve_in(&catalog);
        assert_eq!(icon, "nodejs");
    }

    #[test]
    fn extension_matches_with_and_without_leading_dot() {
        let catalog = fixtures::catalog();
        let plain = FileIconQuery::new().file_extension("ts").resolve_in(&catalog);
        let dotted = FileIconQuery::new()
            .file_extension(".ts")
            .resolve_in(&catalog);
        assert_eq!(plain, "typescript");
        assert_eq!(dotted, plain);
    }

    #[test]
    fn unmatched_precedence_levels_fall_through() {
        let catalog = fixtures::catalog();
        let icon = FileIconQuery::new()
            .language_id("cobol")
            .file_name("no-such-file")
            .file_extension("json")
            .resolve_in(&catalog);
        assert_eq!(icon, "json");
    }

    #[test]
    fn pack_gated_entry_requires_its_pack() {
        let catalog = fixtures::catalog();
        let base = FileIconQuery::new().file_name("angular.json");

        assert_eq!(base.clone().pack("angular").resolve_in(&catalog), "angular");
        // Under any other pack (or none) the name misses and the json
        // extension is not part of the query, so the fallback applies.
        assert_eq!(base.clone().pack("react").resolve_in(&catalog), "file");
        assert_eq!(base.resolve_in(&catalog), "file");
    }

    #[test]
    fn disabled_entry_never_resolves() {
        let catalog = fixtures::catalog();
        let icon = FileIconQuery::new()
            .file_extension("old")
            .resolve_in(&catalog);
        assert_eq!(icon, "file");
    }

    #[test]
    fn strategies_are_independent() {
        let catalog = fixtures::catalog();
        let query = FileIconQuery::new()
            .file_name("package.json")
            .language_id("luau");

        // Pack-gated language entry: invisible without the pack...
        assert_eq!(by_language_id(&catalog, &query), None);
        // ...while the file name strategy is unaffected.
        assert_eq!(by_file_name(&catalog, &query).as_deref(), Some("nodejs"));

        let query = query.pack("roblox");
        assert_eq!(by_language_id(&catalog, &query).as_deref(), Some("roblox"));
    }
}
