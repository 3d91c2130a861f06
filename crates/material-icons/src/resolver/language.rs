//! Language icon resolution.

use material_icons_catalog::{Catalog, catalog};

use super::{DEFAULT_FILE_ICON, find_language_icon};

/// Query for resolving a language icon by language id.
///
/// Unlike file resolution there is a single precedence level: the first
/// pack-eligible entry containing the id wins, otherwise the fallback.
#[derive(Debug, Clone)]
pub struct LanguageIconQuery {
    language_id: String,
    pack: String,
    fallback: Option<String>,
}

impl LanguageIconQuery {
    /// Create a query for `language_id`.
    pub fn new(language_id: impl Into<String>) -> Self {
        Self {
            language_id: language_id.into(),
            pack: String::new(),
            fallback: None,
        }
    }

    /// Set the active icon pack (default: none).
    pub fn pack(mut self, pack: impl Into<String>) -> Self {
        self.pack = pack.into();
        self
    }

    /// Set the icon name returned when nothing matches (default `file`).
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Resolve against the global catalog snapshot.
    pub fn resolve(&self) -> String {
        self.resolve_in(&catalog::global())
    }

    /// Resolve against an explicit catalog.
    pub fn resolve_in(&self, catalog: &Catalog) -> String {
        if !self.language_id.is_empty() {
            if let Some(icon) = find_language_icon(catalog, &self.language_id, &self.pack) {
                return icon.base.name.clone();
            }
        }
        self.fallback
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_ICON.to_string())
    }
}

/// Resolve a language icon against the global catalog snapshot.
pub fn resolve_language_icon(query: &LanguageIconQuery) -> String {
    query.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::fixtures;

    #[test]
    fn known_id_resolves_to_its_entry() {
        let catalog = fixtures::catalog();
        assert_eq!(
            LanguageIconQuery::new("typescript").resolve_in(&catalog),
            "typescript"
        );
    }

    #[test]
    fn unknown_or_empty_id_returns_fallback() {
        let catalog = fixtures::catalog();
        assert_eq!(LanguageIconQuery::new("cobol").resolve_in(&catalog), "file");
        assert_eq!(
            LanguageIconQuery::new("cobol")
                .fallback("code")
                .resolve_in(&catalog),
            "code"
        );
        assert_eq!(LanguageIconQuery::new("").resolve_in(&catalog), "file");
    }

    #[test]
    fn pack_gating_applies() {
        let catalog = fixtures::catalog();
        assert_eq!(LanguageIconQuery::new("luau").resolve_in(&catalog), "file");
        assert_eq!(
            LanguageIconQuery::new("luau")
                .pack("roblox")
                .resolve_in(&catalog),
            "roblox"
        );
    }
}
