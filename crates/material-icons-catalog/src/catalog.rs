//! The immutable icon catalog and its global snapshot.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::data;
use crate::expand;
use crate::model::{FileIconSet, FolderTheme, FolderThemeName, LanguageIcon};
use crate::Result;

/// Immutable, validated collection of all icon definitions.
///
/// A catalog is built once from literal data (or host-supplied definitions),
/// pattern- and clone-expanded at build time, and read-only afterwards.
/// Resolution never mutates a catalog, so a shared snapshot is safe to read
/// from any number of threads; hosts that rebuild definitions swap the whole
/// snapshot via [`replace`] instead of mutating in place.
#[derive(Debug, Clone)]
pub struct Catalog {
    file_icons: FileIconSet,
    folder_themes: Vec<FolderTheme>,
    language_icons: Vec<LanguageIcon>,
}

impl Catalog {
    /// Build and validate a catalog.
    ///
    /// Runs pattern expansion on every file icon, then rejects definitions
    /// with no match keys, clone directives with unknown or chained bases,
    /// and light clone colors on non-light definitions. Entry order is
    /// preserved from the input; it is the tie-break order when several
    /// entries claim the same key.
    pub fn build(
        mut file_icons: FileIconSet,
        folder_themes: Vec<FolderTheme>,
        language_icons: Vec<LanguageIcon>,
    ) -> Result<Self> {
        for icon in &mut file_icons.icons {
            expand::expand_file_icon(icon);
        }
        for icon in &file_icons.icons {
            expand::validate_file_icon(icon)?;
        }
        expand::validate_clones("file", &file_icons.icons)?;

        for theme in &folder_themes {
            for icon in &theme.icons {
                expand::validate_folder_icon(icon)?;
            }
            expand::validate_clones("folder", &theme.icons)?;
        }

        for icon in &language_icons {
            expand::validate_language_icon(icon)?;
        }
        expand::validate_clones("language", &language_icons)?;

        tracing::debug!(
            file_icons = file_icons.icons.len(),
            folder_themes = folder_themes.len(),
            language_icons = language_icons.len(),
            "icon catalog built"
        );

        Ok(Self {
            file_icons,
            folder_themes,
            language_icons,
        })
    }

    /// Build the built-in Material catalog.
    pub fn builtin() -> Result<Self> {
        Self::build(
            data::file_icons(),
            data::folder_icons(),
            data::language_icons(),
        )
    }

    /// The file icon table.
    pub fn file_icons(&self) -> &FileIconSet {
        &self.file_icons
    }

    /// All folder themes.
    pub fn folder_themes(&self) -> &[FolderTheme] {
        &self.folder_themes
    }

    /// The folder theme with the given name, if defined.
    pub fn folder_theme(&self, name: FolderThemeName) -> Option<&FolderTheme> {
        self.folder_themes.iter().find(|theme| theme.name == name)
    }

    /// The language icon table.
    pub fn language_icons(&self) -> &[LanguageIcon] {
        &self.language_icons
    }
}

static GLOBAL: OnceLock<RwLock<Arc<Catalog>>> = OnceLock::new();

fn global_cell() -> &'static RwLock<Arc<Catalog>> {
    GLOBAL.get_or_init(|| {
        let catalog = Catalog::builtin().expect("built-in icon catalog failed validation");
        RwLock::new(Arc::new(catalog))
    })
}

/// The current global catalog snapshot.
///
/// The first call installs the built-in catalog. Invalid built-in data is a
/// fatal configuration error: this aborts instead of resolving against a
/// catalog that failed validation.
pub fn global() -> Arc<Catalog> {
    global_cell().read().clone()
}

/// Atomically replace the global catalog snapshot.
///
/// Readers holding the previous `Arc` keep their consistent view; nobody
/// observes a partially updated catalog.
pub fn replace(catalog: Arc<Catalog>) {
    *global_cell().write() = catalog;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefaultIcon, FileIcon, IconDef};

    fn tiny_file_set(icons: Vec<FileIcon>) -> FileIconSet {
        FileIconSet {
            default_icon: DefaultIcon::new("file"),
            icons,
        }
    }

    #[test]
    fn builtin_catalog_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.file_icons().icons.is_empty());
        assert!(!catalog.language_icons().is_empty());
        assert!(catalog.folder_theme(FolderThemeName::Specific).is_some());
        assert!(catalog.folder_theme(FolderThemeName::Classic).is_some());
        assert!(catalog.folder_theme(FolderThemeName::None).is_some());
    }

    #[test]
    fn build_preserves_declaration_order() {
        let catalog = Catalog::build(
            tiny_file_set(vec![
                FileIcon::new("first").extensions(["x"]),
                FileIcon::new("second").extensions(["x"]),
            ]),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();

        let names: Vec<&str> = catalog
            .file_icons()
            .icons
            .iter()
            .map(|icon| icon.name())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn global_snapshot_can_be_replaced() {
        let replacement = Catalog::build(
            tiny_file_set(vec![FileIcon::new("only").extensions(["only"])]),
            Vec::new(),
            Vec::new(),
        )
        .unwrap();

        let before = global();
        replace(Arc::new(replacement));
        let after = global();
        assert_eq!(after.file_icons().icons.len(), 1);
        assert_eq!(after.file_icons().icons[0].name(), "only");

        // Old snapshot stays intact for readers that still hold it.
        assert!(!Arc::ptr_eq(&before, &after));

        // Restore the builtin catalog for other tests in this process.
        replace(Arc::new(Catalog::builtin().unwrap()));
    }
}
