//! Folder icon resolution.

use material_icons_catalog::{Catalog, catalog};
use material_icons_catalog::model::{FolderThemeName, IconDef};

use super::{DEFAULT_FOLDER_ICON, DEFAULT_ROOT_FOLDER_ICON, find_folder_icon};

/// Query for resolving a folder icon.
///
/// The open state is applied as a uniform `-open` suffix on the resolved
/// name, so an asset named `{base}-open` must exist for every folder icon
/// that supports the open state.
///
/// # Example
///
/// ```
/// use material_icons::FolderIconQuery;
///
/// let icon = FolderIconQuery::new().folder_name("src").open(true).resolve();
/// assert_eq!(icon, "folder-src-open");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FolderIconQuery {
    folder_name: Option<String>,
    is_root: bool,
    is_open: bool,
    theme: FolderThemeName,
    fallback: Option<String>,
}

impl FolderIconQuery {
    /// Create an empty query for the specific theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the exact folder name, e.g. `src`.
    pub fn folder_name(mut self, name: impl Into<String>) -> Self {
        self.folder_name = Some(name.into());
        self
    }

    /// Mark the folder as a workspace root.
    pub fn root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    /// Mark the folder as expanded.
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Select the folder theme (default: specific).
    pub fn theme(mut self, theme: FolderThemeName) -> Self {
        self.theme = theme;
        self
    }

    /// Set the icon name returned by the `none` theme.
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
        match self.theme {
            FolderThemeName::None => self
                .fallback
                .clone()
                .unwrap_or_else(|| DEFAULT_FOLDER_ICON.to_string()),
            FolderThemeName::Classic => open_variant(DEFAULT_FOLDER_ICON, self.is_open),
            FolderThemeName::Specific => {
                if let Some(name) = &self.folder_name {
                    if let Some(icon) = find_folder_icon(catalog, name, self.is_root) {
                        let resolved = open_variant(icon.name(), self.is_open);
                        tracing::trace!(folder = %name, icon = %resolved, "folder icon resolved");
                        return resolved;
                    }
                }
                if self.is_root {
                    open_variant(DEFAULT_ROOT_FOLDER_ICON, self.is_open)
                } else {
                    open_variant(DEFAULT_FOLDER_ICON, self.is_open)
                }
            }
        }
    }
}

/// Append the `-open` suffix for expanded folders.
fn open_variant(name: &str, is_open: bool) -> String {
    if is_open {
        format!("{name}-open")
    } else {
        name.to_string()
    }
}

/// Resolve a folder icon against the global catalog snapshot.
pub fn resolve_folder_icon(query: &FolderIconQuery) -> String {
    query.resolve()
}
