//! Folder icon definitions and folder themes.

use serde::{Deserialize, Serialize};

use super::base::{DefaultIcon, IconBase, IconDef};
use super::clone::CloneSource;
use super::pack::IconPack;
use crate::Error;

/// Folder theme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderThemeName {
    /// Per-name folder icons with generic fallbacks.
    #[default]
    Specific,
    /// Plain folder icons for every folder, open state only.
    Classic,
    /// No folder icons; callers fall back to their own default.
    None,
}

impl FolderThemeName {
    /// Stable string form used in queries and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            FolderThemeName::Specific => "specific",
            FolderThemeName::Classic => "classic",
            FolderThemeName::None => "none",
        }
    }
}

impl std::str::FromStr for FolderThemeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "specific" => Ok(FolderThemeName::Specific),
            "classic" => Ok(FolderThemeName::Classic),
            "none" => Ok(FolderThemeName::None),
            _ => Err(Error::unknown_folder_theme(s)),
        }
    }
}

impl std::fmt::Display for FolderThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A folder icon definition.
///
/// Matches by exact folder name; `root_folder_names` entries apply only when
/// the queried folder is a workspace root. At least one of the two lists
/// must be non-empty.
#[derive(Debug, Clone)]
pub struct FolderIcon {
    /// Shared definition fields.
    pub base: IconBase,
    /// Exact folder names, e.g. `src`.
    pub folder_names: Vec<String>,
    /// Folder names matched only for workspace roots.
    pub root_folder_names: Vec<String>,
}

impl FolderIcon {
    /// Create a folder icon for the asset `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: IconBase::new(name),
            folder_names: Vec::new(),
            root_folder_names: Vec::new(),
        }
    }

    /// Add folder names.
    pub fn folders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.folder_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add workspace-root folder names.
    pub fn root_folders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.root_folder_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Flag an available light variant.
    pub fn light(mut self) -> Self {
        self.base.light = true;
        self
    }

    /// Flag an available high contrast variant.
    pub fn high_contrast(mut self) -> Self {
        self.base.high_contrast = true;
        self
    }

    /// Exclude the entry from resolution and enumeration.
    pub fn disabled(mut self) -> Self {
        self.base.disabled = true;
        self
    }

    /// Restrict the entry to the given packs.
    pub fn packs<I>(mut self, packs: I) -> Self
    where
        I: IntoIterator<Item = IconPack>,
    {
        self.base.enabled_for = Some(packs.into_iter().collect());
        self
    }

    /// Borrow another entry's artwork via a clone directive.
    pub fn clone_of(mut self, clone: CloneSource) -> Self {
        self.base.clone = Some(clone);
        self
    }
}

impl IconDef for FolderIcon {
    fn base(&self) -> &IconBase {
        &self.base
    }
}

/// A folder theme: default icons plus (for the specific theme) the
/// per-name icon table.
#[derive(Debug, Clone)]
pub struct FolderTheme {
    /// Theme selector this definition belongs to.
    pub name: FolderThemeName,
    /// Default icon for folders in this theme.
    pub default_icon: DefaultIcon,
    /// Icon for workspace root folders.
    pub root_folder: Option<DefaultIcon>,
    /// Per-name folder icons. Only the specific theme carries entries.
    pub icons: Vec<FolderIcon>,
}

impl FolderTheme {
    /// Create a theme with its default icon.
    pub fn new(name: FolderThemeName, default_icon: DefaultIcon) -> Self {
        Self {
            name,
            default_icon,
            root_folder: None,
            icons: Vec::new(),
        }
    }

    /// Set the workspace root default icon.
    pub fn root_folder(mut self, icon: DefaultIcon) -> Self {
        self.root_folder = Some(icon);
        self
    }

    /// Set the per-name icon table.
    pub fn icons(mut self, icons: Vec<FolderIcon>) -> Self {
        self.icons = icons;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_name_round_trip() {
        for name in [
            FolderThemeName::Specific,
            FolderThemeName::Classic,
            FolderThemeName::None,
        ] {
            assert_eq!(name.as_str().parse::<FolderThemeName>().unwrap(), name);
        }
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(matches!(
            "minimal".parse::<FolderThemeName>(),
            Err(Error::UnknownFolderTheme { .. })
        ));
    }
}
