//! File icon definitions.

use super::base::{DefaultIcon, IconBase, IconDef};
use super::clone::CloneSource;
use super::pack::IconPack;
use crate::patterns::FileNamePattern;

/// A file icon definition.
///
/// Carries the match keys (extensions, exact file names, patterns) that map
/// files to the asset named by the base. Patterns are expanded into the
/// extension and name lists when the catalog is built; afterwards at least
/// one of the two lists must be non-empty.
#[derive(Debug, Clone)]
pub struct FileIcon {
    /// Shared definition fields.
    pub base: IconBase,
    /// Extensions without a leading dot, e.g. `ts`.
    pub file_extensions: Vec<String>,
    /// Exact file names, e.g. `package.json`.
    pub file_names: Vec<String>,
    /// Declarative shorthand expanded at catalog build time.
    pub patterns: Vec<(String, FileNamePattern)>,
}

impl FileIcon {
    /// Create a file icon for the asset `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: IconBase::new(name),
            file_extensions: Vec::new(),
            file_names: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Add file extensions (no leading dot).
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_extensions
            .extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Add exact file names.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a declarative pattern for `key`.
    pub fn pattern(mut self, key: impl Into<String>, pattern: FileNamePattern) -> Self {
        self.patterns.push((key.into(), pattern));
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

impl IconDef for FileIcon {
    fn base(&self) -> &IconBase {
        &self.base
    }
}

/// The complete file icon table plus its default.
#[derive(Debug, Clone)]
pub struct FileIconSet {
    /// Icon used when no entry matches.
    pub default_icon: DefaultIcon,
    /// All file icon definitions, in resolution order.
    pub icons: Vec<FileIcon>,
}
