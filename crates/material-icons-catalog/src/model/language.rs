//! Language icon definitions.

use super::base::{IconBase, IconDef};
use super::clone::CloneSource;
use super::pack::IconPack;

/// A language icon definition.
///
/// Matches by exact language identifier (the editor-style ids such as
/// `typescript` or `shellscript`). The id list must be non-empty.
#[derive(Debug, Clone)]
pub struct LanguageIcon {
    /// Shared definition fields.
    pub base: IconBase,
    /// Language identifiers mapped to this icon.
    pub ids: Vec<String>,
}

impl LanguageIcon {
    /// Create a language icon for the asset `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: IconBase::new(name),
            ids: Vec::new(),
        }
    }

    /// Add language identifiers.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
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

impl IconDef for LanguageIcon {
    fn base(&self) -> &IconBase {
        &self.base
    }
}
