//! Fields shared by every icon definition.

use super::clone::CloneSource;
use super::pack::IconPack;

/// Common definition fields embedded by the file, folder, and language
/// icon types.
#[derive(Debug, Clone)]
pub struct IconBase {
    /// Unique name of the icon asset.
    pub name: String,
    /// Whether a light variant of the asset exists.
    pub light: bool,
    /// Whether a high contrast variant of the asset exists.
    pub high_contrast: bool,
    /// Disabled entries are excluded from resolution and enumeration.
    pub disabled: bool,
    /// Packs this entry is restricted to. `None` matches every pack.
    pub enabled_for: Option<Vec<IconPack>>,
    /// Clone directive reusing another entry's artwork.
    pub clone: Option<CloneSource>,
}

impl IconBase {
    /// Create a base definition for the asset `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            light: false,
            high_contrast: false,
            disabled: false,
            enabled_for: None,
            clone: None,
        }
    }

    /// Whether this entry participates in resolution under the active pack.
    ///
    /// Disabled entries never match. A pack restriction matches only when
    /// the active pack string equals one of the listed packs' string forms,
    /// so the empty pack string never satisfies a restriction.
    pub fn eligible_for(&self, pack: &str) -> bool {
        if self.disabled {
            return false;
        }
        match &self.enabled_for {
            None => true,
            Some(packs) => packs.iter().any(|p| p.as_str() == pack),
        }
    }
}

/// Access to the shared definition fields.
///
/// Lets eligibility checks, clone validation, and enumeration run
/// generically over file, folder, and language definitions.
pub trait IconDef {
    /// The shared definition fields.
    fn base(&self) -> &IconBase;

    /// Icon asset name.
    fn name(&self) -> &str {
        &self.base().name
    }

    /// Whether the entry is disabled.
    fn is_disabled(&self) -> bool {
        self.base().disabled
    }

    /// See [`IconBase::eligible_for`].
    fn eligible_for(&self, pack: &str) -> bool {
        self.base().eligible_for(pack)
    }
}

/// Default icon reference used by folder themes and the file icon set.
#[derive(Debug, Clone)]
pub struct DefaultIcon {
    /// Icon asset name.
    pub name: String,
    /// Whether a light variant of the asset exists.
    pub light: bool,
    /// Whether a high contrast variant of the asset exists.
    pub high_contrast: bool,
}

impl DefaultIcon {
    /// Create a default icon reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            light: false,
            high_contrast: false,
        }
    }

    /// Flag an available light variant.
    pub fn light(mut self) -> Self {
        self.light = true;
        self
    }

    /// Flag an available high contrast variant.
    pub fn high_contrast(mut self) -> Self {
        self.high_contrast = true;
        self
    }
}
