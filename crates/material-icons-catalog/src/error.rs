//! Error types for catalog construction.

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a catalog or parsing catalog data.
///
/// Every variant is a load-time configuration failure. Catalog data is
/// trusted and fixed, so none of these occur during resolution; a host
/// should refuse to start rather than resolve against a catalog that
/// failed validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file name pattern tag outside the recognized set.
    #[error("unknown file name pattern '{tag}'")]
    UnknownPattern { tag: String },

    /// An icon pack string without a matching pack.
    #[error("unknown icon pack '{value}'")]
    UnknownIconPack { value: String },

    /// A folder theme string without a matching theme.
    #[error("unknown folder theme '{value}'")]
    UnknownFolderTheme { value: String },

    /// A clone directive referencing a base that is not in the catalog.
    #[error("{kind} icon '{name}' clones unknown base '{base}'")]
    UnknownCloneBase {
        kind: &'static str,
        name: String,
        base: String,
    },

    /// A clone directive whose base is itself a clone.
    #[error("{kind} icon '{name}' clones '{base}', which is itself a clone")]
    ChainedClone {
        kind: &'static str,
        name: String,
        base: String,
    },

    /// A light clone color on a definition without the light variant flag.
    #[error("icon '{name}' declares a light clone color but is not flagged as light")]
    LightColorWithoutLight { name: String },

    /// A definition left with no usable match keys after pattern expansion.
    #[error("{kind} icon '{name}' has no match keys")]
    MissingMatchKeys { kind: &'static str, name: String },
}

impl Error {
    /// Create an unknown-pattern error.
    pub fn unknown_pattern(tag: impl Into<String>) -> Self {
        Self::UnknownPattern { tag: tag.into() }
    }

    /// Create an unknown-pack error.
    pub fn unknown_icon_pack(value: impl Into<String>) -> Self {
        Self::UnknownIconPack {
            value: value.into(),
        }
    }

    /// Create an unknown-theme error.
    pub fn unknown_folder_theme(value: impl Into<String>) -> Self {
        Self::UnknownFolderTheme {
            value: value.into(),
        }
    }

    /// Create an unknown-clone-base error.
    pub fn unknown_clone_base(
        kind: &'static str,
        name: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self::UnknownCloneBase {
            kind,
            name: name.into(),
            base: base.into(),
        }
    }

    /// Create a chained-clone error.
    pub fn chained_clone(
        kind: &'static str,
        name: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self::ChainedClone {
            kind,
            name: name.into(),
            base: base.into(),
        }
    }

    /// Create a light-color error.
    pub fn light_color_without_light(name: impl Into<String>) -> Self {
        Self::LightColorWithoutLight { name: name.into() }
    }

    /// Create a missing-match-keys error.
    pub fn missing_match_keys(kind: &'static str, name: impl Into<String>) -> Self {
        Self::MissingMatchKeys {
            kind,
            name: name.into(),
        }
    }
}
