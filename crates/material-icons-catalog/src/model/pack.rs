//! Icon pack identifiers.

use serde::{Deserialize, Serialize};

use crate::Error;

/// A toggleable icon pack.
///
/// Packs group framework-specific icons so they can be switched on and off
/// together. Definitions opt into packs via `enabled_for`; a definition
/// without a pack restriction matches under every pack, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPack {
    Angular,
    Nest,
    #[serde(rename = "angular_ngrx")]
    Ngrx,
    React,
    #[serde(rename = "react_redux")]
    Redux,
    Roblox,
    Qwik,
    Vue,
    #[serde(rename = "vue_vuex")]
    Vuex,
}

impl IconPack {
    /// All packs in declaration order.
    pub const ALL: [IconPack; 9] = [
        IconPack::Angular,
        IconPack::Nest,
        IconPack::Ngrx,
        IconPack::React,
        IconPack::Redux,
        IconPack::Roblox,
        IconPack::Qwik,
        IconPack::Vue,
        IconPack::Vuex,
    ];

    /// Stable string form used in queries and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconPack::Angular => "angular",
            IconPack::Nest => "nest",
            IconPack::Ngrx => "angular_ngrx",
            IconPack::React => "react",
            IconPack::Redux => "react_redux",
            IconPack::Roblox => "roblox",
            IconPack::Qwik => "qwik",
            IconPack::Vue => "vue",
            IconPack::Vuex => "vue_vuex",
        }
    }
}

impl std::str::FromStr for IconPack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "angular" => Ok(IconPack::Angular),
            "nest" => Ok(IconPack::Nest),
            "angular_ngrx" => Ok(IconPack::Ngrx),
            "react" => Ok(IconPack::React),
            "react_redux" => Ok(IconPack::Redux),
            "roblox" => Ok(IconPack::Roblox),
            "qwik" => Ok(IconPack::Qwik),
            "vue" => Ok(IconPack::Vue),
            "vue_vuex" => Ok(IconPack::Vuex),
            _ => Err(Error::unknown_icon_pack(s)),
        }
    }
}

impl std::fmt::Display for IconPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
