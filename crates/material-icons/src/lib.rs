//! Material Design icon resolution for file trees.
//!
//! This crate maps identifying strings — file names, extensions, language
//! ids, folder names — to Material icon names, honoring the active icon
//! pack and folder theme. It provides:
//!
//! - **Resolution**: deterministic file/folder/language lookups with a
//!   fixed precedence and total (never failing) results ([`resolver`])
//! - **Queries**: key enumeration, categorized catalog views, and
//!   conjunctive multi-token search ([`query`])
//! - **Assets**: the embedded SVG contents by icon name ([`assets`])
//! - **Configuration**: the serde-friendly host toggle model ([`config`])
//!
//! The catalog itself (definitions, packs, clones, patterns, literal data)
//! lives in the `material-icons-catalog` crate and is re-exported here.
//! Resolution reads an immutable snapshot, so every function in this crate
//! is safe to call concurrently; hosts that rebuild the catalog swap the
//! snapshot atomically via [`catalog::replace`].
//!
//! # Example
//!
//! ```
//! use material_icons::{FileIconQuery, FolderIconQuery};
//!
//! let file = FileIconQuery::new().file_name("package.json").resolve();
//! assert_eq!(file, "nodejs");
//!
//! let folder = FolderIconQuery::new().folder_name("src").open(true).resolve();
//! assert_eq!(folder, "folder-src-open");
//! ```

pub mod assets;
pub mod config;
pub mod query;
pub mod resolver;

pub use material_icons_catalog::{Catalog, Error, Result, catalog};
pub use material_icons_catalog::model::{
    CloneSource, DefaultIcon, FileIcon, FileIconSet, FolderIcon, FolderTheme, FolderThemeName,
    IconBase, IconDef, IconPack, LanguageIcon,
};
pub use material_icons_catalog::patterns::{FileNamePattern, PatternExpansion};

pub use config::IconThemeConfig;
pub use query::{
    Category, IconCategory, IconInfo, all_file_icons, all_folder_icons, all_icons,
    all_icons_with_categories, all_language_icons, available_file_extensions,
    available_file_names, available_folder_names, available_language_ids, search_icons,
};
pub use resolver::{
    FileIconQuery, FolderIconQuery, LanguageIconQuery, resolve_file_icon, resolve_folder_icon,
    resolve_language_icon,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::IconThemeConfig;
    pub use crate::query::{Category, IconCategory, IconInfo, search_icons};
    pub use crate::resolver::{
        FileIconQuery, FolderIconQuery, LanguageIconQuery, resolve_file_icon, resolve_folder_icon,
        resolve_language_icon,
    };
    pub use material_icons_catalog::Catalog;
    pub use material_icons_catalog::model::{FolderThemeName, IconPack};
}
