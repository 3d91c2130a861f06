//! Icon definition model and the built-in Material icon catalog.
//!
//! This crate owns everything that exists *before* a resolution query runs:
//!
//! - **Model**: clonable icon definitions for files, folders, and languages,
//!   with pack gating, light/high-contrast variant flags, and clone
//!   directives ([`model`])
//! - **Patterns**: declarative shorthand expanding to fixed extension and
//!   file name sets ([`patterns`])
//! - **Data**: the literal built-in catalog tables ([`data`])
//! - **Catalog**: one-time build with pattern/clone expansion and
//!   validation, plus the global snapshot with atomic replacement
//!   ([`catalog`])
//!
//! Catalog data is trusted and fixed, so validation failures are fatal at
//! build time; resolution itself (in the `material-icons` crate) never
//! fails.
//!
//! # Example
//!
//! ```
//! use material_icons_catalog::Catalog;
//! use material_icons_catalog::model::{DefaultIcon, FileIcon, FileIconSet};
//! use material_icons_catalog::patterns::FileNamePattern;
//!
//! let catalog = Catalog::build(
//!     FileIconSet {
//!         default_icon: DefaultIcon::new("file"),
//!         icons: vec![
//!             FileIcon::new("prettier").pattern("prettier", FileNamePattern::Cosmiconfig),
//!         ],
//!     },
//!     Vec::new(),
//!     Vec::new(),
//! )?;
//!
//! let prettier = &catalog.file_icons().icons[0];
//! assert!(prettier.file_names.contains(&".prettierrc".to_string()));
//! # Ok::<(), material_icons_catalog::Error>(())
//! ```

pub mod catalog;
pub mod data;
pub mod model;
pub mod patterns;

mod error;
mod expand;

pub use catalog::Catalog;
pub use error::{Error, Result};
