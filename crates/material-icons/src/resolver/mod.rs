//! Icon resolution engine.
//!
//! Three independent entry points — file, folder, and language — each a
//! pure function of (query, catalog snapshot, active pack). Every query
//! resolves to a `String` icon name; a miss yields the query's fallback,
//! never an error. File resolution runs an explicit, ordered strategy list
//! so the precedence is documented and testable in isolation rather than
//! implied by code layout.
//!
//! All lookups are exact string matches against the catalog's match keys.
//! The only normalization applied anywhere is stripping one leading `.`
//! from a queried file extension.

mod file;
mod folder;
mod language;

pub use file::{FileIconQuery, resolve_file_icon};
pub use folder::{FolderIconQuery, resolve_folder_icon};
pub use language::{LanguageIconQuery, resolve_language_icon};

use material_icons_catalog::Catalog;
use material_icons_catalog::model::{FileIcon, FolderIcon, FolderThemeName, IconDef, LanguageIcon};

/// Icon name returned when a file or language query matches nothing and the
/// caller supplied no fallback.
pub const DEFAULT_FILE_ICON: &str = "file";

/// Icon name of the generic closed folder.
pub const DEFAULT_FOLDER_ICON: &str = "folder";

/// Icon name of the generic closed workspace root folder.
pub const DEFAULT_ROOT_FOLDER_ICON: &str = "folder-root";

/// First pack-eligible language entry containing `language_id`.
pub(crate) fn find_language_icon<'a>(
    catalog: &'a Catalog,
    language_id: &str,
    pack: &str,
) -> Option<&'a LanguageIcon> {
    catalog
        .language_icons()
        .iter()
        .find(|icon| icon.eligible_for(pack) && icon.ids.iter().any(|id| id == language_id))
}

/// First pack-eligible file entry whose `file_names` contains `file_name`.
pub(crate) fn find_file_icon_by_name<'a>(
    catalog: &'a Catalog,
    file_name: &str,
    pack: &str,
) -> Option<&'a FileIcon> {
    catalog
        .file_icons()
        .icons
        .iter()
        .find(|icon| icon.eligible_for(pack) && icon.file_names.iter().any(|name| name == file_name))
}

/// First pack-eligible file entry whose `file_extensions` contains the
/// queried extension, with one leading dot stripped.
pub(crate) fn find_file_icon_by_extension<'a>(
    catalog: &'a Catalog,
    extension: &str,
    pack: &str,
) -> Option<&'a FileIcon> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    catalog.file_icons().icons.iter().find(|icon| {
        icon.eligible_for(pack) && icon.file_extensions.iter().any(|ext| ext == extension)
    })
}

/// First enabled entry of the specific folder theme matching `folder_name`.
///
/// For workspace roots, an entry declaring root folder names is matched
/// against those alone; entries without root names still match by their
/// plain folder names. Folder matching never consults the active pack.
pub(crate) fn find_folder_icon<'a>(
    catalog: &'a Catalog,
    folder_name: &str,
    is_root: bool,
) -> Option<&'a FolderIcon> {
    let theme = catalog.folder_theme(FolderThemeName::Specific)?;
    theme.icons.iter().find(|icon| {
        if icon.is_disabled() {
            return false;
        }
        if is_root && !icon.root_folder_names.is_empty() {
            return icon.root_folder_names.iter().any(|name| name == folder_name);
        }
        icon.folder_names.iter().any(|name| name == folder_name)
    })
}
