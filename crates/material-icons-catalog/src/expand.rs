//! Catalog build steps: pattern expansion and definition validation.
//!
//! These run exactly once, inside [`Catalog::build`](crate::Catalog::build).
//! Catalog data is trusted and fixed, so every failure here is fatal rather
//! than skipped.

use std::collections::HashMap;

use crate::model::{FileIcon, FolderIcon, IconDef, LanguageIcon};
use crate::{Error, Result};

/// Expand the declared patterns of a file icon into its match-key lists.
///
/// Expanded keys merge as a union: explicit keys keep their position and
/// duplicates are dropped, so declaration order never changes the result
/// set.
pub(crate) fn expand_file_icon(icon: &mut FileIcon) {
    for (key, pattern) in icon.patterns.clone() {
        let expansion = pattern.expand(&key);
        merge_unique(&mut icon.file_extensions, expansion.file_extensions);
        merge_unique(&mut icon.file_names, expansion.file_names);
    }
}

fn merge_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for value in extra {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

/// A file icon must end up with at least one extension or file name.
pub(crate) fn validate_file_icon(icon: &FileIcon) -> Result<()> {
    if icon.file_extensions.is_empty() && icon.file_names.is_empty() {
        return Err(Error::missing_match_keys("file", icon.name()));
    }
    Ok(())
}

/// A folder icon must carry at least one folder or root folder name.
pub(crate) fn validate_folder_icon(icon: &FolderIcon) -> Result<()> {
    if icon.folder_names.is_empty() && icon.root_folder_names.is_empty() {
        return Err(Error::missing_match_keys("folder", icon.name()));
    }
    Ok(())
}

/// A language icon must carry at least one language id.
pub(crate) fn validate_language_icon(icon: &LanguageIcon) -> Result<()> {
    if icon.ids.is_empty() {
        return Err(Error::missing_match_keys("language", icon.name()));
    }
    Ok(())
}

/// Validate every clone directive in one definition list.
///
/// Clone resolution is one level deep: the base must exist in the same list
/// and must not itself be a clone, which also rules out cycles. A light
/// clone color is only allowed on definitions flagged as light.
pub(crate) fn validate_clones<D: IconDef>(kind: &'static str, defs: &[D]) -> Result<()> {
    let mut is_clone_by_name: HashMap<&str, bool> = HashMap::with_capacity(defs.len());
    for def in defs {
        is_clone_by_name.insert(def.name(), def.base().clone.is_some());
    }

    for def in defs {
        let base = def.base();
        let Some(clone) = &base.clone else {
            continue;
        };
        if clone.light_color.is_some() && !base.light {
            return Err(Error::light_color_without_light(def.name()));
        }
        match is_clone_by_name.get(clone.base.as_str()) {
            None => {
                return Err(Error::unknown_clone_base(kind, def.name(), &clone.base));
            }
            Some(true) => {
                return Err(Error::chained_clone(kind, def.name(), &clone.base));
            }
            Some(false) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CloneSource;
    use crate::patterns::FileNamePattern;

    #[test]
    fn expansion_merges_with_explicit_keys_without_duplicates() {
        let mut icon = FileIcon::new("vite")
            .extensions(["ts"])
            .names(["vite.config.ts"])
            .pattern("vite", FileNamePattern::NodeEcosystem);
        expand_file_icon(&mut icon);

        assert_eq!(icon.file_extensions[0], "ts");
        assert_eq!(
            icon.file_extensions.iter().filter(|e| *e == "ts").count(),
            1
        );
        assert_eq!(icon.file_extensions.len(), 12);
        assert_eq!(icon.file_names, ["vite.config.ts"]);
    }

    #[test]
    fn expansion_result_is_independent_of_declaration_order() {
        let mut a = FileIcon::new("x")
            .pattern("x", FileNamePattern::Ecmascript)
            .pattern("x", FileNamePattern::Configuration);
        let mut b = FileIcon::new("x").pattern("x", FileNamePattern::NodeEcosystem);
        expand_file_icon(&mut a);
        expand_file_icon(&mut b);

        let mut lhs = a.file_extensions.clone();
        let mut rhs = b.file_extensions.clone();
        lhs.sort();
        rhs.sort();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn file_icon_without_keys_is_rejected() {
        let icon = FileIcon::new("empty");
        assert!(matches!(
            validate_file_icon(&icon),
            Err(Error::MissingMatchKeys { kind: "file", .. })
        ));
    }

    #[test]
    fn pattern_only_file_icon_is_accepted_after_expansion() {
        let mut icon = FileIcon::new("jest").pattern("jest", FileNamePattern::Cosmiconfig);
        expand_file_icon(&mut icon);
        assert!(validate_file_icon(&icon).is_ok());
    }

    #[test]
    fn clone_of_unknown_base_is_rejected() {
        let icons = vec![
            FileIcon::new("real").extensions(["r"]),
            FileIcon::new("copy")
                .extensions(["c"])
                .clone_of(CloneSource::new("ghost", "blue-400")),
        ];
        assert!(matches!(
            validate_clones("file", &icons),
            Err(Error::UnknownCloneBase { .. })
        ));
    }

    #[test]
    fn clone_of_a_clone_is_rejected() {
        let icons = vec![
            FileIcon::new("root").extensions(["r"]),
            FileIcon::new("first")
                .extensions(["f"])
                .clone_of(CloneSource::new("root", "blue-400")),
            FileIcon::new("second")
                .extensions(["s"])
                .clone_of(CloneSource::new("first", "green-400")),
        ];
        assert!(matches!(
            validate_clones("file", &icons),
            Err(Error::ChainedClone { .. })
        ));
    }

    #[test]
    fn self_clone_is_rejected() {
        let icons = vec![
            FileIcon::new("loop")
                .extensions(["l"])
                .clone_of(CloneSource::new("loop", "blue-400")),
        ];
        assert!(matches!(
            validate_clones("file", &icons),
            Err(Error::ChainedClone { .. })
        ));
    }

    #[test]
    fn light_clone_color_requires_the_light_flag() {
        let icons = vec![
            FileIcon::new("base").extensions(["b"]),
            FileIcon::new("dark-only")
                .extensions(["d"])
                .clone_of(CloneSource::new("base", "blue-400").with_light_color("blue-700")),
        ];
        assert!(matches!(
            validate_clones("file", &icons),
            Err(Error::LightColorWithoutLight { .. })
        ));

        let icons = vec![
            FileIcon::new("base").extensions(["b"]),
            FileIcon::new("lit")
                .extensions(["l"])
                .light()
                .clone_of(CloneSource::new("base", "blue-400").with_light_color("blue-700")),
        ];
        assert!(validate_clones("file", &icons).is_ok());
    }

    #[test]
    fn light_clone_without_light_color_is_accepted() {
        let icons = vec![
            FileIcon::new("base").extensions(["b"]),
            FileIcon::new("lit")
                .extensions(["l"])
                .light()
                .clone_of(CloneSource::new("base", "blue-400")),
        ];
        assert!(validate_clones("file", &icons).is_ok());
    }
}
