//! Declarative file name patterns.
//!
//! A pattern is a shorthand attached to a file icon definition that expands
//! into a fixed set of extensions and file names for the pattern key.
//! Expansion happens once, while the catalog is built, and the result is
//! merged into the definition's explicit match keys.

use crate::Error;

/// Extensions contributed by the ECMAScript pattern.
const ECMASCRIPT_EXTENSIONS: [&str; 6] = ["js", "mjs", "cjs", "ts", "mts", "cts"];

/// Extensions contributed by the configuration pattern.
const CONFIGURATION_EXTENSIONS: [&str; 6] = ["json", "jsonc", "json5", "yaml", "yml", "toml"];

/// Declarative shorthand expanding to fixed extension and file name matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileNamePattern {
    /// ECMAScript source extensions: `js`, `mjs`, `cjs`, `ts`, `mts`, `cts`.
    Ecmascript,
    /// Common configuration extensions: `json`, `jsonc`, `json5`, `yaml`,
    /// `yml`, `toml`.
    Configuration,
    /// Union of [`FileNamePattern::Ecmascript`] and
    /// [`FileNamePattern::Configuration`].
    NodeEcosystem,
    /// Cosmiconfig-style file names (`.{key}rc`, `.config/{key}rc`,
    /// `{key}.config`) plus the [`FileNamePattern::NodeEcosystem`]
    /// extensions.
    Cosmiconfig,
    /// YAML extensions: `yaml`, `yml`.
    Yaml,
    /// Dotfile names: `.{key}` and `{key}`.
    Dotfile,
}

/// Extensions and file names produced by expanding one pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternExpansion {
    /// Contributed extensions, without a leading dot.
    pub file_extensions: Vec<String>,
    /// Contributed exact file names.
    pub file_names: Vec<String>,
}

impl FileNamePattern {
    /// Stable string form used in external data.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileNamePattern::Ecmascript => "ecmascript",
            FileNamePattern::Configuration => "configuration",
            FileNamePattern::NodeEcosystem => "nodeEcosystem",
            FileNamePattern::Cosmiconfig => "cosmiconfig",
            FileNamePattern::Yaml => "yaml",
            FileNamePattern::Dotfile => "dotfile",
        }
    }

    /// Expand this pattern for `key`.
    ///
    /// Expansion is pure: the same pattern and key always produce the same
    /// lists in the same order.
    pub fn expand(&self, key: &str) -> PatternExpansion {
        let mut expansion = PatternExpansion::default();
        self.expand_into(key, &mut expansion);
        expansion
    }

    fn expand_into(&self, key: &str, out: &mut PatternExpansion) {
        match self {
            FileNamePattern::Ecmascript => {
                out.file_extensions
                    .extend(ECMASCRIPT_EXTENSIONS.map(str::to_string));
            }
            FileNamePattern::Configuration => {
                out.file_extensions
                    .extend(CONFIGURATION_EXTENSIONS.map(str::to_string));
            }
            FileNamePattern::NodeEcosystem => {
                FileNamePattern::Ecmascript.expand_into(key, out);
                FileNamePattern::Configuration.expand_into(key, out);
            }
            FileNamePattern::Cosmiconfig => {
                out.file_names.push(format!(".{key}rc"));
                out.file_names.push(format!(".config/{key}rc"));
                out.file_names.push(format!("{key}.config"));
                FileNamePattern::NodeEcosystem.expand_into(key, out);
            }
            FileNamePattern::Yaml => {
                out.file_extensions.push("yaml".to_string());
                out.file_extensions.push("yml".to_string());
            }
            FileNamePattern::Dotfile => {
                out.file_names.push(format!(".{key}"));
                out.file_names.push(key.to_string());
            }
        }
    }
}

impl std::str::FromStr for FileNamePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecmascript" => Ok(FileNamePattern::Ecmascript),
            "configuration" => Ok(FileNamePattern::Configuration),
            "nodeEcosystem" => Ok(FileNamePattern::NodeEcosystem),
            "cosmiconfig" => Ok(FileNamePattern::Cosmiconfig),
            "yaml" => Ok(FileNamePattern::Yaml),
            "dotfile" => Ok(FileNamePattern::Dotfile),
            _ => Err(Error::unknown_pattern(s)),
        }
    }
}

impl std::fmt::Display for FileNamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecmascript_adds_script_extensions() {
        let expansion = FileNamePattern::Ecmascript.expand("vite");
        assert_eq!(
            expansion.file_extensions,
            ["js", "mjs", "cjs", "ts", "mts", "cts"]
        );
        assert!(expansion.file_names.is_empty());
    }

    #[test]
    fn node_ecosystem_is_the_union_without_duplicates() {
        let expansion = FileNamePattern::NodeEcosystem.expand("vite");
        assert_eq!(
            expansion.file_extensions,
            [
                "js", "mjs", "cjs", "ts", "mts", "cts", "json", "jsonc", "json5", "yaml", "yml",
                "toml"
            ]
        );
        let mut deduped = expansion.file_extensions.clone();
        deduped.dedup();
        assert_eq!(deduped, expansion.file_extensions);
    }

    #[test]
    fn cosmiconfig_derives_names_from_the_key() {
        let expansion = FileNamePattern::Cosmiconfig.expand("prettier");
        assert_eq!(
            expansion.file_names,
            [".prettierrc", ".config/prettierrc", "prettier.config"]
        );
        assert_eq!(expansion.file_extensions.len(), 12);
    }

    #[test]
    fn dotfile_derives_both_forms() {
        let expansion = FileNamePattern::Dotfile.expand("gitignore");
        assert_eq!(expansion.file_names, [".gitignore", "gitignore"]);
        assert!(expansion.file_extensions.is_empty());
    }

    #[test]
    fn yaml_adds_both_extensions() {
        let expansion = FileNamePattern::Yaml.expand("ci");
        assert_eq!(expansion.file_extensions, ["yaml", "yml"]);
    }

    #[test]
    fn unknown_tag_is_a_fatal_parse_error() {
        assert!(matches!(
            "tomlEcosystem".parse::<FileNamePattern>(),
            Err(Error::UnknownPattern { .. })
        ));
    }

    #[test]
    fn tag_string_forms_round_trip() {
        for pattern in [
            FileNamePattern::Ecmascript,
            FileNamePattern::Configuration,
            FileNamePattern::NodeEcosystem,
            FileNamePattern::Cosmiconfig,
            FileNamePattern::Yaml,
            FileNamePattern::Dotfile,
        ] {
            assert_eq!(pattern.as_str().parse::<FileNamePattern>().unwrap(), pattern);
        }
    }
}
