//! Host-side icon theme configuration model.

use serde::{Deserialize, Serialize};

use material_icons_catalog::model::FolderThemeName;

/// Icon theme toggles owned by the host application.
///
/// This is only the model; storage and change propagation stay with the
/// host. Defaults mirror the stock configuration: the angular pack, dark
/// assets, the specific folder theme, and full opacity and saturation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconThemeConfig {
    /// Active icon pack; an empty string disables pack-gated entries.
    pub icon_pack: String,
    /// Prefer light asset variants where available.
    pub light: bool,
    /// Folder icon theme.
    pub folder_theme: FolderThemeName,
    /// Icon opacity in `[0, 1]`.
    pub opacity: f32,
    /// Icon saturation in `[0, 1]`.
    pub saturation: f32,
    /// Override color applied by the renderer.
    pub color: Option<String>,
}

impl Default for IconThemeConfig {
    fn default() -> Self {
        Self {
            icon_pack: "angular".to_string(),
            light: false,
            folder_theme: FolderThemeName::Specific,
            opacity: 1.0,
            saturation: 1.0,
            color: None,
        }
    }
}

impl IconThemeConfig {
    /// Set the opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Set the saturation, clamped to `[0, 1]`.
    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = saturation.clamp(0.0, 1.0);
    }

    /// Restore the stock configuration.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_configuration() {
        let config = IconThemeConfig::default();
        assert_eq!(config.icon_pack, "angular");
        assert!(!config.light);
        assert_eq!(config.folder_theme, FolderThemeName::Specific);
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.saturation, 1.0);
        assert_eq!(config.color, None);
    }

    #[test]
    fn setters_clamp_to_the_unit_interval() {
        let mut config = IconThemeConfig::default();
        config.set_opacity(1.8);
        config.set_saturation(-0.4);
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.saturation, 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut config = IconThemeConfig::default();
        config.icon_pack = "react".to_string();
        config.set_opacity(0.5);
        config.reset();
        assert_eq!(config, IconThemeConfig::default());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let mut config = IconThemeConfig::default();
        config.icon_pack = "vue_vuex".to_string();
        config.folder_theme = FolderThemeName::Classic;
        config.color = Some("#42a5f5".to_string());

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"classic\""));
        let parsed: IconThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: IconThemeConfig = serde_json::from_str("{\"icon_pack\":\"react\"}").unwrap();
        assert_eq!(parsed.icon_pack, "react");
        assert_eq!(parsed.folder_theme, FolderThemeName::Specific);
        assert_eq!(parsed.opacity, 1.0);
    }
}
