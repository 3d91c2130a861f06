//! Clone directives.

/// A clone directive: reuse another icon's artwork under a different color.
///
/// A definition carrying a clone is a regular catalog entry; only its
/// artwork is borrowed from `base`. Clone resolution is one level deep:
/// the base must be a non-clone entry of the same category, which catalog
/// construction enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneSource {
    /// Name of the entry whose artwork is reused.
    pub base: String,
    /// Color applied to the cloned artwork.
    pub color: String,
    /// Color for the light variant. Only valid on a `light` definition.
    pub light_color: Option<String>,
}

impl CloneSource {
    /// Create a clone directive for `base` recolored with `color`.
    pub fn new(base: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            color: color.into(),
            light_color: None,
        }
    }

    /// Set the light variant color.
    pub fn with_light_color(mut self, color: impl Into<String>) -> Self {
        self.light_color = Some(color.into());
        self
    }
}
