//! Configuration for the layout engine
//!
//! Two built-in presets (desktop and mobile) cover the device classes the
//! presentation layer distinguishes; a TOML layout profile can override
//! individual constants. The constants change pixel scale only, never the
//! shape of the placement algorithm.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a layout profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Spacing and sizing constants for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Node box width
    pub node_width: f64,
    /// Node box height
    pub node_height: f64,
    /// Horizontal step between family units and between slot probes
    pub horizontal_spacing: f64,
    /// Vertical gap between a parent row and its children row
    pub vertical_spacing: f64,
    /// Horizontal step between partners inside one family unit
    pub partner_spacing: f64,
    /// Minimum clearance kept around every placed node
    pub collision_margin: f64,
    /// Pixels per AM year when deriving a row from a birth year
    pub chronology_scale: f64,
    /// Row used for people with no birth year and no placed parent
    pub fallback_row_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl LayoutConfig {
    /// Desktop preset
    pub fn desktop() -> Self {
        Self {
            node_width: 150.0,
            node_height: 100.0,
            horizontal_spacing: 180.0,
            vertical_spacing: 120.0,
            partner_spacing: 170.0,
            collision_margin: 15.0,
            chronology_scale: 0.5,
            fallback_row_y: 0.0,
        }
    }

    /// Mobile preset: tighter boxes and spacing for narrow viewports
    pub fn mobile() -> Self {
        Self {
            node_width: 120.0,
            node_height: 90.0,
            horizontal_spacing: 140.0,
            vertical_spacing: 110.0,
            partner_spacing: 135.0,
            collision_margin: 12.0,
            chronology_scale: 0.5,
            fallback_row_y: 0.0,
        }
    }

    /// Preset for a device class
    pub fn for_device(is_mobile: bool) -> Self {
        if is_mobile {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    /// Set the node box size
    pub fn with_node_size(mut self, width: f64, height: f64) -> Self {
        self.node_width = width;
        self.node_height = height;
        self
    }

    /// Set the horizontal and vertical spacing
    pub fn with_spacing(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    /// Set the partner spacing inside a family unit
    pub fn with_partner_spacing(mut self, spacing: f64) -> Self {
        self.partner_spacing = spacing;
        self
    }

    /// Set the collision margin
    pub fn with_collision_margin(mut self, margin: f64) -> Self {
        self.collision_margin = margin;
        self
    }

    /// Set the chronology scale (pixels per AM year)
    pub fn with_chronology_scale(mut self, scale: f64) -> Self {
        self.chronology_scale = scale;
        self
    }
}

/// Partial constant overrides loaded from a TOML profile file.
///
/// Every key is optional; unset keys keep the base preset's value.
///
/// ```toml
/// node-width = 180
/// partner-spacing = 200
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LayoutProfile {
    pub node_width: Option<f64>,
    pub node_height: Option<f64>,
    pub horizontal_spacing: Option<f64>,
    pub vertical_spacing: Option<f64>,
    pub partner_spacing: Option<f64>,
    pub collision_margin: Option<f64>,
    pub chronology_scale: Option<f64>,
    pub fallback_row_y: Option<f64>,
}

impl LayoutProfile {
    /// Parse a profile from TOML source
    pub fn from_toml(source: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Apply the overrides to a base configuration
    pub fn apply(&self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            node_width: self.node_width.unwrap_or(base.node_width),
            node_height: self.node_height.unwrap_or(base.node_height),
            horizontal_spacing: self.horizontal_spacing.unwrap_or(base.horizontal_spacing),
            vertical_spacing: self.vertical_spacing.unwrap_or(base.vertical_spacing),
            partner_spacing: self.partner_spacing.unwrap_or(base.partner_spacing),
            collision_margin: self.collision_margin.unwrap_or(base.collision_margin),
            chronology_scale: self.chronology_scale.unwrap_or(base.chronology_scale),
            fallback_row_y: self.fallback_row_y.unwrap_or(base.fallback_row_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_desktop() {
        assert_eq!(LayoutConfig::default(), LayoutConfig::desktop());
    }

    #[test]
    fn test_mobile_preset_is_tighter() {
        let desktop = LayoutConfig::desktop();
        let mobile = LayoutConfig::mobile();
        assert!(mobile.node_width < desktop.node_width);
        assert!(mobile.horizontal_spacing < desktop.horizontal_spacing);
        assert!(mobile.vertical_spacing < desktop.vertical_spacing);
    }

    #[test]
    fn test_for_device() {
        assert_eq!(LayoutConfig::for_device(true), LayoutConfig::mobile());
        assert_eq!(LayoutConfig::for_device(false), LayoutConfig::desktop());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::desktop()
            .with_node_size(200.0, 80.0)
            .with_spacing(220.0, 140.0)
            .with_partner_spacing(210.0);

        assert_eq!(config.node_width, 200.0);
        assert_eq!(config.node_height, 80.0);
        assert_eq!(config.horizontal_spacing, 220.0);
        assert_eq!(config.vertical_spacing, 140.0);
        assert_eq!(config.partner_spacing, 210.0);
    }

    #[test]
    fn test_profile_overrides_subset() {
        let profile = LayoutProfile::from_toml(
            r#"
            node-width = 180
            collision-margin = 20
            "#,
        )
        .unwrap();

        let config = profile.apply(LayoutConfig::desktop());
        assert_eq!(config.node_width, 180.0);
        assert_eq!(config.collision_margin, 20.0);
        // Untouched keys keep the preset value
        assert_eq!(config.node_height, LayoutConfig::desktop().node_height);
    }

    #[test]
    fn test_profile_invalid_toml() {
        assert!(matches!(
            LayoutProfile::from_toml("node-width = ["),
            Err(ProfileError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_profile_is_identity() {
        let config = LayoutProfile::default().apply(LayoutConfig::mobile());
        assert_eq!(config, LayoutConfig::mobile());
    }
}
