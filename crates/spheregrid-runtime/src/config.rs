#![forbid(unsafe_code)]

//! Configuration as data.
//!
//! [`GridConfig`] gathers every tunable of the grid scene into one struct
//! that can be loaded from TOML or JSON at startup.
//!
//! ```toml
//! # spheregrid.toml
//! pool_size = 1000
//! active_spheres = 50
//! screen_percentage = 30.0
//! slider_panel_percentage = 70.0
//! sphere_panel_percentage = 30.0
//! lerp_duration_secs = 1.0
//! ```
//!
//! Missing keys fall back to [`GridConfig::default`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use spheregrid_layout::{DEFAULT_CELL_FACTOR, GridManager, PanelSizer};
use spheregrid_pool::DEFAULT_RESUME_FLOOR;

use crate::ConfigError;

/// Tunables for the grid scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of pooled items and controls. Fixed for the session.
    pub pool_size: usize,
    /// Items shown at startup.
    pub active_spheres: usize,
    /// Share of the viewport width reserved for the control panel (0..100).
    pub screen_percentage: f32,
    /// Share of the canvas cut from the control panel's right edge (0..100).
    pub slider_panel_percentage: f32,
    /// Share of the canvas cut from the grid panel's left edge (0..100).
    pub sphere_panel_percentage: f32,
    /// Length of a click-triggered opacity transition, in seconds.
    pub lerp_duration_secs: f32,
    /// Value written before fading in a zero-opacity item.
    pub resume_floor: f32,
    /// Column multiplier for the grid cell scale.
    pub cell_factor: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            pool_size: 1000,
            active_spheres: 50,
            screen_percentage: 30.0,
            slider_panel_percentage: 70.0,
            sphere_panel_percentage: 30.0,
            lerp_duration_secs: 1.0,
            resume_floor: DEFAULT_RESUME_FLOOR,
            cell_factor: DEFAULT_CELL_FACTOR,
        }
    }
}

impl GridConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from a `.toml` or `.json` file, chosen by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            other => Err(ConfigError::UnsupportedFormat {
                extension: other.unwrap_or_default().to_string(),
            }),
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid. `active_spheres` above `pool_size` is not an error: the
    /// request is ignored at runtime.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.pool_size == 0 {
            errors.push("pool_size must be > 0".into());
        }
        for (name, pct) in [
            ("screen_percentage", self.screen_percentage),
            ("slider_panel_percentage", self.slider_panel_percentage),
            ("sphere_panel_percentage", self.sphere_panel_percentage),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                errors.push(format!("{name} must be in [0, 100], got {pct}"));
            }
        }
        if !(self.lerp_duration_secs.is_finite() && self.lerp_duration_secs > 0.0) {
            errors.push(format!(
                "lerp_duration_secs must be > 0, got {}",
                self.lerp_duration_secs
            ));
        }
        if !(self.resume_floor > 0.0 && self.resume_floor < 0.5) {
            errors.push(format!(
                "resume_floor must be in (0, 0.5), got {}",
                self.resume_floor
            ));
        }
        if !(self.cell_factor.is_finite() && self.cell_factor > 0.0) {
            errors.push(format!("cell_factor must be > 0, got {}", self.cell_factor));
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Transition length. Saturates at [`Duration::MAX`] for values too large
    /// to represent and is zero for non-positive or NaN input.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        let secs = self.lerp_duration_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    }

    #[must_use]
    pub fn panel_sizer(&self) -> PanelSizer {
        PanelSizer::new(self.slider_panel_percentage, self.sphere_panel_percentage)
    }

    #[must_use]
    pub fn grid_manager(&self) -> GridManager {
        GridManager::new(self.screen_percentage, self.cell_factor)
    }
}
