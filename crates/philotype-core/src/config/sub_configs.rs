//! Sub-configuration structures for the philotype engine.
//!
//! This module contains the individual configuration structs that make up
//! the main `Config` structure.

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_NEIGHBOR_RADIUS, DEFAULT_RADII};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            include_location: false,
        }
    }
}

/// Engine configuration.
///
/// Callers that do not override anything get the fixed radius set the
/// statistics endpoints have always used.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Radii used by the neighbor distribution, in report order.
    #[serde(default = "default_radii")]
    pub radii: Vec<f64>,

    /// Radius used when a caller asks for a single neighbor count without
    /// specifying one.
    #[serde(default = "default_neighbor_radius")]
    pub default_radius: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            radii: default_radii(),
            default_radius: default_neighbor_radius(),
        }
    }
}

fn default_radii() -> Vec<f64> {
    DEFAULT_RADII.to_vec()
}

fn default_neighbor_radius() -> f64 {
    DEFAULT_NEIGHBOR_RADIUS
}
