use serde::{Deserialize, Serialize};

/// Geometry of the columnar layout, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between two depth levels.
    pub column_spacing: f64,
    /// Vertical distance consumed by each leaf.
    pub row_spacing: f64,
    /// Height of a rendered node, used to centre parents over their children.
    pub node_height: f64,
    /// Horizontal offset of the root column.
    pub margin_x: f64,
    /// Extra vertical space between two plans.
    pub band_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_spacing: 350.0,
            row_spacing: 120.0,
            node_height: 100.0,
            margin_x: 50.0,
            band_gap: 150.0,
        }
    }
}

/// How jump-to-node moves the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub zoom: f64,
    /// Length of the camera animation the surface should play.
    pub duration_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            duration_ms: 800,
        }
    }
}
