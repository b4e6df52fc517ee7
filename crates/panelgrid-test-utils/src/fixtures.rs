//! Reusable grid configurations.
//!
//! - [`flat_config`]: a `rows x cols` grid of 10x10 panels at the origin.
//! - [`scenario_config`]: the 3x3 grid used by the reference scenarios.
//! - [`layered_config`]: a stack of layers, each shifted diagonally.

use panelgrid_space::{GridConfig, LayerOffset};

/// Asset key used by every fixture.
pub const PANEL_ASSET: &str = "panel";

/// A `rows x cols` grid of 10x10 panels, no gaps, origin (0, 0).
pub fn flat_config(rows: u32, cols: u32) -> GridConfig {
    GridConfig::new()
        .panel_size(10.0, 10.0)
        .extent(rows, cols)
        .grid_visual(PANEL_ASSET)
}

/// The 3x3 reference grid: panel (1, 1) sits at (10, 10).
pub fn scenario_config() -> GridConfig {
    flat_config(3, 3)
}

/// `depth` layers of `rows x cols` panels; layer `l` is shifted by
/// `(l * shift, l * shift)`.
pub fn layered_config(depth: u32, rows: u32, cols: u32, shift: f32) -> GridConfig {
    flat_config(rows, cols).layers((0..depth).map(|l| {
        let s = l as f32 * shift;
        LayerOffset::new(s, s)
    }))
}
