//! Grid configuration and validation.
//!
//! [`GridConfig`] is the builder input for a [`PanelLattice`](crate::PanelLattice).
//! [`resolve()`](GridConfig::resolve) checks every field eagerly and
//! produces the [`Layout`] the lattice is generated from.

use panelgrid_core::ConfigError;

use crate::layout::Layout;

/// Per-layer positional offset for layered grids.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerOffset {
    /// Horizontal shift applied to every panel of the layer.
    pub x: f32,
    /// Vertical shift applied to every panel of the layer.
    pub y: f32,
}

impl LayerOffset {
    /// Construct an offset.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for LayerOffset {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// ── GridConfig ─────────────────────────────────────────────────────

/// Construction input for a panel grid.
///
/// Required fields are `Option`s so that a missing value can be reported
/// by name. Everything else has a default.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Panel width. Required.
    pub width: Option<f32>,
    /// Panel height. Required.
    pub height: Option<f32>,
    /// Asset key used to create each panel's visual. Required.
    pub grid_visual: Option<String>,
    /// Number of rows. Required.
    pub row_amount: Option<u32>,
    /// Number of columns. Required.
    pub column_amount: Option<u32>,
    /// Panel opacity. Default: 1.0.
    pub alpha: f32,
    /// X coordinate of panel (0, 0). Default: 0.
    pub start_x: f32,
    /// Y coordinate of panel (0, 0). Default: 0.
    pub start_y: f32,
    /// Horizontal space between panels. Default: 0.
    pub x_gap: f32,
    /// Vertical space between panels. Default: 0.
    pub y_gap: f32,
    /// Number of stacked layers. Default: 1.
    pub depth: u32,
    /// One offset per layer. Required when `depth > 1`; may be empty for
    /// flat grids.
    pub layer_offsets: Vec<LayerOffset>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            grid_visual: None,
            row_amount: None,
            column_amount: None,
            alpha: 1.0,
            start_x: 0.0,
            start_y: 0.0,
            x_gap: 0.0,
            y_gap: 0.0,
            depth: 1,
            layer_offsets: Vec::new(),
        }
    }
}

impl GridConfig {
    /// An empty configuration; every required field still has to be set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the panel size.
    pub fn panel_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the grid extent.
    pub fn extent(mut self, rows: u32, cols: u32) -> Self {
        self.row_amount = Some(rows);
        self.column_amount = Some(cols);
        self
    }

    /// Set the asset key for panel visuals.
    pub fn grid_visual(mut self, asset: impl Into<String>) -> Self {
        self.grid_visual = Some(asset.into());
        self
    }

    /// Set the panel opacity.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the grid origin.
    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    /// Set the spacing between panels.
    pub fn gaps(mut self, x_gap: f32, y_gap: f32) -> Self {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
        self
    }

    /// Stack `offsets.len()` layers, each shifted by its offset.
    pub fn layers(mut self, offsets: impl IntoIterator<Item = LayerOffset>) -> Self {
        self.layer_offsets = offsets.into_iter().collect();
        self.depth = self.layer_offsets.len() as u32;
        self
    }

    /// Largest lattice `resolve` accepts, counted across all layers.
    pub const MAX_PANELS: usize = 1 << 24;

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate and resolve defaults into a [`Layout`].
    ///
    /// Required fields are checked in the order width, height,
    /// grid_visual, row_amount, column_amount.
    pub fn resolve(&self) -> Result<Layout, ConfigError> {
        let width = positive("width", self.width)?;
        let height = positive("height", self.height)?;
        let asset = self
            .grid_visual
            .clone()
            .ok_or(ConfigError::MissingField {
                name: "grid_visual",
            })?;
        let rows = nonzero("row_amount", self.row_amount)?;
        let cols = nonzero("column_amount", self.column_amount)?;

        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::InvalidAlpha { value: self.alpha });
        }
        finite("start_x", self.start_x)?;
        finite("start_y", self.start_y)?;
        finite("x_gap", self.x_gap)?;
        finite("y_gap", self.y_gap)?;

        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        let offsets = if self.depth == 1 && self.layer_offsets.is_empty() {
            vec![LayerOffset::default()]
        } else if self.layer_offsets.len() == self.depth as usize {
            self.layer_offsets.clone()
        } else {
            return Err(ConfigError::LayerOffsetMismatch {
                depth: self.depth,
                offsets: self.layer_offsets.len(),
            });
        };
        for offset in &offsets {
            finite("layer_offsets.x", offset.x)?;
            finite("layer_offsets.y", offset.y)?;
        }

        if width + self.x_gap <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "width + x_gap",
                value: f64::from(width + self.x_gap),
            });
        }
        if height + self.y_gap <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "height + y_gap",
                value: f64::from(height + self.y_gap),
            });
        }

        (self.depth as usize)
            .checked_mul(rows as usize)
            .and_then(|n| n.checked_mul(cols as usize))
            .filter(|&n| n <= Self::MAX_PANELS)
            .ok_or(ConfigError::PanelCountOverflow {
                depth: self.depth,
                rows,
                cols,
            })?;

        Ok(Layout {
            width,
            height,
            rows,
            cols,
            start_x: self.start_x,
            start_y: self.start_y,
            x_gap: self.x_gap,
            y_gap: self.y_gap,
            alpha: self.alpha,
            asset,
            offsets,
        })
    }
}

fn positive(name: &'static str, value: Option<f32>) -> Result<f32, ConfigError> {
    let v = value.ok_or(ConfigError::MissingField { name })?;
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::NonPositive {
            name,
            value: f64::from(v),
        });
    }
    Ok(v)
}

fn nonzero(name: &'static str, value: Option<u32>) -> Result<u32, ConfigError> {
    match value {
        None => Err(ConfigError::MissingField { name }),
        Some(0) => Err(ConfigError::NonPositive { name, value: 0.0 }),
        Some(v) => Ok(v),
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}
