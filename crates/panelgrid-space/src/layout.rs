//! Resolved grid geometry: position arithmetic, indexing, and hit testing.

use panelgrid_core::PanelAxis;

use crate::config::LayerOffset;

/// A validated grid geometry, produced by
/// [`GridConfig::resolve`](crate::GridConfig::resolve).
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Panel width.
    pub width: f32,
    /// Panel height.
    pub height: f32,
    /// Rows per layer.
    pub rows: u32,
    /// Columns per row.
    pub cols: u32,
    /// X coordinate of panel (0, 0).
    pub start_x: f32,
    /// Y coordinate of panel (0, 0).
    pub start_y: f32,
    /// Horizontal space between panels.
    pub x_gap: f32,
    /// Vertical space between panels.
    pub y_gap: f32,
    /// Panel opacity.
    pub alpha: f32,
    /// Asset key for panel visuals.
    pub asset: String,
    /// One offset per layer; its length is the depth.
    pub offsets: Vec<LayerOffset>,
}

impl Layout {
    /// Number of layers.
    pub fn depth(&self) -> u32 {
        self.offsets.len() as u32
    }

    /// Panels per layer.
    pub fn layer_len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Panels across all layers.
    pub fn panel_count(&self) -> usize {
        self.layer_len() * self.offsets.len()
    }

    /// Whether `axis` names a panel of this geometry.
    pub fn contains(&self, axis: PanelAxis) -> bool {
        axis.layer < self.depth() && axis.row < self.rows && axis.col < self.cols
    }

    /// Row-major index of `(row, col)` within its layer.
    pub fn flat_index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }

    /// World position of a panel.
    ///
    /// `x = start_x + offset.x + c * x_gap + c * width`, and likewise for y.
    /// The terms are summed in exactly this order.
    pub fn panel_position(&self, axis: PanelAxis) -> (f32, f32) {
        let offset = self
            .offsets
            .get(axis.layer as usize)
            .copied()
            .unwrap_or_default();
        let c = axis.col as f32;
        let r = axis.row as f32;
        let x = self.start_x + offset.x + c * self.x_gap + c * self.width;
        let y = self.start_y + offset.y + r * self.y_gap + r * self.height;
        (x, y)
    }

    /// All axes in canonical order: layer, then row, then column.
    pub fn canonical_ordering(&self) -> Vec<PanelAxis> {
        let mut out = Vec::with_capacity(self.panel_count());
        for layer in 0..self.depth() {
            for row in 0..self.rows {
                for col in 0..self.cols {
                    out.push(PanelAxis::new(layer, row, col));
                }
            }
        }
        out
    }

    /// Find the panel whose rectangle contains the world point `(x, y)`.
    ///
    /// Panel visuals are anchored at their centre, so a panel positioned at
    /// `(px, py)` covers `[px - w/2, px + w/2) x [py - h/2, py + h/2)`.
    /// Points in the gaps between panels hit nothing.
    pub fn axis_at_point(&self, layer: u32, x: f32, y: f32) -> Option<PanelAxis> {
        let offset = self.offsets.get(layer as usize)?;
        let col = cell_along(
            x - self.start_x - offset.x + self.width / 2.0,
            self.width,
            self.x_gap,
            self.cols,
        )?;
        let row = cell_along(
            y - self.start_y - offset.y + self.height / 2.0,
            self.height,
            self.y_gap,
            self.rows,
        )?;
        Some(PanelAxis::new(layer, row, col))
    }
}

/// Index of the cell covering `local` on one axis, or `None` if the point
/// falls before the first cell, past the last, or inside a gap.
fn cell_along(local: f32, size: f32, gap: f32, count: u32) -> Option<u32> {
    if !local.is_finite() || local < 0.0 {
        return None;
    }
    let pitch = size + gap;
    if pitch <= 0.0 {
        return None;
    }
    let index = (local / pitch).floor();
    if index >= count as f32 {
        return None;
    }
    if local - index * pitch >= size {
        return None;
    }
    Some(index as u32)
}
