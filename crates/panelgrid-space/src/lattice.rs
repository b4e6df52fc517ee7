//! The panel lattice: generation, neighbour linking, and lookup.

use std::fmt;

use panelgrid_core::{ConfigError, Direction, PanelAxis, VisualProps, VisualSurface};

use crate::config::GridConfig;
use crate::layout::Layout;
use crate::panel::Panel;

/// A depth-stacked set of row-major panel matrices.
///
/// Built once from a [`GridConfig`]; the set of panels and their
/// neighbour links never change afterwards. Flat grids are lattices of
/// depth 1.
#[derive(Clone, Debug)]
pub struct PanelLattice {
    layout: Layout,
    /// One row-major `Vec` per layer.
    layers: Vec<Vec<Panel>>,
}

impl PanelLattice {
    /// Validate `config`, create every panel and its visual, and link
    /// neighbours.
    ///
    /// Fails without creating any visual if the configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgrid_core::{Direction, HeadlessSurface, PanelAxis};
    /// use panelgrid_space::{GridConfig, PanelLattice};
    ///
    /// let config = GridConfig::new()
    ///     .panel_size(10.0, 10.0)
    ///     .extent(3, 3)
    ///     .grid_visual("panel");
    /// let lattice = PanelLattice::build(&config, &mut HeadlessSurface::new()).unwrap();
    /// assert_eq!(lattice.panel_count(), 9);
    ///
    /// let centre = lattice.panel(PanelAxis::flat(1, 1)).unwrap();
    /// assert_eq!(centre.position(), (10.0, 10.0));
    /// assert_eq!(centre.neighbours().count(), 4);
    /// ```
    pub fn build(
        config: &GridConfig,
        surface: &mut dyn VisualSurface,
    ) -> Result<Self, ConfigError> {
        let layout = config.resolve()?;
        let layers = generate_panels(&layout, surface);
        let mut lattice = Self { layout, layers };
        lattice.link_neighbours();
        tracing::info!(
            depth = lattice.depth(),
            rows = lattice.rows(),
            cols = lattice.cols(),
            panels = lattice.panel_count(),
            "panel lattice built"
        );
        Ok(lattice)
    }

    /// Link every panel to its up/down/left/right neighbour within its
    /// own layer. Edge panels get `None` on their outward sides.
    fn link_neighbours(&mut self) {
        let rows = self.layout.rows;
        let cols = self.layout.cols;
        for (layer_index, layer) in self.layers.iter_mut().enumerate() {
            let l = layer_index as u32;
            for row in 0..rows {
                for col in 0..cols {
                    let up = (row > 0).then(|| PanelAxis::new(l, row - 1, col));
                    let down = (row + 1 < rows).then(|| PanelAxis::new(l, row + 1, col));
                    let left = (col > 0).then(|| PanelAxis::new(l, row, col - 1));
                    let right = (col + 1 < cols).then(|| PanelAxis::new(l, row, col + 1));

                    let panel = &mut layer[(row as usize) * (cols as usize) + (col as usize)];
                    panel.link(Direction::Up, up);
                    panel.link(Direction::Down, down);
                    panel.link(Direction::Left, left);
                    panel.link(Direction::Right, right);
                }
            }
        }
    }

    /// The resolved geometry.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of layers.
    pub fn depth(&self) -> u32 {
        self.layout.depth()
    }

    /// Rows per layer.
    pub fn rows(&self) -> u32 {
        self.layout.rows
    }

    /// Columns per row.
    pub fn cols(&self) -> u32 {
        self.layout.cols
    }

    /// Total number of panels across all layers.
    pub fn panel_count(&self) -> usize {
        self.layout.panel_count()
    }

    /// Whether `axis` names a panel of this lattice.
    pub fn contains(&self, axis: PanelAxis) -> bool {
        self.layout.contains(axis)
    }

    /// Look up a panel by axis.
    pub fn panel(&self, axis: PanelAxis) -> Option<&Panel> {
        if !self.contains(axis) {
            return None;
        }
        let i = self.layout.flat_index(axis.row, axis.col);
        self.layers.get(axis.layer as usize)?.get(i)
    }

    /// Mutable lookup by axis.
    pub fn panel_mut(&mut self, axis: PanelAxis) -> Option<&mut Panel> {
        if !self.contains(axis) {
            return None;
        }
        let i = self.layout.flat_index(axis.row, axis.col);
        self.layers.get_mut(axis.layer as usize)?.get_mut(i)
    }

    /// Look up a panel by its three coordinates.
    pub fn panel_at(&self, layer: u32, row: u32, col: u32) -> Option<&Panel> {
        self.panel(PanelAxis::new(layer, row, col))
    }

    /// The neighbour of `axis` in `direction`, if both exist.
    pub fn neighbour(&self, axis: PanelAxis, direction: Direction) -> Option<PanelAxis> {
        self.panel(axis)?.neighbour(direction)
    }

    /// Every panel in canonical order (layer, row, column).
    pub fn iter(&self) -> impl Iterator<Item = &Panel> + '_ {
        self.layers.iter().flatten()
    }

    /// The panels of one layer in row-major order; empty if the layer
    /// does not exist.
    pub fn layer(&self, layer: u32) -> impl Iterator<Item = &Panel> + '_ {
        self.layers
            .get(layer as usize)
            .into_iter()
            .flat_map(|l| l.iter())
    }

    /// The panel under world point `(x, y)` on `layer`, if any.
    pub fn panel_at_point(&self, layer: u32, x: f32, y: f32) -> Option<&Panel> {
        self.panel(self.layout.axis_at_point(layer, x, y)?)
    }

    /// Describe a panel and its four neighbours for debugging.
    pub fn neighbour_dump(&self, axis: PanelAxis) -> Option<NeighbourDump> {
        let panel = self.panel(axis)?;
        let entries = Direction::ALL.map(|d| {
            let entry = panel
                .neighbour(d)
                .and_then(|n| self.panel(n))
                .map(|n| (n.axis(), n.position()));
            (d, entry)
        });
        Some(NeighbourDump {
            axis,
            position: panel.position(),
            entries,
        })
    }

    /// Release every panel visual through `surface`.
    ///
    /// Called when the grid is torn down. Panels keep their other state;
    /// calling this twice releases nothing the second time.
    pub fn release_visuals(&mut self, surface: &mut dyn VisualSurface) -> usize {
        let mut released = 0;
        for panel in self.layers.iter_mut().flatten() {
            if let Some(visual) = panel.take_visual() {
                surface.destroy_visual(visual);
                released += 1;
            }
        }
        released
    }

    /// Empty every panel's occupant list. Returns the number of entries
    /// dropped.
    pub fn clear_occupants(&mut self) -> usize {
        self.layers
            .iter_mut()
            .flatten()
            .map(Panel::clear_occupants)
            .sum()
    }
}

/// Create every panel of every layer, in canonical order, with its visual.
fn generate_panels(layout: &Layout, surface: &mut dyn VisualSurface) -> Vec<Vec<Panel>> {
    let props = VisualProps {
        width: layout.width,
        height: layout.height,
        alpha: layout.alpha,
        anchor: (0.5, 0.5),
        visible: false,
    };
    let mut layers = Vec::with_capacity(layout.depth() as usize);
    for layer in 0..layout.depth() {
        let mut panels = Vec::with_capacity(layout.layer_len());
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                let axis = PanelAxis::new(layer, row, col);
                let (x, y) = layout.panel_position(axis);
                let visual = surface.create_visual(x, y, &layout.asset);
                surface.configure_visual(visual, &props);
                panels.push(Panel::new(axis, (x, y), Some(visual)));
            }
        }
        layers.push(panels);
    }
    layers
}

// ── NeighbourDump ──────────────────────────────────────────────────

/// A panel and its four neighbours, for logging.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighbourDump {
    /// The panel being described.
    pub axis: PanelAxis,
    /// Its world position.
    pub position: (f32, f32),
    /// Each direction with the neighbour's axis and position, if present.
    pub entries: [(Direction, Option<(PanelAxis, (f32, f32))>); 4],
}

impl fmt::Display for NeighbourDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "panel {} at ({}, {})",
            self.axis, self.position.0, self.position.1
        )?;
        for (direction, entry) in &self.entries {
            match entry {
                Some((axis, (x, y))) => writeln!(f, "  {direction}: {axis} at ({x}, {y})")?,
                None => writeln!(f, "  {direction}: none")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayerOffset;
    use panelgrid_core::{HeadlessSurface, OccupantId};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn build(config: GridConfig) -> PanelLattice {
        PanelLattice::build(&config, &mut HeadlessSurface::new()).unwrap()
    }

    fn flat(rows: u32, cols: u32) -> PanelLattice {
        build(
            GridConfig::new()
                .panel_size(10.0, 10.0)
                .extent(rows, cols)
                .grid_visual("panel"),
        )
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn three_by_three_positions_and_edges() {
        let g = flat(3, 3);
        let centre = g.panel_at(0, 1, 1).unwrap();
        assert_eq!(centre.position(), (10.0, 10.0));

        let corner = g.panel_at(0, 0, 0).unwrap();
        assert_eq!(corner.neighbour(Direction::Up), None);
        assert_eq!(corner.neighbour(Direction::Left), None);
        assert_eq!(corner.neighbour(Direction::Right), Some(PanelAxis::flat(0, 1)));
        assert_eq!(corner.neighbour(Direction::Down), Some(PanelAxis::flat(1, 0)));
    }

    #[test]
    fn invalid_config_creates_no_visuals() {
        let mut surface = HeadlessSurface::new();
        let err = PanelLattice::build(&GridConfig::new().extent(2, 2), &mut surface);
        assert!(matches!(err, Err(ConfigError::MissingField { name: "width" })));
        assert_eq!(surface.live_visuals(), 0);
    }

    #[test]
    fn each_panel_gets_its_own_visual() {
        let mut surface = HeadlessSurface::new();
        let g = PanelLattice::build(
            &GridConfig::new()
                .panel_size(4.0, 4.0)
                .extent(2, 5)
                .grid_visual("panel"),
            &mut surface,
        )
        .unwrap();
        assert_eq!(surface.live_visuals(), 10);
        let visuals: HashSet<_> = g.iter().filter_map(|p| p.visual()).collect();
        assert_eq!(visuals.len(), 10);
    }

    #[test]
    fn layers_are_offset_and_never_linked() {
        let g = build(
            GridConfig::new()
                .panel_size(10.0, 10.0)
                .extent(2, 2)
                .grid_visual("panel")
                .layers([LayerOffset::new(0.0, 0.0), LayerOffset::new(5.0, 5.0)]),
        );
        assert_eq!(g.panel_count(), 8);
        assert_eq!(g.panel_at(1, 0, 0).unwrap().position(), (5.0, 5.0));
        for panel in g.iter() {
            for (_, n) in panel.neighbours().iter() {
                assert_eq!(n.layer, panel.axis().layer);
            }
        }
        assert_eq!(g.layer(1).count(), 4);
        assert_eq!(g.layer(2).count(), 0);
    }

    #[test]
    fn single_panel_has_no_neighbours() {
        let g = flat(1, 1);
        assert_eq!(g.panel_at(0, 0, 0).unwrap().neighbours().count(), 0);
    }

    #[test]
    fn lookup_outside_the_lattice_is_none() {
        let g = flat(2, 2);
        assert!(g.panel_at(0, 2, 0).is_none());
        assert!(g.panel_at(0, 0, 2).is_none());
        assert!(g.panel_at(1, 0, 0).is_none());
        assert!(g.neighbour(PanelAxis::flat(5, 5), Direction::Up).is_none());
    }

    #[test]
    fn build_is_deterministic() {
        let a = flat(4, 3);
        let b = flat(4, 3);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.axis(), pb.axis());
            assert_eq!(pa.position(), pb.position());
            assert_eq!(pa.neighbours(), pb.neighbours());
        }
    }

    // ── Debug dump ──────────────────────────────────────────────

    #[test]
    fn neighbour_dump_lists_all_four_directions() {
        let g = flat(3, 3);
        let dump = g.neighbour_dump(PanelAxis::flat(0, 1)).unwrap();
        let text = dump.to_string();
        assert!(text.starts_with("panel L0:R0:C1 at (10, 0)"));
        assert!(text.contains("up: none"));
        assert!(text.contains("down: L0:R1:C1 at (10, 10)"));
        assert!(text.contains("left: L0:R0:C0 at (0, 0)"));
        assert!(text.contains("right: L0:R0:C2 at (20, 0)"));
        assert!(g.neighbour_dump(PanelAxis::flat(9, 9)).is_none());
    }

    // ── Teardown ────────────────────────────────────────────────

    #[test]
    fn release_visuals_is_idempotent() {
        let mut surface = HeadlessSurface::new();
        let config = GridConfig::new()
            .panel_size(1.0, 1.0)
            .extent(3, 2)
            .grid_visual("panel");
        let mut g = PanelLattice::build(&config, &mut surface).unwrap();
        assert_eq!(g.release_visuals(&mut surface), 6);
        assert_eq!(surface.live_visuals(), 0);
        assert_eq!(g.release_visuals(&mut surface), 0);
    }

    #[test]
    fn clear_occupants_empties_every_layer() {
        let mut g = build(
            GridConfig::new()
                .panel_size(1.0, 1.0)
                .extent(2, 2)
                .grid_visual("panel")
                .layers([LayerOffset::default(), LayerOffset::new(1.0, 1.0)]),
        );
        for axis in [PanelAxis::new(0, 0, 0), PanelAxis::new(1, 1, 1), PanelAxis::new(1, 1, 1)] {
            if let Some(panel) = g.panel_mut(axis) {
                panel.push_occupant(OccupantId(7));
            }
        }
        assert_eq!(g.clear_occupants(), 3);
        assert!(g.iter().all(Panel::is_empty));
        assert_eq!(g.clear_occupants(), 0);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn panel_count_and_unique_axes(rows in 1u32..8, cols in 1u32..8, depth in 1u32..4) {
            let g = build(
                GridConfig::new()
                    .panel_size(3.0, 2.0)
                    .extent(rows, cols)
                    .grid_visual("panel")
                    .layers((0..depth).map(|l| LayerOffset::new(l as f32, 0.0))),
            );
            prop_assert_eq!(g.panel_count(), (rows * cols * depth) as usize);
            prop_assert_eq!(g.iter().count(), g.panel_count());
            let axes: HashSet<_> = g.iter().map(|p| p.axis()).collect();
            prop_assert_eq!(axes.len(), g.panel_count());
        }

        #[test]
        fn neighbours_are_symmetric_and_adjacent(rows in 1u32..8, cols in 1u32..8, depth in 1u32..4) {
            let g = build(
                GridConfig::new()
                    .panel_size(3.0, 2.0)
                    .extent(rows, cols)
                    .grid_visual("panel")
                    .layers((0..depth).map(|l| LayerOffset::new(l as f32 * 2.0, l as f32))),
            );
            for panel in g.iter() {
                let a = panel.axis();
                let inward = usize::from(a.row > 0)
                    + usize::from(a.row + 1 < rows)
                    + usize::from(a.col > 0)
                    + usize::from(a.col + 1 < cols);
                prop_assert_eq!(panel.neighbours().count(), inward);
                for (d, n) in panel.neighbours().iter() {
                    let back = g.panel(n).and_then(|p| p.neighbour(d.opposite()));
                    prop_assert_eq!(back, Some(panel.axis()));
                    prop_assert_eq!(n.layer, a.layer);
                    let manhattan = a.row.abs_diff(n.row) + a.col.abs_diff(n.col);
                    prop_assert_eq!(manhattan, 1);
                }
            }
        }

        #[test]
        fn hit_test_finds_each_panel_centre(rows in 1u32..6, cols in 1u32..6, gap in 0.0f32..5.0) {
            let g = build(
                GridConfig::new()
                    .panel_size(8.0, 6.0)
                    .extent(rows, cols)
                    .grid_visual("panel")
                    .gaps(gap, gap),
            );
            for panel in g.iter() {
                let (x, y) = panel.position();
                let hit = g.panel_at_point(0, x, y).map(|p| p.axis());
                prop_assert_eq!(hit, Some(panel.axis()));
            }
        }
    }
}
