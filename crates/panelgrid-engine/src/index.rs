//! Sparse index of occupied panels.

use indexmap::IndexSet;
use panelgrid_core::PanelAxis;

/// The set of panels that currently hold at least one occupant.
///
/// Lets the update sweep visit O(occupied) panels instead of the whole
/// lattice. Marking a present key again is a no-op. Iteration order is
/// unspecified: removal swaps the last entry into the freed slot.
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    occupied: IndexSet<PanelAxis>,
}

impl OccupancyIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `axis` as occupied. Returns `true` if it was not already.
    pub fn mark(&mut self, axis: PanelAxis) -> bool {
        self.occupied.insert(axis)
    }

    /// Forget `axis`. Returns `true` if it was present.
    pub fn clear(&mut self, axis: PanelAxis) -> bool {
        self.occupied.swap_remove(&axis)
    }

    /// Whether `axis` is recorded as occupied.
    pub fn contains(&self, axis: PanelAxis) -> bool {
        self.occupied.contains(&axis)
    }

    /// Number of occupied panels.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Whether no panel is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Occupied panels, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = PanelAxis> + '_ {
        self.occupied.iter().copied()
    }

    /// Occupied panels of one layer, in unspecified order.
    pub fn iter_layer(&self, layer: u32) -> impl Iterator<Item = PanelAxis> + '_ {
        self.iter().filter(move |axis| axis.layer == layer)
    }
}
