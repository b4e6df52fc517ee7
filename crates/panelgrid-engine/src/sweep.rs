//! The per-frame update sweep.

use indexmap::IndexMap;
use panelgrid_core::{OccupantId, PanelAxis, Scheduler};
use panelgrid_space::PanelLattice;

use crate::grid::Grid;
use crate::occupant::Occupant;

/// Work done by one sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Occupied panels visited.
    pub panels: usize,
    /// Panel callbacks invoked.
    pub callbacks: usize,
}

impl<S: Scheduler> Grid<S> {
    /// Run every resident occupant's panel callback, panel by panel.
    ///
    /// Only panels in the occupancy index are visited. Within a panel,
    /// callbacks run bottom to top; the order across panels is
    /// unspecified. Occupants without a callback are skipped.
    pub fn tick(&mut self) -> SweepStats {
        let stats = sweep(&self.lattice, self.index.iter(), &mut self.occupants);
        tracing::trace!(panels = stats.panels, callbacks = stats.callbacks, "sweep");
        stats
    }

    /// [`tick`](Self::tick) restricted to one layer.
    pub fn tick_layer(&mut self, layer: u32) -> SweepStats {
        let stats = sweep(&self.lattice, self.index.iter_layer(layer), &mut self.occupants);
        tracing::trace!(layer, panels = stats.panels, callbacks = stats.callbacks, "layer sweep");
        stats
    }
}

fn sweep(
    lattice: &PanelLattice,
    axes: impl Iterator<Item = PanelAxis>,
    occupants: &mut IndexMap<OccupantId, Occupant>,
) -> SweepStats {
    let mut stats = SweepStats::default();
    for axis in axes {
        let Some(panel) = lattice.panel(axis) else {
            continue;
        };
        stats.panels += 1;
        for id in panel.occupants() {
            if let Some(callback) = occupants.get_mut(id).and_then(|o| o.on_panel.as_mut()) {
                callback(panel);
                stats.callbacks += 1;
            }
        }
    }
    stats
}
