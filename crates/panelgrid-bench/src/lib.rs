//! Benchmark profiles and workloads for panelgrid.
//!
//! - [`reference_profile`]: 100x100 single-layer grid (10K panels)
//! - [`layered_profile`]: 4 layers of 50x50 (10K panels)
//! - [`populate`]: seeded occupant placement
//! - [`random_walk`]: seeded sequence of directional moves

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use panelgrid_core::{Direction, OccupantId, PanelAxis, Scheduler};
use panelgrid_engine::{Grid, Occupant};
use panelgrid_space::{GridConfig, LayerOffset};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Asset key used by every profile.
pub const BENCH_ASSET: &str = "bench-panel";

/// 100x100 grid of 16x16 panels with a 1-unit gap.
pub fn reference_profile() -> GridConfig {
    GridConfig::new()
        .panel_size(16.0, 16.0)
        .extent(100, 100)
        .gaps(1.0, 1.0)
        .grid_visual(BENCH_ASSET)
}

/// Four 50x50 layers, each shifted by (8, -8).
pub fn layered_profile() -> GridConfig {
    GridConfig::new()
        .panel_size(16.0, 16.0)
        .extent(50, 50)
        .grid_visual(BENCH_ASSET)
        .layers((0..4).map(|l| LayerOffset::new(l as f32 * 8.0, l as f32 * -8.0)))
}

/// Register `n` occupants with panel callbacks and place each on a
/// panel chosen by a ChaCha8 stream seeded with `seed`.
///
/// Several occupants may share a panel. Returns the IDs in
/// registration order.
pub fn populate<S: Scheduler>(grid: &mut Grid<S>, n: usize, seed: u64) -> Vec<OccupantId> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (depth, rows, cols) = {
        let lattice = grid.lattice();
        (lattice.depth(), lattice.rows(), lattice.cols())
    };

    (0..n)
        .filter_map(|_| {
            let axis = PanelAxis::new(
                rng.random_range(0..depth),
                rng.random_range(0..rows),
                rng.random_range(0..cols),
            );
            let id = grid.register(Occupant::new().on_panel(|panel| {
                std::hint::black_box(panel.status());
            }));
            grid.insert(axis, id).ok().map(|_| id)
        })
        .collect()
}

/// `steps` moves as (occupant index, direction) pairs, indices in
/// `0..occupants`.
pub fn random_walk(occupants: usize, steps: usize, seed: u64) -> Vec<(usize, Direction)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..steps)
        .map(|_| {
            let who = rng.random_range(0..occupants.max(1));
            let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            (who, dir)
        })
        .collect()
}
