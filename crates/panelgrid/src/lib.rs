//! panelgrid: a panel grid with occupancy tracking for tile-based games.
//!
//! This is the facade crate that re-exports the public API of the
//! panelgrid sub-crates. Adding `panelgrid` as a single dependency is
//! enough for most hosts.
//!
//! # Quick start
//!
//! ```rust
//! use panelgrid::prelude::*;
//!
//! // A 3x3 grid of 10x10 panels at the origin, with no display attached.
//! let config = GridConfig::new()
//!     .panel_size(10.0, 10.0)
//!     .extent(3, 3)
//!     .grid_visual("tile");
//! let mut surface = HeadlessSurface::new();
//! let mut grid = Grid::build(&config, &mut surface).unwrap();
//! assert_eq!(grid.panel_at(0, 1, 1).unwrap().position(), (10.0, 10.0));
//!
//! // One occupant with a half-second cooldown.
//! let hero = grid.register(Occupant::new().with_cooldown(0.5));
//! grid.insert(PanelAxis::flat(0, 0), hero).unwrap();
//!
//! let mut arrived = None;
//! grid.move_direction(hero, Direction::Right, |_, _, to| arrived = Some(to.axis()));
//! assert_eq!(arrived, Some(PanelAxis::flat(0, 1)));
//!
//! // Cooling down until the timer queue has advanced far enough.
//! assert!(grid.move_direction(hero, Direction::Right, |_, _, _| {}).is_none());
//! grid.advance_timers(std::time::Duration::from_millis(500));
//! assert!(grid.move_direction(hero, Direction::Right, |_, _, _| {}).is_some());
//!
//! // Per-frame sweep over occupied panels.
//! let stats = grid.tick();
//! assert_eq!(stats.panels, 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `panelgrid-core` | IDs, `Direction`, errors, collaborator traits |
//! | [`space`] | `panelgrid-space` | `GridConfig`, `Panel`, `PanelLattice` |
//! | [`engine`] | `panelgrid-engine` | `Grid`, `Occupant`, `OccupancyIndex`, `TimerQueue` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Identifiers, directions, errors, and collaborator traits (`panelgrid-core`).
///
/// Implement [`types::VisualSurface`] to connect a renderer and
/// [`types::Scheduler`] to drive cooldown resets from your own clock.
pub use panelgrid_core as types;

/// Configuration, panels, and the lattice builder (`panelgrid-space`).
pub use panelgrid_space as space;

/// The grid: registry, movement, and the update sweep (`panelgrid-engine`).
///
/// [`engine::Grid`] is the main entry point.
pub use panelgrid_engine as engine;

/// Common imports for typical panelgrid usage.
///
/// ```rust
/// use panelgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use panelgrid_core::{
        CooldownReset, Direction, HeadlessSurface, OccupantId, OccupantKind, PanelAxis,
        Scheduler, VisualId, VisualProps, VisualSurface,
    };

    // Errors
    pub use panelgrid_core::{ConfigError, GridError, MoveError};

    // Space
    pub use panelgrid_space::{GridConfig, LayerOffset, Panel};

    // Engine
    pub use panelgrid_engine::{
        CooldownPolicy, Grid, MovementConfig, Occupant, SweepStats, TimerQueue,
    };
}
