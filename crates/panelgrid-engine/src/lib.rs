//! Occupancy tracking and movement on a panel lattice.
//!
//! Provides [`Grid`], which owns a [`PanelLattice`](panelgrid_space::PanelLattice)
//! and layers on top of it:
//!
//! - the occupant registry (register, insert, remove, transfer, destroy),
//! - the sparse [`OccupancyIndex`] of non-empty panels,
//! - directional movement with cooldown gating,
//! - the per-frame update sweep over occupied panels.
//!
//! Everything runs synchronously on the caller's thread. Deferred cooldown
//! resets go through a [`Scheduler`](panelgrid_core::Scheduler); the
//! bundled [`TimerQueue`] is the default.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod index;
pub mod movement;
pub mod occupant;
pub mod sweep;
pub mod timer;

pub use config::{CooldownPolicy, MovementConfig};
pub use grid::{Grid, RemovalHook};
pub use index::OccupancyIndex;
pub use occupant::Occupant;
pub use sweep::SweepStats;
pub use timer::TimerQueue;
