//! Error types for panelgrid.
//!
//! Organized by subsystem: grid construction ([`ConfigError`]), occupant
//! registry operations ([`GridError`]), and the movement query form
//! ([`MoveError`]).

use std::error::Error;
use std::fmt;

use crate::direction::Direction;
use crate::id::{OccupantId, PanelAxis};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a grid configuration.
///
/// Construction aborts on the first error; no partial grid is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A required field was not set.
    MissingField {
        /// Name of the missing field.
        name: &'static str,
    },
    /// A dimension was zero, negative, or not finite.
    NonPositive {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An origin, gap, or layer offset was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// `depth` was set to zero.
    ZeroDepth,
    /// A layered grid did not supply exactly one offset per layer.
    LayerOffsetMismatch {
        /// Configured number of layers.
        depth: u32,
        /// Number of offsets supplied.
        offsets: usize,
    },
    /// Panel opacity was outside `[0, 1]` or not finite.
    InvalidAlpha {
        /// The rejected value.
        value: f32,
    },
    /// `depth * rows * cols` exceeds the panel limit or does not fit in `usize`.
    PanelCountOverflow {
        /// Configured depth.
        depth: u32,
        /// Configured rows.
        rows: u32,
        /// Configured columns.
        cols: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { name } => write!(f, "grid configuration needs: {name}"),
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::NonFinite { name, value } => write!(f, "{name} must be finite, got {value}"),
            Self::ZeroDepth => write!(f, "depth must be at least 1"),
            Self::LayerOffsetMismatch { depth, offsets } => write!(
                f,
                "layer_offsets has {offsets} entries but depth is {depth}"
            ),
            Self::InvalidAlpha { value } => {
                write!(f, "alpha must be within [0, 1], got {value}")
            }
            Self::PanelCountOverflow { depth, rows, cols } => write!(
                f,
                "panel count {depth} x {rows} x {cols} is too large"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── GridError ──────────────────────────────────────────────────────

/// Errors from occupant registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// No live occupant has this ID (never registered, or destroyed).
    UnknownOccupant(OccupantId),
    /// The axis does not name a panel of this grid.
    PanelOutOfBounds(PanelAxis),
    /// The occupant is already resident on a panel and must be removed
    /// before it can be inserted again.
    AlreadyPlaced {
        /// The occupant being inserted.
        occupant: OccupantId,
        /// The panel it currently sits on.
        panel: PanelAxis,
    },
    /// A transfer named a source panel the occupant is not resident on.
    NotOnPanel {
        /// The occupant being transferred.
        occupant: OccupantId,
        /// The claimed source panel.
        panel: PanelAxis,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOccupant(id) => write!(f, "unknown occupant {id}"),
            Self::PanelOutOfBounds(axis) => write!(f, "panel {axis} is outside the grid"),
            Self::AlreadyPlaced { occupant, panel } => {
                write!(f, "occupant {occupant} is already on panel {panel}")
            }
            Self::NotOnPanel { occupant, panel } => {
                write!(f, "occupant {occupant} is not on panel {panel}")
            }
        }
    }
}

impl Error for GridError {}

// ── MoveError ──────────────────────────────────────────────────────

/// Reasons a directional move cannot happen.
///
/// Only surfaced by the query form (`can_move_direction`); the move itself
/// treats every one of these as a silent no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// No live occupant has this ID.
    UnknownOccupant(OccupantId),
    /// The occupant is registered but not resident on any panel.
    NotPlaced(OccupantId),
    /// The occupant's movement is currently disabled.
    CoolingDown(OccupantId),
    /// There is no neighbour in that direction (grid edge).
    OutOfBounds {
        /// Panel the move would start from.
        from: PanelAxis,
        /// Requested direction.
        direction: Direction,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOccupant(id) => write!(f, "unknown occupant {id}"),
            Self::NotPlaced(id) => write!(f, "occupant {id} is not on any panel"),
            Self::CoolingDown(id) => write!(f, "occupant {id} cannot move yet"),
            Self::OutOfBounds { from, direction } => {
                write!(f, "no panel {direction} of {from}")
            }
        }
    }
}

impl Error for MoveError {}
