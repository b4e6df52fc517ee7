//! Strongly-typed identifiers and the [`PanelAxis`] coordinate.

use std::fmt;

/// Identifies an occupant registered with a grid.
///
/// Occupants are assigned sequential IDs at registration, starting at 0.
/// An ID is never handed out twice by the same grid, even after the
/// occupant it named has been destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u64);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OccupantId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Opaque handle to a visual owned by a [`VisualSurface`](crate::VisualSurface).
///
/// Panels and occupants only hold the handle; the surface owns the sprite
/// behind it and is the only thing that can release it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub u64);

impl fmt::Display for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VisualId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Domain-defined type tag carried by an occupant.
///
/// The grid never interprets the value; it only distinguishes tagged from
/// untagged occupants in the default removal hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantKind(pub u32);

impl fmt::Display for OccupantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OccupantKind {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Fixed coordinate identity of a panel: `(layer, row, col)`.
///
/// Ordering is canonical: layer first, then row, then column. Flat grids
/// only ever use layer 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelAxis {
    /// Depth layer (0 for flat grids).
    pub layer: u32,
    /// Row within the layer.
    pub row: u32,
    /// Column within the row.
    pub col: u32,
}

impl PanelAxis {
    /// Construct an axis from its three components.
    pub const fn new(layer: u32, row: u32, col: u32) -> Self {
        Self { layer, row, col }
    }

    /// Shorthand for a layer-0 axis.
    pub const fn flat(row: u32, col: u32) -> Self {
        Self::new(0, row, col)
    }
}

impl fmt::Display for PanelAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}:R{}:C{}", self.layer, self.row, self.col)
    }
}

impl From<(u32, u32, u32)> for PanelAxis {
    fn from((layer, row, col): (u32, u32, u32)) -> Self {
        Self::new(layer, row, col)
    }
}

impl From<(u32, u32)> for PanelAxis {
    fn from((row, col): (u32, u32)) -> Self {
        Self::flat(row, col)
    }
}
