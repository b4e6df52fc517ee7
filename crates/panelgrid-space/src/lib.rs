//! Panel lattice construction for panelgrid.
//!
//! This crate turns a [`GridConfig`] into a [`PanelLattice`]: a stack of
//! row-major panel matrices (one per depth layer) whose panels know their
//! world position, their visual handle, and their four orthogonal
//! neighbours.
//!
//! # Layout
//!
//! Panel positions follow a fixed formula so that spatial logic built on
//! top of the lattice can reproduce them:
//!
//! ```text
//! x = start_x + layer_offsets[L].x + c * x_gap + c * width
//! y = start_y + layer_offsets[L].y + r * y_gap + r * height
//! ```
//!
//! Neighbours are linked within a layer only; a flat grid is simply a
//! lattice of depth 1.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod lattice;
pub mod layout;
pub mod panel;

pub use config::{GridConfig, LayerOffset};
pub use lattice::{NeighbourDump, PanelLattice};
pub use layout::Layout;
pub use panel::{Neighbours, Panel};
