//! Core types and traits for panelgrid.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the lattice and the engine:
//! panel and occupant identifiers, cardinal directions, error types, and
//! the traits through which the grid talks to its collaborators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod traits;

pub use direction::{Direction, ParseDirectionError};
pub use error::{ConfigError, GridError, MoveError};
pub use id::{OccupantId, OccupantKind, PanelAxis, VisualId};
pub use traits::{CooldownReset, HeadlessSurface, Scheduler, VisualProps, VisualSurface};
