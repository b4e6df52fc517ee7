//! Movable entities tracked by a grid.

use std::fmt;

use panelgrid_core::{OccupantId, OccupantKind, PanelAxis, VisualId};
use panelgrid_space::Panel;

/// Callback fired whenever an occupant lands on a panel, and again on
/// every update sweep while it stays there.
pub type PanelCallback = Box<dyn FnMut(&Panel)>;

/// Callback fired once when an occupant is destroyed.
pub type DestroyCallback = Box<dyn FnOnce(OccupantId)>;

/// A movable entity.
///
/// Built by the host with the `with_*` methods, then handed to
/// [`Grid::register`](crate::Grid::register), which assigns its ID and
/// takes ownership. Placement (`current_panel`) is managed by the grid
/// only.
pub struct Occupant {
    pub(crate) id: Option<OccupantId>,
    pub(crate) visual: Option<VisualId>,
    pub(crate) offset: (f32, f32),
    pub(crate) kind: Option<OccupantKind>,
    pub(crate) can_move: bool,
    pub(crate) cooldown: Option<f32>,
    pub(crate) on_panel: Option<PanelCallback>,
    pub(crate) on_destroy: Option<DestroyCallback>,
    pub(crate) current_panel: Option<PanelAxis>,
}

impl Default for Occupant {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupant {
    /// A mobile, untagged occupant with no visual, cooldown, or callbacks.
    pub fn new() -> Self {
        Self {
            id: None,
            visual: None,
            offset: (0.0, 0.0),
            kind: None,
            can_move: true,
            cooldown: None,
            on_panel: None,
            on_destroy: None,
            current_panel: None,
        }
    }

    /// Attach the occupant's visual; it is released on destroy.
    pub fn with_visual(mut self, visual: VisualId) -> Self {
        self.visual = Some(visual);
        self
    }

    /// Position of the occupant relative to its panel's anchor.
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Tag the occupant with a domain type.
    pub fn with_kind(mut self, kind: impl Into<OccupantKind>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Subject the occupant to cooldown gating; `modifier` scales the
    /// grid's cooldown unit.
    pub fn with_cooldown(mut self, modifier: f32) -> Self {
        self.cooldown = Some(modifier);
        self
    }

    /// Start with movement disabled.
    pub fn immobile(mut self) -> Self {
        self.can_move = false;
        self
    }

    /// Set the callback run on every panel change and every sweep.
    pub fn on_panel(mut self, callback: impl FnMut(&Panel) + 'static) -> Self {
        self.on_panel = Some(Box::new(callback));
        self
    }

    /// Set the callback run once on destroy.
    pub fn on_destroy(mut self, callback: impl FnOnce(OccupantId) + 'static) -> Self {
        self.on_destroy = Some(Box::new(callback));
        self
    }

    /// Change the offset of a live occupant.
    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.offset = (x, y);
    }

    /// Change or clear the domain type tag.
    pub fn set_kind(&mut self, kind: Option<OccupantKind>) {
        self.kind = kind;
    }

    /// Change or clear the cooldown multiplier. Takes effect on the next
    /// move; a reset already scheduled still fires.
    pub fn set_cooldown(&mut self, modifier: Option<f32>) {
        self.cooldown = modifier;
    }

    /// Identifier assigned at registration.
    pub fn id(&self) -> Option<OccupantId> {
        self.id
    }

    /// Handle of the occupant's visual.
    pub fn visual(&self) -> Option<VisualId> {
        self.visual
    }

    /// Offset within the current panel.
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Domain type tag.
    pub fn kind(&self) -> Option<OccupantKind> {
        self.kind
    }

    /// Whether a directional move is currently allowed.
    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Cooldown multiplier, if the occupant is gated.
    pub fn cooldown(&self) -> Option<f32> {
        self.cooldown
    }

    /// The panel the occupant is resident on.
    pub fn current_panel(&self) -> Option<PanelAxis> {
        self.current_panel
    }

    /// Whether a panel callback is set.
    pub fn has_panel_callback(&self) -> bool {
        self.on_panel.is_some()
    }
}

impl fmt::Debug for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Occupant")
            .field("id", &self.id)
            .field("visual", &self.visual)
            .field("offset", &self.offset)
            .field("kind", &self.kind)
            .field("can_move", &self.can_move)
            .field("cooldown", &self.cooldown)
            .field("on_panel", &self.on_panel.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .field("current_panel", &self.current_panel)
            .finish()
    }
}
