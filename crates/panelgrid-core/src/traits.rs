//! Collaborator traits: the display surface and the deferred scheduler.
//!
//! The grid never renders or keeps time itself. It creates and releases
//! visuals through [`VisualSurface`] and hands cooldown resets to a
//! [`Scheduler`], which gives them back to the host once they are due.

use std::time::Duration;

use crate::id::{OccupantId, VisualId};

/// Display properties applied to a visual right after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualProps {
    /// Rendered width in world units.
    pub width: f32,
    /// Rendered height in world units.
    pub height: f32,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Normalized anchor point; `(0.5, 0.5)` centres the visual on its position.
    pub anchor: (f32, f32),
    /// Whether the visual is drawn.
    pub visible: bool,
}

/// The rendering collaborator that owns every sprite.
///
/// Handles returned by [`create_visual`](Self::create_visual) stay valid
/// until passed to [`destroy_visual`](Self::destroy_visual).
pub trait VisualSurface {
    /// Create a visual at `(x, y)` from the named asset.
    fn create_visual(&mut self, x: f32, y: f32, asset: &str) -> VisualId;

    /// Apply size, opacity, anchor, and visibility to an existing visual.
    fn configure_visual(&mut self, visual: VisualId, props: &VisualProps);

    /// Release a visual. The handle must not be used afterwards.
    fn destroy_visual(&mut self, visual: VisualId);
}

/// A [`VisualSurface`] with nothing behind it.
///
/// Hands out sequential handles and otherwise does nothing; useful for
/// headless hosts such as servers and simulations.
#[derive(Clone, Debug, Default)]
pub struct HeadlessSurface {
    next: u64,
    live: usize,
}

impl HeadlessSurface {
    /// Create a surface whose first handle is `VisualId(0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals created and not yet destroyed.
    pub fn live_visuals(&self) -> usize {
        self.live
    }
}

impl VisualSurface for HeadlessSurface {
    fn create_visual(&mut self, _x: f32, _y: f32, _asset: &str) -> VisualId {
        let id = VisualId(self.next);
        self.next += 1;
        self.live += 1;
        id
    }

    fn configure_visual(&mut self, _visual: VisualId, _props: &VisualProps) {}

    fn destroy_visual(&mut self, _visual: VisualId) {
        self.live = self.live.saturating_sub(1);
    }
}

/// A deferred request to re-enable an occupant's movement.
///
/// Resets are plain values: the scheduler stores them and the host passes
/// them back to the grid when they fall due. A reset for an occupant that
/// has since been destroyed is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CooldownReset {
    /// The occupant whose movement should be re-enabled.
    pub occupant: OccupantId,
}

/// The timer collaborator that fires cooldown resets.
///
/// Fire-and-forget: a scheduled reset cannot be cancelled.
pub trait Scheduler {
    /// Arrange for `reset` to be delivered once `delay` has elapsed.
    fn schedule_once(&mut self, delay: Duration, reset: CooldownReset);
}
