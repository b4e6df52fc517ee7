//! Movement and cooldown configuration.

use std::time::Duration;

// ── CooldownPolicy ─────────────────────────────────────────────────

/// When the grid schedules an occupant's movement reset.
///
/// Only occupants that carry a cooldown multiplier are affected; an
/// occupant without one is never gated by the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CooldownPolicy {
    /// Each successful move disables movement and schedules a reset.
    #[default]
    OnMove,
    /// Registration disables movement and schedules a single reset;
    /// moves themselves are not gated. Models a spawn delay.
    OnRegister,
}

// ── MovementConfig ─────────────────────────────────────────────────

/// Movement settings for a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq)]
pub struct MovementConfig {
    /// When cooldown resets are scheduled. Default: [`CooldownPolicy::OnMove`].
    pub policy: CooldownPolicy,
    /// Length of one cooldown unit; an occupant's multiplier scales it.
    /// Default: one second.
    pub cooldown_unit: Duration,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            policy: CooldownPolicy::OnMove,
            cooldown_unit: Duration::from_secs(1),
        }
    }
}

impl MovementConfig {
    /// Delay before a reset for an occupant with multiplier `modifier`.
    ///
    /// Multipliers that are negative, NaN, or too large to represent
    /// yield `None`.
    pub fn cooldown_delay(&self, modifier: f32) -> Option<Duration> {
        Duration::try_from_secs_f64(self.cooldown_unit.as_secs_f64() * f64::from(modifier)).ok()
    }
}
