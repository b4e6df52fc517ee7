//! Directional movement with cooldown gating.
//!
//! A move takes an occupant from its current panel to the neighbour in
//! one of the four cardinal directions. Moves that cannot happen (unknown
//! or unplaced occupant, cooldown active, grid edge) are silent no-ops;
//! [`Grid::can_move_direction`] reports the reason.

use panelgrid_core::{CooldownReset, Direction, MoveError, OccupantId, PanelAxis, Scheduler};
use panelgrid_space::Panel;
use smallvec::SmallVec;

use crate::config::CooldownPolicy;
use crate::grid::Grid;

impl<S: Scheduler> Grid<S> {
    /// Check whether `id` can move one panel in `direction`.
    ///
    /// Returns the destination on success. Checks run in order: the
    /// occupant exists, it is placed, its movement is enabled, and a
    /// neighbour exists.
    pub fn can_move_direction(
        &self,
        id: OccupantId,
        direction: Direction,
    ) -> Result<PanelAxis, MoveError> {
        let occupant = self
            .occupants
            .get(&id)
            .ok_or(MoveError::UnknownOccupant(id))?;
        let from = occupant.current_panel.ok_or(MoveError::NotPlaced(id))?;
        if !occupant.can_move {
            return Err(MoveError::CoolingDown(id));
        }
        self.lattice
            .neighbour(from, direction)
            .ok_or(MoveError::OutOfBounds { from, direction })
    }

    /// Move `id` one panel in `direction`.
    ///
    /// On success the occupant is transferred (its panel callback fires on
    /// arrival), cooldown gating is applied, and then `on_complete` runs
    /// with the old and new panels. Returns the destination, or `None` if
    /// the move was not possible, in which case nothing changes and
    /// `on_complete` is not called.
    pub fn move_direction<F>(
        &mut self,
        id: OccupantId,
        direction: Direction,
        on_complete: F,
    ) -> Option<PanelAxis>
    where
        F: FnOnce(OccupantId, &Panel, &Panel),
    {
        let to = match self.can_move_direction(id, direction) {
            Ok(to) => to,
            Err(err) => {
                tracing::trace!(occupant = %id, %direction, %err, "move skipped");
                return None;
            }
        };
        let from = self.occupants.get(&id)?.current_panel?;

        self.remove(from, id);
        if let Err(err) = self.insert(to, id) {
            tracing::warn!(occupant = %id, %from, %to, %err, "move failed after removal");
            return None;
        }
        self.start_cooldown(id);

        if let (Some(old), Some(new)) = (self.lattice.panel(from), self.lattice.panel(to)) {
            on_complete(id, old, new);
        }
        Some(to)
    }

    /// Directions `id` could move in right now, with their destinations.
    ///
    /// Empty if the occupant is unknown, unplaced, or cooling down.
    pub fn available_moves(&self, id: OccupantId) -> SmallVec<[(Direction, PanelAxis); 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.can_move_direction(id, dir).ok().map(|to| (dir, to)))
            .collect()
    }

    /// Re-enable movement for the occupant named by `reset`.
    ///
    /// Returns `false` if the occupant has been destroyed since the reset
    /// was scheduled.
    pub fn apply_cooldown_reset(&mut self, reset: CooldownReset) -> bool {
        match self.occupants.get_mut(&reset.occupant) {
            Some(occupant) => {
                occupant.can_move = true;
                true
            }
            None => {
                tracing::trace!(occupant = %reset.occupant, "cooldown reset for destroyed occupant");
                false
            }
        }
    }

    fn start_cooldown(&mut self, id: OccupantId) {
        if self.movement.policy != CooldownPolicy::OnMove {
            return;
        }
        let Some(occupant) = self.occupants.get_mut(&id) else {
            return;
        };
        if let Some(modifier) = occupant.cooldown {
            occupant.can_move = false;
            self.schedule_reset(id, modifier);
        }
    }
}
