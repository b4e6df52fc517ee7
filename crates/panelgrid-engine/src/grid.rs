//! The grid: panel lattice plus the occupant registry.
//!
//! [`Grid`] owns the lattice, the [`OccupancyIndex`], every registered
//! [`Occupant`], and the ID counter. All mutation goes through its
//! methods so that three things always agree: each occupant's
//! `current_panel`, each panel's occupant list, and the index.
//!
//! Movement lives in [`movement`](crate::movement) and the per-frame
//! sweep in [`sweep`](crate::sweep); both are further `impl` blocks on
//! this type.

use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;
use panelgrid_core::{
    ConfigError, CooldownReset, GridError, OccupantId, PanelAxis, Scheduler, VisualSurface,
};
use panelgrid_space::{GridConfig, NeighbourDump, Panel, PanelLattice};

use crate::config::{CooldownPolicy, MovementConfig};
use crate::index::OccupancyIndex;
use crate::occupant::Occupant;
use crate::timer::TimerQueue;

/// Hook run on a panel after an occupant has been removed from it.
///
/// The default resets the panel status to 0 when the removed occupant
/// carries a kind tag.
pub type RemovalHook = Box<dyn FnMut(&mut Panel, &Occupant)>;

fn default_removal_hook() -> RemovalHook {
    Box::new(|panel, occupant| {
        if occupant.kind().is_some() {
            panel.set_status(0);
        }
    })
}

// ── Grid ───────────────────────────────────────────────────────────

/// A panel lattice with occupancy tracking and movement.
///
/// Single-threaded: every operation completes before it returns, and
/// callbacks run synchronously inside the operation that triggers them.
///
/// # Examples
///
/// ```
/// use panelgrid_core::{Direction, HeadlessSurface, PanelAxis};
/// use panelgrid_engine::{Grid, Occupant};
/// use panelgrid_space::GridConfig;
///
/// let config = GridConfig::new()
///     .panel_size(10.0, 10.0)
///     .extent(3, 3)
///     .grid_visual("panel");
/// let mut grid = Grid::build(&config, &mut HeadlessSurface::new()).unwrap();
///
/// let hero = grid.register(Occupant::new());
/// grid.insert(PanelAxis::flat(0, 0), hero).unwrap();
///
/// let to = grid.move_direction(hero, Direction::Right, |_, _, _| {});
/// assert_eq!(to, Some(PanelAxis::flat(0, 1)));
/// assert!(!grid.is_occupied(PanelAxis::flat(0, 0)));
/// ```
pub struct Grid<S = TimerQueue> {
    pub(crate) lattice: PanelLattice,
    pub(crate) index: OccupancyIndex,
    pub(crate) occupants: IndexMap<OccupantId, Occupant>,
    next_id: u64,
    pub(crate) movement: MovementConfig,
    pub(crate) scheduler: S,
    removal_hook: RemovalHook,
}

impl Grid<TimerQueue> {
    /// Build a grid with default movement settings and a fresh
    /// [`TimerQueue`].
    pub fn build(
        config: &GridConfig,
        surface: &mut dyn VisualSurface,
    ) -> Result<Self, ConfigError> {
        Self::build_with(config, surface, MovementConfig::default(), TimerQueue::new())
    }

    /// Advance the timer queue by `dt` and apply every reset that fell due.
    ///
    /// Returns how many resets re-enabled a live occupant.
    pub fn advance_timers(&mut self, dt: Duration) -> usize {
        let due = self.scheduler.advance(dt);
        due.into_iter()
            .filter(|&reset| self.apply_cooldown_reset(reset))
            .count()
    }
}

impl<S: Scheduler> Grid<S> {
    /// Build the lattice from `config` and wrap it.
    pub fn build_with(
        config: &GridConfig,
        surface: &mut dyn VisualSurface,
        movement: MovementConfig,
        scheduler: S,
    ) -> Result<Self, ConfigError> {
        let lattice = PanelLattice::build(config, surface)?;
        Ok(Self::with_scheduler(lattice, movement, scheduler))
    }

    /// Wrap an already built lattice.
    ///
    /// The new grid has no occupants, so any occupant entries already on
    /// the lattice's panels are dropped.
    pub fn with_scheduler(
        mut lattice: PanelLattice,
        movement: MovementConfig,
        scheduler: S,
    ) -> Self {
        let stray = lattice.clear_occupants();
        if stray > 0 {
            tracing::warn!(stray, "dropped occupant entries from adopted lattice");
        }
        Self {
            lattice,
            index: OccupancyIndex::new(),
            occupants: IndexMap::new(),
            next_id: 0,
            movement,
            scheduler,
            removal_hook: default_removal_hook(),
        }
    }

    /// Replace the hook run after an occupant leaves a panel.
    pub fn set_removal_hook(&mut self, hook: impl FnMut(&mut Panel, &Occupant) + 'static) {
        self.removal_hook = Box::new(hook);
    }

    // ── Registry ────────────────────────────────────────────────

    /// Assign the next ID to `occupant` and take ownership of it.
    ///
    /// IDs start at 0 and are never reused. Under
    /// [`CooldownPolicy::OnRegister`] a gated occupant starts immobile and
    /// its reset is scheduled here.
    pub fn register(&mut self, mut occupant: Occupant) -> OccupantId {
        let id = OccupantId(self.next_id);
        self.next_id += 1;
        occupant.id = Some(id);
        occupant.current_panel = None;
        let gate = match self.movement.policy {
            CooldownPolicy::OnRegister => occupant.cooldown,
            CooldownPolicy::OnMove => None,
        };
        if gate.is_some() {
            occupant.can_move = false;
        }

        tracing::debug!(occupant = %id, kind = ?occupant.kind, "occupant registered");
        self.occupants.insert(id, occupant);
        if let Some(modifier) = gate {
            self.schedule_reset(id, modifier);
        }
        id
    }

    /// Put a registered occupant on top of the panel at `axis`.
    ///
    /// Runs the occupant's panel callback before returning and marks the
    /// panel occupied. An occupant already resident somewhere must be
    /// removed first.
    pub fn insert(&mut self, axis: PanelAxis, id: OccupantId) -> Result<&Panel, GridError> {
        let occupant = self
            .occupants
            .get_mut(&id)
            .ok_or(GridError::UnknownOccupant(id))?;
        if let Some(panel) = occupant.current_panel {
            return Err(GridError::AlreadyPlaced {
                occupant: id,
                panel,
            });
        }
        let panel = self
            .lattice
            .panel_mut(axis)
            .ok_or(GridError::PanelOutOfBounds(axis))?;

        panel.push_occupant(id);
        occupant.current_panel = Some(axis);
        if let Some(callback) = occupant.on_panel.as_mut() {
            callback(panel);
        }
        self.index.mark(axis);
        Ok(panel)
    }

    /// [`insert`](Self::insert) by coordinates.
    pub fn insert_at(
        &mut self,
        layer: u32,
        row: u32,
        col: u32,
        id: OccupantId,
    ) -> Result<&Panel, GridError> {
        self.insert(PanelAxis::new(layer, row, col), id)
    }

    /// Take `id` off the panel at `axis`, keeping the order of the rest.
    ///
    /// Returns whether the panel is now empty. Removing an occupant that
    /// is not there is a silent no-op, so speculative removal is safe.
    pub fn remove(&mut self, axis: PanelAxis, id: OccupantId) -> bool {
        let Some(panel) = self.lattice.panel_mut(axis) else {
            tracing::trace!(occupant = %id, panel = %axis, "remove from panel outside grid");
            return false;
        };

        if panel.remove_occupant(id) {
            if let Some(occupant) = self.occupants.get_mut(&id) {
                if occupant.current_panel == Some(axis) {
                    occupant.current_panel = None;
                }
                (self.removal_hook)(panel, occupant);
            }
        } else {
            tracing::trace!(occupant = %id, panel = %axis, "occupant not on panel");
        }

        let empty = panel.is_empty();
        if empty {
            self.index.clear(axis);
        }
        empty
    }

    /// Remove `id` from its panel, release its visual, fire its destroy
    /// callback, and forget it. Returns the ID.
    pub fn destroy(
        &mut self,
        id: OccupantId,
        surface: &mut dyn VisualSurface,
    ) -> Result<OccupantId, GridError> {
        let placed = self
            .occupants
            .get(&id)
            .ok_or(GridError::UnknownOccupant(id))?
            .current_panel;
        if let Some(axis) = placed {
            self.remove(axis, id);
        }

        let mut occupant = self
            .occupants
            .shift_remove(&id)
            .ok_or(GridError::UnknownOccupant(id))?;
        if let Some(visual) = occupant.visual.take() {
            surface.destroy_visual(visual);
        }
        if let Some(callback) = occupant.on_destroy.take() {
            callback(id);
        }
        tracing::debug!(occupant = %id, "occupant destroyed");
        Ok(id)
    }

    /// Move `id` from `from` to `to`: remove, then insert.
    ///
    /// Checked up front, so a failed transfer changes nothing.
    pub fn transfer(
        &mut self,
        id: OccupantId,
        from: PanelAxis,
        to: PanelAxis,
    ) -> Result<PanelAxis, GridError> {
        let occupant = self
            .occupants
            .get(&id)
            .ok_or(GridError::UnknownOccupant(id))?;
        if occupant.current_panel != Some(from) {
            return Err(GridError::NotOnPanel {
                occupant: id,
                panel: from,
            });
        }
        if !self.lattice.contains(to) {
            return Err(GridError::PanelOutOfBounds(to));
        }

        self.remove(from, id);
        self.insert(to, id)?;
        tracing::debug!(occupant = %id, %from, %to, "occupant transferred");
        Ok(to)
    }

    /// Enable or disable movement for `id` directly.
    pub fn set_can_move(&mut self, id: OccupantId, can_move: bool) -> Result<(), GridError> {
        let occupant = self
            .occupants
            .get_mut(&id)
            .ok_or(GridError::UnknownOccupant(id))?;
        occupant.can_move = can_move;
        Ok(())
    }

    /// Set a panel's status code.
    pub fn set_status(&mut self, axis: PanelAxis, status: i32) -> Result<(), GridError> {
        let panel = self
            .lattice
            .panel_mut(axis)
            .ok_or(GridError::PanelOutOfBounds(axis))?;
        panel.set_status(status);
        Ok(())
    }

    /// Set or clear a panel's position dirty flag.
    pub fn mark_position_updated(
        &mut self,
        axis: PanelAxis,
        updated: bool,
    ) -> Result<(), GridError> {
        let panel = self
            .lattice
            .panel_mut(axis)
            .ok_or(GridError::PanelOutOfBounds(axis))?;
        panel.mark_position_updated(updated);
        Ok(())
    }

    /// Release every panel and occupant visual and drop the grid.
    ///
    /// Destroy callbacks are not fired. Returns the number of visuals
    /// released.
    pub fn teardown(mut self, surface: &mut dyn VisualSurface) -> usize {
        let mut released = self.lattice.release_visuals(surface);
        for occupant in self.occupants.values_mut() {
            if let Some(visual) = occupant.visual.take() {
                surface.destroy_visual(visual);
                released += 1;
            }
        }
        tracing::debug!(released, "grid torn down");
        released
    }

    pub(crate) fn schedule_reset(&mut self, id: OccupantId, modifier: f32) {
        match self.movement.cooldown_delay(modifier) {
            Some(delay) => self
                .scheduler
                .schedule_once(delay, CooldownReset { occupant: id }),
            None => {
                tracing::warn!(occupant = %id, modifier, "unusable cooldown multiplier; re-enabling now");
                if let Some(occupant) = self.occupants.get_mut(&id) {
                    occupant.can_move = true;
                }
            }
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The underlying lattice.
    pub fn lattice(&self) -> &PanelLattice {
        &self.lattice
    }

    /// Look up a panel by axis.
    pub fn panel(&self, axis: PanelAxis) -> Option<&Panel> {
        self.lattice.panel(axis)
    }

    /// Look up a panel by coordinates.
    pub fn panel_at(&self, layer: u32, row: u32, col: u32) -> Option<&Panel> {
        self.lattice.panel_at(layer, row, col)
    }

    /// A live occupant by ID.
    pub fn occupant(&self, id: OccupantId) -> Option<&Occupant> {
        self.occupants.get(&id)
    }

    /// Mutable access to a live occupant's host-owned attributes.
    pub fn occupant_mut(&mut self, id: OccupantId) -> Option<&mut Occupant> {
        self.occupants.get_mut(&id)
    }

    /// Live occupants in registration order.
    pub fn occupants(&self) -> impl Iterator<Item = (OccupantId, &Occupant)> + '_ {
        self.occupants.iter().map(|(&id, o)| (id, o))
    }

    /// Number of live occupants.
    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    /// Occupants resident on `axis`, bottom to top; empty if the panel
    /// does not exist.
    pub fn occupants_on(&self, axis: PanelAxis) -> &[OccupantId] {
        self.lattice.panel(axis).map_or(&[], |p| p.occupants())
    }

    /// World position of an occupant: its panel's position plus its offset.
    pub fn occupant_position(&self, id: OccupantId) -> Option<(f32, f32)> {
        let occupant = self.occupants.get(&id)?;
        let (px, py) = self.lattice.panel(occupant.current_panel?)?.position();
        Some((px + occupant.offset.0, py + occupant.offset.1))
    }

    /// Whether the index records `axis` as occupied.
    pub fn is_occupied(&self, axis: PanelAxis) -> bool {
        self.index.contains(axis)
    }

    /// Panels holding at least one occupant, in unspecified order.
    pub fn occupied_panels(&self) -> impl Iterator<Item = PanelAxis> + '_ {
        self.index.iter()
    }

    /// The occupancy index.
    pub fn index(&self) -> &OccupancyIndex {
        &self.index
    }

    /// Movement settings.
    pub fn movement_config(&self) -> &MovementConfig {
        &self.movement
    }

    /// The scheduler receiving cooldown resets.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Describe a panel and its neighbours, logging the description at
    /// debug level.
    pub fn debug_neighbours(&self, axis: PanelAxis) -> Option<NeighbourDump> {
        let dump = self.lattice.neighbour_dump(axis)?;
        tracing::debug!("{dump}");
        Some(dump)
    }
}

impl<S> fmt::Debug for Grid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("depth", &self.lattice.depth())
            .field("rows", &self.lattice.rows())
            .field("cols", &self.lattice.cols())
            .field("occupants", &self.occupants.len())
            .field("occupied_panels", &self.index.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelgrid_core::{HeadlessSurface, OccupantKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn grid(rows: u32, cols: u32) -> Grid {
        let config = GridConfig::new()
            .panel_size(10.0, 10.0)
            .extent(rows, cols)
            .grid_visual("panel");
        Grid::build(&config, &mut HeadlessSurface::new()).unwrap()
    }

    // ── register ────────────────────────────────────────────────

    #[test]
    fn register_assigns_sequential_ids() {
        let mut g = grid(2, 2);
        let ids: Vec<_> = (0..4).map(|_| g.register(Occupant::new())).collect();
        assert_eq!(ids, (0..4).map(OccupantId).collect::<Vec<_>>());
        assert_eq!(g.occupant(ids[2]).unwrap().id(), Some(OccupantId(2)));
    }

    #[test]
    fn ids_are_not_reused_after_destroy() {
        let mut g = grid(2, 2);
        let mut surface = HeadlessSurface::new();
        let a = g.register(Occupant::new());
        g.destroy(a, &mut surface).unwrap();
        let b = g.register(Occupant::new());
        assert_eq!(b, OccupantId(1));
    }

    #[test]
    fn grids_keep_independent_counters() {
        let mut g1 = grid(1, 1);
        let mut g2 = grid(1, 1);
        g1.register(Occupant::new());
        g1.register(Occupant::new());
        assert_eq!(g2.register(Occupant::new()), OccupantId(0));
    }

    // ── insert ──────────────────────────────────────────────────

    #[test]
    fn insert_places_fires_callback_and_marks_index() {
        let mut g = grid(3, 3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let id = g.register(Occupant::new().on_panel(move |p| log.borrow_mut().push(p.axis())));

        let axis = PanelAxis::flat(2, 1);
        let panel = g.insert(axis, id).unwrap();
        assert_eq!(panel.occupants(), &[id]);

        assert_eq!(*seen.borrow(), vec![axis]);
        assert_eq!(g.occupant(id).unwrap().current_panel(), Some(axis));
        assert!(g.is_occupied(axis));
    }

    #[test]
    fn insert_appends_on_top() {
        let mut g = grid(1, 1);
        let a = g.register(Occupant::new());
        let b = g.register(Occupant::new());
        g.insert_at(0, 0, 0, a).unwrap();
        g.insert_at(0, 0, 0, b).unwrap();
        assert_eq!(g.occupants_on(PanelAxis::flat(0, 0)), &[a, b]);
        assert_eq!(g.panel_at(0, 0, 0).unwrap().top(), Some(b));
    }

    #[test]
    fn insert_rejects_bad_input_without_side_effects() {
        let mut g = grid(2, 2);
        let id = g.register(Occupant::new());
        assert_eq!(
            g.insert(PanelAxis::flat(5, 0), id).unwrap_err(),
            GridError::PanelOutOfBounds(PanelAxis::flat(5, 0))
        );
        assert_eq!(
            g.insert(PanelAxis::flat(0, 0), OccupantId(99)).unwrap_err(),
            GridError::UnknownOccupant(OccupantId(99))
        );
        assert!(g.index().is_empty());

        g.insert(PanelAxis::flat(0, 0), id).unwrap();
        assert_eq!(
            g.insert(PanelAxis::flat(1, 1), id).unwrap_err(),
            GridError::AlreadyPlaced {
                occupant: id,
                panel: PanelAxis::flat(0, 0)
            }
        );
        assert!(!g.is_occupied(PanelAxis::flat(1, 1)));
    }

    // ── remove ──────────────────────────────────────────────────

    #[test]
    fn remove_is_stable_and_clears_index_when_empty() {
        let mut g = grid(1, 1);
        let axis = PanelAxis::flat(0, 0);
        let ids: Vec<_> = (0..3).map(|_| g.register(Occupant::new())).collect();
        for &id in &ids {
            g.insert(axis, id).unwrap();
        }
        assert!(!g.remove(axis, ids[1]));
        assert_eq!(g.occupants_on(axis), &[ids[0], ids[2]]);
        assert_eq!(g.occupant(ids[1]).unwrap().current_panel(), None);
        assert!(g.is_occupied(axis));

        assert!(!g.remove(axis, ids[0]));
        assert!(g.remove(axis, ids[2]));
        assert!(!g.is_occupied(axis));
    }

    #[test]
    fn speculative_remove_is_a_no_op() {
        let mut g = grid(2, 2);
        let a = g.register(Occupant::new());
        let b = g.register(Occupant::new());
        g.insert(PanelAxis::flat(0, 0), a).unwrap();

        assert!(!g.remove(PanelAxis::flat(0, 0), b));
        assert!(g.remove(PanelAxis::flat(1, 1), a));
        assert!(!g.remove(PanelAxis::flat(9, 9), a));
        assert_eq!(g.occupants_on(PanelAxis::flat(0, 0)), &[a]);
        assert_eq!(g.occupant(a).unwrap().current_panel(), Some(PanelAxis::flat(0, 0)));
    }

    #[test]
    fn default_hook_resets_status_for_tagged_occupants_only() {
        let mut g = grid(1, 2);
        let tagged = g.register(Occupant::new().with_kind(OccupantKind(3)));
        let plain = g.register(Occupant::new());
        let left = PanelAxis::flat(0, 0);
        let right = PanelAxis::flat(0, 1);

        g.insert(left, tagged).unwrap();
        g.insert(right, plain).unwrap();
        g.set_status(left, 7).unwrap();
        g.set_status(right, 7).unwrap();

        g.remove(left, tagged);
        g.remove(right, plain);
        assert_eq!(g.panel(left).unwrap().status(), 0);
        assert_eq!(g.panel(right).unwrap().status(), 7);
    }

    #[test]
    fn custom_removal_hook_replaces_default() {
        let mut g = grid(1, 1);
        g.set_removal_hook(|panel, occupant| {
            if occupant.kind() == Some(OccupantKind(1)) {
                panel.set_status(-1);
            }
        });
        let id = g.register(Occupant::new().with_kind(1u32));
        let axis = PanelAxis::flat(0, 0);
        g.insert(axis, id).unwrap();
        g.set_status(axis, 5).unwrap();
        g.remove(axis, id);
        assert_eq!(g.panel(axis).unwrap().status(), -1);
    }

    // ── destroy ─────────────────────────────────────────────────

    #[test]
    fn destroy_removes_releases_and_fires_callback() {
        let mut g = grid(2, 2);
        let mut surface = HeadlessSurface::new();
        let sprite = surface.create_visual(0.0, 0.0, "sprite");
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&fired);
        let id = g.register(
            Occupant::new()
                .with_visual(sprite)
                .on_destroy(move |id| log.borrow_mut().push(id)),
        );
        g.insert(PanelAxis::flat(1, 0), id).unwrap();

        assert_eq!(g.destroy(id, &mut surface), Ok(id));
        assert_eq!(*fired.borrow(), vec![id]);
        assert_eq!(surface.live_visuals(), 0);
        assert!(g.occupant(id).is_none());
        assert!(g.occupants_on(PanelAxis::flat(1, 0)).is_empty());
        assert!(g.index().is_empty());
        assert_eq!(
            g.destroy(id, &mut surface),
            Err(GridError::UnknownOccupant(id))
        );
    }

    #[test]
    fn destroy_unplaced_occupant() {
        let mut g = grid(1, 1);
        let id = g.register(Occupant::new());
        assert_eq!(g.destroy(id, &mut HeadlessSurface::new()), Ok(id));
        assert_eq!(g.occupant_count(), 0);
    }

    // ── transfer ────────────────────────────────────────────────

    #[test]
    fn transfer_moves_between_panels() {
        let mut g = grid(2, 2);
        let id = g.register(Occupant::new());
        let a = PanelAxis::flat(0, 0);
        let b = PanelAxis::flat(1, 1);
        g.insert(a, id).unwrap();

        assert_eq!(g.transfer(id, a, b), Ok(b));
        assert!(g.occupants_on(a).is_empty());
        assert_eq!(g.occupants_on(b), &[id]);
        assert!(!g.is_occupied(a));
        assert!(g.is_occupied(b));
    }

    #[test]
    fn failed_transfer_changes_nothing() {
        let mut g = grid(2, 2);
        let id = g.register(Occupant::new());
        let a = PanelAxis::flat(0, 0);
        g.insert(a, id).unwrap();

        assert_eq!(
            g.transfer(id, PanelAxis::flat(1, 0), PanelAxis::flat(1, 1)),
            Err(GridError::NotOnPanel {
                occupant: id,
                panel: PanelAxis::flat(1, 0)
            })
        );
        assert_eq!(
            g.transfer(id, a, PanelAxis::flat(3, 3)),
            Err(GridError::PanelOutOfBounds(PanelAxis::flat(3, 3)))
        );
        assert_eq!(g.occupants_on(a), &[id]);
        assert!(g.is_occupied(a));
    }

    #[test]
    fn adopted_lattice_starts_without_residents() {
        let config = GridConfig::new()
            .panel_size(10.0, 10.0)
            .extent(2, 2)
            .grid_visual("panel");
        let mut lattice = PanelLattice::build(&config, &mut HeadlessSurface::new()).unwrap();
        if let Some(panel) = lattice.panel_mut(PanelAxis::flat(0, 0)) {
            panel.push_occupant(OccupantId(0));
        }

        let mut g = Grid::with_scheduler(lattice, MovementConfig::default(), TimerQueue::new());
        assert!(g.occupants_on(PanelAxis::flat(0, 0)).is_empty());

        let id = g.register(Occupant::new());
        g.insert(PanelAxis::flat(1, 1), id).unwrap();
        let homes: Vec<_> = g
            .lattice()
            .iter()
            .filter(|p| p.contains(id))
            .map(|p| p.axis())
            .collect();
        assert_eq!(homes, vec![PanelAxis::flat(1, 1)]);
        assert_eq!(g.occupied_panels().collect::<Vec<_>>(), vec![PanelAxis::flat(1, 1)]);
    }

    // ── queries ─────────────────────────────────────────────────

    #[test]
    fn occupant_position_adds_offset() {
        let mut g = grid(3, 3);
        let id = g.register(Occupant::new().with_offset(2.0, -1.0));
        assert_eq!(g.occupant_position(id), None);
        g.insert(PanelAxis::flat(1, 2), id).unwrap();
        assert_eq!(g.occupant_position(id), Some((22.0, 9.0)));
    }

    #[test]
    fn teardown_releases_panel_and_occupant_visuals() {
        let mut surface = HeadlessSurface::new();
        let config = GridConfig::new()
            .panel_size(1.0, 1.0)
            .extent(2, 2)
            .grid_visual("panel");
        let mut g = Grid::build(&config, &mut surface).unwrap();
        let sprite = surface.create_visual(0.0, 0.0, "sprite");
        g.register(Occupant::new().with_visual(sprite));
        assert_eq!(g.teardown(&mut surface), 5);
        assert_eq!(surface.live_visuals(), 0);
    }

    #[test]
    fn debug_neighbours_reports_edges() {
        let g = grid(2, 2);
        let dump = g.debug_neighbours(PanelAxis::flat(1, 1)).unwrap();
        assert_eq!(dump.entries[1], (panelgrid_core::Direction::Down, None));
        assert!(g.debug_neighbours(PanelAxis::flat(2, 2)).is_none());
    }
}
