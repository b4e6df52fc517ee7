//! A single grid cell and its neighbour links.

use panelgrid_core::{Direction, OccupantId, PanelAxis, VisualId};
use smallvec::SmallVec;

/// The four orthogonal neighbours of a panel; `None` at grid edges.
///
/// Links are fixed once the lattice is built and are always symmetric:
/// if `a.right == Some(b)` then `b.left == Some(a)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbours {
    /// Panel at row - 1.
    pub up: Option<PanelAxis>,
    /// Panel at row + 1.
    pub down: Option<PanelAxis>,
    /// Panel at col - 1.
    pub left: Option<PanelAxis>,
    /// Panel at col + 1.
    pub right: Option<PanelAxis>,
}

impl Neighbours {
    /// The neighbour in `direction`, if any.
    pub fn get(&self, direction: Direction) -> Option<PanelAxis> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) fn set(&mut self, direction: Direction, axis: Option<PanelAxis>) {
        match direction {
            Direction::Up => self.up = axis,
            Direction::Down => self.down = axis,
            Direction::Left => self.left = axis,
            Direction::Right => self.right = axis,
        }
    }

    /// Present neighbours in up, down, left, right order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, PanelAxis)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|axis| (d, axis)))
    }

    /// Number of present neighbours (2 at corners, 4 in the interior).
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// One cell of the grid.
///
/// Holds its fixed coordinate identity, world position, visual handle,
/// neighbour links, and the ordered list of resident occupants
/// (insertion order; the last entry is topmost).
#[derive(Clone, Debug)]
pub struct Panel {
    axis: PanelAxis,
    position: (f32, f32),
    visual: Option<VisualId>,
    occupants: SmallVec<[OccupantId; 4]>,
    neighbours: Neighbours,
    status: i32,
    position_updated: bool,
}

impl Panel {
    /// Create an unlinked, empty panel.
    pub fn new(axis: PanelAxis, position: (f32, f32), visual: Option<VisualId>) -> Self {
        Self {
            axis,
            position,
            visual,
            occupants: SmallVec::new(),
            neighbours: Neighbours::default(),
            status: 0,
            position_updated: false,
        }
    }

    /// Fixed coordinate identity.
    pub fn axis(&self) -> PanelAxis {
        self.axis
    }

    /// World position of the panel's anchor.
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Handle of the panel's visual, if one was created.
    pub fn visual(&self) -> Option<VisualId> {
        self.visual
    }

    /// Resident occupants in z-order (last is topmost).
    pub fn occupants(&self) -> &[OccupantId] {
        &self.occupants
    }

    /// Whether no occupant is resident.
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Whether `id` is resident on this panel.
    pub fn contains(&self, id: OccupantId) -> bool {
        self.occupants.contains(&id)
    }

    /// The topmost resident occupant.
    pub fn top(&self) -> Option<OccupantId> {
        self.occupants.last().copied()
    }

    /// Neighbour links.
    pub fn neighbours(&self) -> &Neighbours {
        &self.neighbours
    }

    /// The neighbour in `direction`, if any.
    pub fn neighbour(&self, direction: Direction) -> Option<PanelAxis> {
        self.neighbours.get(direction)
    }

    /// Domain-defined status code; 0 means idle.
    pub fn status(&self) -> i32 {
        self.status
    }

    /// Set the status code.
    pub fn set_status(&mut self, status: i32) {
        self.status = status;
    }

    /// Dirty flag for position updates.
    pub fn position_updated(&self) -> bool {
        self.position_updated
    }

    /// Set or clear the position dirty flag.
    pub fn mark_position_updated(&mut self, updated: bool) {
        self.position_updated = updated;
    }

    /// Append an occupant on top of the stack.
    ///
    /// This only touches the panel. Hosts should go through the engine's
    /// `Grid::insert`, which also keeps the occupancy index in step.
    pub fn push_occupant(&mut self, id: OccupantId) {
        self.occupants.push(id);
    }

    /// Remove the first entry equal to `id`, keeping the order of the rest.
    ///
    /// Returns whether an entry was removed. Like
    /// [`push_occupant`](Self::push_occupant), this does not touch any index.
    pub fn remove_occupant(&mut self, id: OccupantId) -> bool {
        match self.occupants.iter().position(|&o| o == id) {
            Some(i) => {
                self.occupants.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_occupants(&mut self) -> usize {
        let n = self.occupants.len();
        self.occupants.clear();
        n
    }

    pub(crate) fn link(&mut self, direction: Direction, axis: Option<PanelAxis>) {
        self.neighbours.set(direction, axis);
    }

    pub(crate) fn take_visual(&mut self) -> Option<VisualId> {
        self.visual.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_is_stable_and_removes_first_match_only() {
        let mut p = Panel::new(PanelAxis::flat(0, 0), (0.0, 0.0), None);
        for id in [1, 2, 3, 2] {
            p.push_occupant(OccupantId(id));
        }
        assert!(p.remove_occupant(OccupantId(2)));
        assert_eq!(p.occupants(), &[OccupantId(1), OccupantId(3), OccupantId(2)]);
        assert_eq!(p.top(), Some(OccupantId(2)));
        assert!(!p.remove_occupant(OccupantId(9)));
        assert_eq!(p.occupants().len(), 3);
    }

    #[test]
    fn new_panel_is_idle_and_unlinked() {
        let p = Panel::new(PanelAxis::flat(1, 1), (10.0, 10.0), Some(VisualId(4)));
        assert!(p.is_empty());
        assert_eq!(p.status(), 0);
        assert!(!p.position_updated());
        assert_eq!(p.neighbours().count(), 0);
        assert_eq!(p.visual(), Some(VisualId(4)));
    }

    #[test]
    fn neighbour_iter_skips_missing_links() {
        let mut n = Neighbours::default();
        n.set(Direction::Right, Some(PanelAxis::flat(0, 1)));
        n.set(Direction::Down, Some(PanelAxis::flat(1, 0)));
        let got: Vec<_> = n.iter().collect();
        assert_eq!(
            got,
            vec![
                (Direction::Down, PanelAxis::flat(1, 0)),
                (Direction::Right, PanelAxis::flat(0, 1)),
            ]
        );
    }
}
