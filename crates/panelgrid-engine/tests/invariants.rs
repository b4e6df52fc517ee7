//! Property tests: registry, panels, and index stay consistent under
//! arbitrary operation sequences.

use std::collections::BTreeSet;

use panelgrid_core::{Direction, OccupantId, PanelAxis};
use panelgrid_engine::{Grid, Occupant};
use panelgrid_test_utils::fixtures::flat_config;
use panelgrid_test_utils::RecordingSurface;
use proptest::prelude::*;

const ROWS: u32 = 4;
const COLS: u32 = 5;

#[derive(Clone, Debug)]
enum Op {
    Register,
    Insert(usize, u32, u32),
    Remove(usize, u32, u32),
    Move(usize, Direction),
    Transfer(usize, u32, u32),
    Destroy(usize),
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Register),
        3 => (0usize..16, 0..ROWS, 0..COLS).prop_map(|(i, r, c)| Op::Insert(i, r, c)),
        1 => (0usize..16, 0..ROWS, 0..COLS).prop_map(|(i, r, c)| Op::Remove(i, r, c)),
        3 => (0usize..16, arb_direction()).prop_map(|(i, d)| Op::Move(i, d)),
        1 => (0usize..16, 0..ROWS, 0..COLS).prop_map(|(i, r, c)| Op::Transfer(i, r, c)),
        1 => (0usize..16).prop_map(Op::Destroy),
    ]
}

fn pick(ids: &[OccupantId], i: usize) -> OccupantId {
    if ids.is_empty() {
        OccupantId(u64::MAX)
    } else {
        ids[i % ids.len()]
    }
}

fn check_consistency(grid: &Grid) -> Result<(), TestCaseError> {
    let non_empty: BTreeSet<PanelAxis> = grid
        .lattice()
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.axis())
        .collect();
    let indexed: BTreeSet<PanelAxis> = grid.occupied_panels().collect();
    prop_assert_eq!(&indexed, &non_empty);

    for (id, occupant) in grid.occupants() {
        let resident: Vec<PanelAxis> = grid
            .lattice()
            .iter()
            .filter(|p| p.contains(id))
            .map(|p| p.axis())
            .collect();
        match occupant.current_panel() {
            Some(axis) => {
                prop_assert_eq!(resident, vec![axis]);
                let count = grid.occupants_on(axis).iter().filter(|&&o| o == id).count();
                prop_assert_eq!(count, 1);
            }
            None => prop_assert!(resident.is_empty()),
        }
    }

    for panel in grid.lattice().iter() {
        for &id in panel.occupants() {
            prop_assert!(grid.occupant(id).is_some(), "dead occupant {} on {}", id, panel.axis());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn operations_preserve_consistency(ops in prop::collection::vec(arb_op(), 1..80)) {
        let mut surface = RecordingSurface::new();
        let mut grid = Grid::build(&flat_config(ROWS, COLS), &mut surface).unwrap();
        let mut ids: Vec<OccupantId> = Vec::new();
        let mut issued: Vec<OccupantId> = Vec::new();

        for op in ops {
            match op {
                Op::Register => {
                    let id = grid.register(Occupant::new());
                    if let Some(&last) = issued.last() {
                        prop_assert!(id > last);
                    }
                    issued.push(id);
                    ids.push(id);
                }
                Op::Insert(i, r, c) => {
                    let _ = grid.insert(PanelAxis::flat(r, c), pick(&ids, i));
                }
                Op::Remove(i, r, c) => {
                    let axis = PanelAxis::flat(r, c);
                    let empty = grid.remove(axis, pick(&ids, i));
                    prop_assert_eq!(empty, grid.occupants_on(axis).is_empty());
                }
                Op::Move(i, d) => {
                    let id = pick(&ids, i);
                    let before = grid.occupant(id).and_then(|o| o.current_panel());
                    let expected = grid.can_move_direction(id, d).ok();
                    let moved = grid.move_direction(id, d, |_, _, _| {});
                    prop_assert_eq!(moved, expected);
                    if moved.is_none() {
                        prop_assert_eq!(grid.occupant(id).and_then(|o| o.current_panel()), before);
                    }
                }
                Op::Transfer(i, r, c) => {
                    let id = pick(&ids, i);
                    if let Some(from) = grid.occupant(id).and_then(|o| o.current_panel()) {
                        let to = PanelAxis::flat(r, c);
                        prop_assert_eq!(grid.transfer(id, from, to), Ok(to));
                        if from != to {
                            prop_assert!(!grid.occupants_on(from).contains(&id));
                        }
                    }
                }
                Op::Destroy(i) => {
                    let id = pick(&ids, i);
                    if grid.destroy(id, &mut surface).is_ok() {
                        ids.retain(|&x| x != id);
                    }
                }
            }
            check_consistency(&grid)?;
        }
    }
}
