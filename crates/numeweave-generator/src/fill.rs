//! Randomized backtracking fill of a complete solved grid.
//!
//! The fill walks the grid box-major and value-minor: for the current value
//! `v` it places one `v` into each box 0-8 in row-major order, then advances
//! to `v + 1` back at box 0. Within a box the empty cell to try is drawn
//! uniformly at random without replacement, which is where grid diversity
//! comes from. A dead end resets the placement and tries the next cell; when
//! a box has no workable cell the failure propagates upward and the caller
//! backtracks through its own remaining cells.
//!
//! Filling a fresh empty grid virtually always succeeds quickly, but the
//! recursion is not provably bounded, so every attempt carries a step budget.
//! Exhaustion is reported as [`FillOutcome::OutOfBudget`] and the caller
//! retries with a new random seed instead of hanging.

use log::trace;
use numeweave_core::Grid;
use rand::{Rng, RngExt as _};

/// Placement attempts allowed per fill attempt. An unconstrained fill
/// finishes in well under a thousand attempts; hitting this bound means the
/// random walk has wedged itself and a reseed is cheaper than backtracking
/// out.
pub(crate) const STEP_BUDGET: u64 = 100_000;

/// Result of one fill attempt or of one recursive step inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FillOutcome {
    /// All values 1-9 are placed in all 9 boxes.
    Filled,
    /// No cell of the current box accepts the current value; the caller must
    /// undo its own placement and try another cell.
    DeadEnd,
    /// The step budget ran out; abandon the whole attempt and reseed.
    OutOfBudget,
}

/// Attempts to produce one fully solved grid.
///
/// Returns `None` if the step budget was exhausted; the grid it was working
/// on is discarded in that case.
pub(crate) fn solved_grid<R: Rng + ?Sized>(rng: &mut R) -> Option<Grid> {
    let mut grid = Grid::new();
    let mut budget = STEP_BUDGET;
    match place(&mut grid, rng, 1, 0, &mut budget) {
        FillOutcome::Filled => {
            debug_assert!(grid.is_solved());
            Some(grid)
        }
        FillOutcome::OutOfBudget => {
            trace!(
                "fill attempt exhausted its step budget of {STEP_BUDGET}; \
                 retrying with a fresh seed"
            );
            None
        }
        // A fresh empty grid always admits solutions, so a dead end can only
        // surface from the recursion, never from the root call.
        FillOutcome::DeadEnd => unreachable!("empty grid reported unfillable"),
    }
}

/// Places `value` into one empty cell of box `box_index`, then recurses on
/// the next (value, box) step.
fn place<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    value: u8,
    box_index: u8,
    budget: &mut u64,
) -> FillOutcome {
    if value > 9 {
        return FillOutcome::Filled;
    }

    let mut empty = empty_cells_of_box(grid, box_index);
    while !empty.is_empty() {
        if *budget == 0 {
            return FillOutcome::OutOfBudget;
        }
        *budget -= 1;

        let (row, col) = empty.swap_remove(rng.random_range(0..empty.len()));
        if !accepts(grid, row, col, value) {
            continue;
        }
        grid.set(row, col, value);

        let (next_value, next_box) = if box_index == 8 {
            (value + 1, 0)
        } else {
            (value, box_index + 1)
        };
        match place(grid, rng, next_value, next_box, budget) {
            FillOutcome::Filled => return FillOutcome::Filled,
            FillOutcome::OutOfBudget => return FillOutcome::OutOfBudget,
            FillOutcome::DeadEnd => grid.set(row, col, 0),
        }
    }
    FillOutcome::DeadEnd
}

/// Collects the blank cells of box `box_index` as `(row, col)` pairs.
fn empty_cells_of_box(grid: &Grid, box_index: u8) -> Vec<(u8, u8)> {
    let (base_row, base_col) = ((box_index / 3) * 3, (box_index % 3) * 3);
    let mut cells = Vec::with_capacity(9);
    for row in base_row..base_row + 3 {
        for col in base_col..base_col + 3 {
            if grid.get(row, col) == 0 {
                cells.push((row, col));
            }
        }
    }
    cells
}

/// Returns `true` if `value` can be placed at `(row, col)` without colliding
/// with an already placed value in the cell's row, column, or box.
///
/// All three houses are checked explicitly; the box-major fill order is never
/// relied on to make the box check redundant.
fn accepts(grid: &Grid, row: u8, col: u8, value: u8) -> bool {
    for i in 0..9 {
        if grid.get(row, i) == value || grid.get(i, col) == value {
            return false;
        }
    }
    let (base_row, base_col) = (row / 3 * 3, col / 3 * 3);
    for r in base_row..base_row + 3 {
        for c in base_col..base_col + 3 {
            if grid.get(r, c) == value {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn fill_produces_solved_grids() {
        for seed in 0..20 {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            let grid = solved_grid(&mut rng).expect("fill should succeed from an empty grid");
            assert!(grid.is_solved());
        }
    }

    #[test]
    fn fill_is_deterministic_per_seed() {
        let first = solved_grid(&mut Pcg64Mcg::seed_from_u64(7));
        let second = solved_grid(&mut Pcg64Mcg::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diversify() {
        let grids: Vec<_> = (0..8)
            .map(|seed| solved_grid(&mut Pcg64Mcg::seed_from_u64(seed)).unwrap())
            .collect();
        let distinct = grids
            .iter()
            .map(ToString::to_string)
            .collect::<std::collections::HashSet<_>>();
        assert!(distinct.len() > 1, "all seeds produced the same grid");
    }

    #[test]
    fn accepts_checks_row_column_and_box() {
        let mut grid = Grid::new();
        grid.set(0, 0, 5);
        assert!(!accepts(&grid, 0, 8, 5)); // row collision
        assert!(!accepts(&grid, 8, 0, 5)); // column collision
        assert!(!accepts(&grid, 1, 1, 5)); // box collision
        assert!(accepts(&grid, 1, 1, 6));
        assert!(accepts(&grid, 4, 4, 5));
    }

    #[test]
    fn empty_cells_shrink_as_box_fills() {
        let mut grid = Grid::new();
        assert_eq!(empty_cells_of_box(&grid, 4).len(), 9);
        grid.set(3, 3, 1);
        grid.set(4, 4, 2);
        let cells = empty_cells_of_box(&grid, 4);
        assert_eq!(cells.len(), 7);
        assert!(!cells.contains(&(3, 3)));
        assert!(!cells.contains(&(4, 4)));
    }
}
