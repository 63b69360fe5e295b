//! Uniqueness-preserving reduction of a solved grid to a puzzle.
//!
//! Cells are blanked one at a time, and every removal is validated by
//! counting the completions of the reduced grid: a removal survives only if
//! the puzzle still has exactly one solution. Each of the 81 cells is
//! attempted at most once, in an order shuffled up front, so the loop
//! terminates after at most 81 solver invocations.

use log::trace;
use numeweave_core::Grid;
use rand::{Rng, seq::SliceRandom as _};

/// Blanks up to `blanks` cells of `solution` while keeping the solution
/// unique.
///
/// Requests above 81 saturate to the pool size. The result can carry fewer
/// blanks than requested when the pool runs out of removable cells first;
/// that is a normal saturation outcome, observable through
/// [`Grid::blank_count`] on the returned puzzle.
pub(crate) fn reduce<R: Rng + ?Sized>(rng: &mut R, solution: &Grid, blanks: u8) -> Grid {
    debug_assert!(solution.is_solved(), "reduce requires a solved grid");
    let mut puzzle = *solution;
    let mut remaining = usize::from(blanks).min(Grid::CELLS);

    let mut pool: Vec<u8> = (0..81).collect();
    pool.shuffle(rng);

    for index in pool {
        if remaining == 0 {
            break;
        }
        let (row, col) = (index / 9, index % 9);
        let value = puzzle.get(row, col);
        puzzle.set(row, col, 0);

        // Only {0, 1, many} matters here, so the count is capped at 2.
        if numeweave_solver::count_solutions_capped(&puzzle, 2) == 1 {
            remaining -= 1;
            trace!("removed {value} at ({row}, {col}); {remaining} removals to go");
        } else {
            // Removal made the puzzle ambiguous; restore and never revisit.
            puzzle.set(row, col, value);
            trace!("kept {value} at ({row}, {col}); removal breaks uniqueness");
        }
    }

    if remaining > 0 {
        trace!(
            "removal pool exhausted with {remaining} removals outstanding; \
             returning a puzzle with {} blanks",
            puzzle.blank_count()
        );
    }
    puzzle
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    const SOLVED: &str =
        "432867915658193427917524683865749132374612598129358764296435871581276349743981256";

    fn solution() -> Grid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn reduce_reaches_moderate_targets_exactly() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let puzzle = reduce(&mut rng, &solution(), 33);
        assert_eq!(puzzle.blank_count(), 33);
        assert_eq!(numeweave_solver::count_solutions(&puzzle), 1);
    }

    #[test]
    fn reduce_preserves_the_given_cells() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let solution = solution();
        let puzzle = reduce(&mut rng, &solution, 40);
        for row in 0..9 {
            for col in 0..9 {
                let value = puzzle.get(row, col);
                if value != 0 {
                    assert_eq!(value, solution.get(row, col));
                }
            }
        }
    }

    #[test]
    fn reduce_saturates_on_impossible_targets() {
        // No 9×9 puzzle with a unique solution has fewer than 17 clues, so
        // asking for 81 blanks must saturate well short of the request while
        // still preserving uniqueness.
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let puzzle = reduce(&mut rng, &solution(), 81);
        assert!(puzzle.blank_count() < 65);
        assert!(puzzle.blank_count() > 33);
        assert_eq!(numeweave_solver::count_solutions_capped(&puzzle, 2), 1);
    }

    #[test]
    fn reduce_zero_is_identity() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        assert_eq!(reduce(&mut rng, &solution(), 0), solution());
    }
}
