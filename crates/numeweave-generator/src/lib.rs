//! Sudoku puzzle generation for numeweave.
//!
//! Generation runs in two stages. A randomized backtracking fill first
//! produces a complete solved grid; a reduction pass then blanks cells one
//! at a time, keeping each removal only if the exact-cover solver confirms
//! the puzzle still has a unique solution. The result is a
//! `(problem, solution)` pair where every given of the problem matches the
//! solution.
//!
//! Each generation run is self-contained and CPU-bound with no shared state,
//! so independent runs may fan out across threads freely.
//!
//! # Examples
//!
//! ```
//! use numeweave_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate_with_seed(42, 33);
//!
//! assert_eq!(puzzle.blank_count(), 33);
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(numeweave_solver::count_solutions(&puzzle.problem), 1);
//! ```

use log::debug;
use numeweave_core::Grid;
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

mod fill;
mod reduce;

/// A generated puzzle together with its unique solution.
///
/// Every non-blank cell of `problem` equals the corresponding cell of
/// `solution`, and `problem` admits exactly one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, with blanks where cells were removed.
    pub problem: Grid,
    /// The solved grid the puzzle was reduced from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle via
    /// [`PuzzleGenerator::generate_with_seed`].
    pub seed: u64,
}

impl GeneratedPuzzle {
    /// Returns the number of blank cells in the problem.
    ///
    /// This is the achieved difficulty: it can fall short of the requested
    /// blank count when the removal pool saturates (see
    /// [`PuzzleGenerator::generate`]).
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.problem.blank_count()
    }
}

/// Generator of Sudoku puzzles with a guaranteed unique solution.
///
/// The generator is stateless; a fresh deterministic RNG is derived from the
/// seed of each call, so a `PuzzleGenerator` can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use numeweave_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(45);
/// assert!(puzzle.blank_count() <= 45);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        PuzzleGenerator
    }

    /// Generates a puzzle with up to `blanks` blank cells from a random
    /// seed.
    ///
    /// Requests above 81 saturate to the board size. The achieved blank
    /// count can also fall short of moderate requests in principle (pool
    /// exhaustion, see [`GeneratedPuzzle::blank_count`]), though targets up
    /// to the low forties are reliably met.
    #[must_use]
    pub fn generate(&self, blanks: u8) -> GeneratedPuzzle {
        self.generate_with_seed(rand::rng().random(), blanks)
    }

    /// Generates the puzzle determined by `seed` with up to `blanks` blank
    /// cells.
    ///
    /// The same seed and blank count always reproduce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u64, blanks: u8) -> GeneratedPuzzle {
        // The outer stream only hands out sub-seeds, so a budget-exhausted
        // fill attempt can retry "with a new random seed" while the whole
        // run stays a pure function of `seed`.
        let mut seed_stream = Pcg64Mcg::seed_from_u64(seed);

        let solution = loop {
            let mut rng = Pcg64Mcg::seed_from_u64(seed_stream.random());
            if let Some(grid) = fill::solved_grid(&mut rng) {
                break grid;
            }
            debug!("fill attempt for seed {seed} ran out of budget; reseeding");
        };

        let mut rng = Pcg64Mcg::seed_from_u64(seed_stream.random());
        let problem = reduce::reduce(&mut rng, &solution, blanks);
        debug!(
            "generated puzzle from seed {seed}: {} of {blanks} requested blanks",
            problem.blank_count()
        );

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn generate_is_reproducible_per_seed() {
        let generator = PuzzleGenerator::new();
        let first = generator.generate_with_seed(1234, 40);
        let second = generator.generate_with_seed(1234, 40);
        assert_eq!(first, second);
    }

    #[test]
    fn generate_33_meets_the_target() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate_with_seed(99, 33);
        assert_eq!(puzzle.blank_count(), 33);
        assert_eq!(numeweave_solver::count_solutions(&puzzle.problem), 1);
    }

    #[test]
    fn random_seed_generation_upholds_the_contract() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate(33);
        assert!(puzzle.blank_count() <= 33);
        assert!(puzzle.solution.is_solved());
        assert_eq!(
            numeweave_solver::count_solutions_capped(&puzzle.problem, 2),
            1
        );
    }

    #[test]
    fn oversized_requests_saturate() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator.generate_with_seed(7, 255);
        assert!(puzzle.blank_count() < Grid::CELLS);
        assert_eq!(
            numeweave_solver::count_solutions_capped(&puzzle.problem, 2),
            1
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn generated_puzzles_uphold_the_contract(seed: u64) {
            let generator = PuzzleGenerator::new();
            let puzzle = generator.generate_with_seed(seed, 40);

            prop_assert!(puzzle.solution.is_solved());
            prop_assert!(puzzle.blank_count() <= 40);
            prop_assert_eq!(
                numeweave_solver::count_solutions_capped(&puzzle.problem, 2),
                1
            );
            for row in 0..9 {
                for col in 0..9 {
                    let given = puzzle.problem.get(row, col);
                    if given != 0 {
                        prop_assert_eq!(given, puzzle.solution.get(row, col));
                    }
                }
            }
        }
    }
}
