//! Algorithm X search over the exact-cover matrix.

use numeweave_core::Grid;

use crate::matrix::{ExactCoverMatrix, ROOT};

/// Counts the completions of `grid` that are consistent with its filled
/// cells.
///
/// Returns 0 for an unsolvable grid, 1 for a uniquely solvable one, and the
/// exact number of completions otherwise. The count is deterministic for a
/// fixed grid, and no state survives the call: each invocation builds and
/// discards its own matrix, so concurrent calls never contend.
///
/// Note that the count can be astronomically large for very sparse grids (an
/// empty grid admits roughly 6.7 × 10²¹ completions); when only
/// {0, 1, many} matters, prefer [`count_solutions_capped`].
///
/// # Examples
///
/// ```
/// use numeweave_core::Grid;
/// use numeweave_solver::count_solutions;
///
/// let solved: Grid =
///     "432867915658193427917524683865749132374612598129358764296435871581276349743981256"
///         .parse()?;
/// assert_eq!(count_solutions(&solved), 1);
/// # Ok::<(), numeweave_core::ParseGridError>(())
/// ```
#[must_use]
pub fn count_solutions(grid: &Grid) -> usize {
    count_solutions_capped(grid, usize::MAX)
}

/// Counts completions of `grid`, stopping early once `cap` have been found.
///
/// Equivalent to `count_solutions(grid).min(cap)` but bounds the search cost:
/// with `cap = 2` the result still distinguishes unsolvable, unique, and
/// ambiguous grids while never enumerating more than two covers.
#[must_use]
pub fn count_solutions_capped(grid: &Grid, cap: usize) -> usize {
    if cap == 0 {
        return 0;
    }
    let mut search = Search {
        matrix: ExactCoverMatrix::new(grid),
        cap,
        count: 0,
    };
    search.run();
    search.count
}

/// One recursive Dancing Links search over an exclusively owned matrix.
struct Search {
    matrix: ExactCoverMatrix,
    cap: usize,
    count: usize,
}

impl Search {
    /// Recursively enumerates exact covers, incrementing `count` for each.
    ///
    /// Recursion depth is bounded by the number of blank cells (at most 81):
    /// every level commits one candidate placement.
    fn run(&mut self) {
        let nodes = &self.matrix.nodes;

        // Empty header ring: every constraint is satisfied exactly once.
        if nodes[ROOT].right == ROOT {
            self.count += 1;
            return;
        }

        // Most-constrained-first: pick the live column with the fewest
        // candidate rows, ties broken by ring order. This only affects the
        // branching factor, never the count.
        let mut chosen = nodes[ROOT].right;
        let mut header = nodes[chosen].right;
        while header != ROOT {
            if self.matrix.sizes[header] < self.matrix.sizes[chosen] {
                chosen = header;
            }
            header = self.matrix.nodes[header].right;
        }

        self.matrix.cover(chosen);

        let mut row = self.matrix.nodes[chosen].down;
        while row != chosen {
            let mut node = self.matrix.nodes[row].right;
            while node != row {
                let column = self.matrix.nodes[node].column;
                self.matrix.cover(column);
                node = self.matrix.nodes[node].right;
            }

            self.run();

            let mut node = self.matrix.nodes[row].left;
            while node != row {
                let column = self.matrix.nodes[node].column;
                self.matrix.uncover(column);
                node = self.matrix.nodes[node].left;
            }

            if self.count >= self.cap {
                break;
            }
            row = self.matrix.nodes[row].down;
        }

        self.matrix.uncover(chosen);
    }
}
