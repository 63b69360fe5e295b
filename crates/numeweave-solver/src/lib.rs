//! Exact-cover solution counting for Sudoku grids.
//!
//! This crate reduces a 9×9 grid to an exact-cover problem over 324 binary
//! constraints and counts its solutions with Knuth's Algorithm X, implemented
//! with the Dancing Links technique over a flat index arena (see [`matrix`]).
//!
//! The count is the number of distinct completions of the grid that are
//! consistent with its filled cells: 0 means unsolvable, 1 unique, more than
//! 1 ambiguous.
//!
//! # Examples
//!
//! ```
//! use numeweave_core::Grid;
//! use numeweave_solver::count_solutions;
//!
//! let puzzle: Grid =
//!     "400060010008000007000520603865700030300600008029050000000005071581000000740000206"
//!         .parse()?;
//! assert_eq!(count_solutions(&puzzle), 1);
//! # Ok::<(), numeweave_core::ParseGridError>(())
//! ```

pub use self::search::{count_solutions, count_solutions_capped};

pub mod matrix;
mod search;
