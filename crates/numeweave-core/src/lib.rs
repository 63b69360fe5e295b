//! Core data structures for the numeweave Sudoku engine.
//!
//! This crate provides the grid value type shared by the solver and generator
//! crates. A [`Grid`] is a plain 9×9 array of cell values 0-9 where 0 marks a
//! blank cell; it carries no candidate bookkeeping and no game state.
//!
//! # Examples
//!
//! ```
//! use numeweave_core::Grid;
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert_eq!(grid.get(0, 0), 5);
//! assert_eq!(grid.blank_count(), 51);
//! # Ok::<(), numeweave_core::ParseGridError>(())
//! ```

pub mod grid;

pub use self::grid::{Grid, ParseGridError};
