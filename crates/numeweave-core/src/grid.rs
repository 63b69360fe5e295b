//! The 9×9 Sudoku grid value type.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 9×9 Sudoku grid.
///
/// Each cell holds a value 0-9 where 0 marks a blank cell. `Grid` is a plain
/// value type: it is `Copy`, comparisons are cell-wise, and all operations on
/// it return fresh grids or plain data. Well-formedness (every cell in 0-9)
/// is guaranteed by construction; the accessors panic on out-of-range
/// arguments rather than returning errors.
///
/// # Textual form
///
/// A grid converts to and from the row-major 81-character digit string used
/// at textual boundaries. `Display` always emits digits `0`-`9`; `FromStr`
/// additionally accepts `.` and `_` for blanks and ignores whitespace.
///
/// # Examples
///
/// ```
/// use numeweave_core::Grid;
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.blank_count(), 81);
///
/// grid.set(4, 4, 5);
/// assert_eq!(grid.get(4, 4), 5);
/// assert_eq!(grid.to_string().chars().nth(4 * 9 + 4), Some('5'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Number of cells on the grid.
    pub const CELLS: usize = 81;

    /// Creates an empty grid (all cells blank).
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Creates a grid from a 9×9 cell array.
    ///
    /// # Panics
    ///
    /// Panics if any cell value is greater than 9.
    #[must_use]
    pub fn from_cells(cells: [[u8; 9]; 9]) -> Self {
        for row in &cells {
            for &value in row {
                assert!(value <= 9, "Invalid cell value: {value}");
            }
        }
        Self { cells }
    }

    /// Returns the value at `(row, col)`, 0 if the cell is blank.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn get(&self, row: u8, col: u8) -> u8 {
        assert!(row < 9 && col < 9, "Cell out of range: ({row}, {col})");
        self.cells[usize::from(row)][usize::from(col)]
    }

    /// Sets the value at `(row, col)`; 0 blanks the cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8, or if `value` is
    /// greater than 9.
    pub fn set(&mut self, row: u8, col: u8, value: u8) {
        assert!(row < 9 && col < 9, "Cell out of range: ({row}, {col})");
        assert!(value <= 9, "Invalid cell value: {value}");
        self.cells[usize::from(row)][usize::from(col)] = value;
    }

    /// Returns the index (0-8) of the 3×3 box containing `(row, col)`.
    ///
    /// Boxes are numbered left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn box_of(row: u8, col: u8) -> u8 {
        assert!(row < 9 && col < 9, "Cell out of range: ({row}, {col})");
        (row / 3) * 3 + col / 3
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&value| value == 0)
            .count()
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.blank_count() == 0
    }

    /// Returns `true` if no row, column, or box contains a duplicate
    /// non-blank value.
    ///
    /// Blank cells never conflict, so every partially filled grid produced by
    /// blanking cells of a consistent grid is itself consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.house_masks().is_some()
    }

    /// Returns `true` if every row, column, and box is a permutation of 1-9.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        const FULL: u16 = 0b11_1111_1110;
        self.house_masks()
            .is_some_and(|masks| masks.iter().all(|&mask| mask == FULL))
    }

    /// Computes the value bitmask of each of the 27 houses (9 rows, then 9
    /// columns, then 9 boxes), or `None` on the first duplicate.
    fn house_masks(&self) -> Option<[u16; 27]> {
        let mut masks = [0_u16; 27];
        for row in 0..9 {
            for col in 0..9 {
                let value = self.get(row, col);
                if value == 0 {
                    continue;
                }
                let bit = 1 << value;
                let houses = [
                    usize::from(row),
                    9 + usize::from(col),
                    18 + usize::from(Self::box_of(row, col)),
                ];
                for house in houses {
                    if masks[house] & bit != 0 {
                        return None;
                    }
                    masks[house] |= bit;
                }
            }
        }
        Some(masks)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.cells.iter().flatten() {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// An error which can be returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 significant characters.
    #[display("expected 81 cell characters, found {len}")]
    WrongLength {
        /// Number of significant (non-whitespace) characters found.
        len: usize,
    },
    /// A significant character was not a digit or a blank marker.
    #[display("invalid cell character {found:?} at cell index {index}")]
    InvalidCharacter {
        /// Row-major cell index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from 81 significant characters in row-major order.
    ///
    /// `1`-`9` are cell values; `0`, `.`, and `_` are blanks; whitespace is
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().filter(|ch| !ch.is_whitespace()).count();
        if len != Self::CELLS {
            return Err(ParseGridError::WrongLength { len });
        }

        let mut grid = Self::new();
        for (index, ch) in s.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let value = match ch {
                '0' | '.' | '_' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseGridError::InvalidCharacter { index, found: ch }),
            };
            #[expect(clippy::cast_possible_truncation)]
            let (row, col) = ((index / 9) as u8, (index % 9) as u8);
            grid.set(row, col, value);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "432867915658193427917524683865749132374612598129358764296435871581276349743981256";

    #[test]
    fn parse_and_display_round_trip() {
        let grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid.get(0, 0), 4);
        assert_eq!(grid.get(8, 8), 6);
    }

    #[test]
    fn parse_accepts_blank_markers_and_whitespace() {
        let grid: Grid = "
            53_ .7. ___
            6__ 195 ___
            098 000 060
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(grid.blank_count(), 51);
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(2, 1), 9);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Grid::from_str("123"),
            Err(ParseGridError::WrongLength { len: 3 })
        );
        assert_eq!(
            format!("{SOLVED}0").parse::<Grid>(),
            Err(ParseGridError::WrongLength { len: 82 })
        );
        // The reported length is the full significant length, not merely
        // "more than 81".
        assert_eq!(
            format!("{SOLVED} {SOLVED}").parse::<Grid>(),
            Err(ParseGridError::WrongLength { len: 162 })
        );
        let bad = format!("x{}", &SOLVED[1..]);
        assert_eq!(
            bad.parse::<Grid>(),
            Err(ParseGridError::InvalidCharacter {
                index: 0,
                found: 'x'
            })
        );
    }

    #[test]
    fn solved_and_consistent_checks() {
        let solved: Grid = SOLVED.parse().unwrap();
        assert!(solved.is_filled());
        assert!(solved.is_consistent());
        assert!(solved.is_solved());

        // Blanking a cell keeps the grid consistent but no longer solved.
        let mut partial = solved;
        partial.set(0, 0, 0);
        assert!(partial.is_consistent());
        assert!(!partial.is_solved());
        assert!(!partial.is_filled());

        // A duplicate in a row is inconsistent even though every cell is a
        // valid digit.
        let mut duplicated = solved;
        duplicated.set(0, 0, solved.get(0, 1));
        assert!(!duplicated.is_consistent());
        assert!(!duplicated.is_solved());

        assert!(!Grid::new().is_solved());
        assert!(Grid::new().is_consistent());
    }

    #[test]
    fn box_of_covers_all_boxes() {
        assert_eq!(Grid::box_of(0, 0), 0);
        assert_eq!(Grid::box_of(0, 8), 2);
        assert_eq!(Grid::box_of(4, 4), 4);
        assert_eq!(Grid::box_of(8, 0), 6);
        assert_eq!(Grid::box_of(8, 8), 8);
    }

    #[test]
    #[should_panic(expected = "Invalid cell value: 10")]
    fn set_rejects_out_of_range_value() {
        let mut grid = Grid::new();
        grid.set(0, 0, 10);
    }

    #[test]
    #[should_panic(expected = "Cell out of range: (9, 0)")]
    fn get_rejects_out_of_range_cell() {
        let _ = Grid::new().get(9, 0);
    }

    proptest! {
        #[test]
        fn display_from_str_round_trip(cells in proptest::array::uniform32(0_u8..=9)) {
            // 32 random values tiled over the 81 cells; enough to exercise
            // every digit in arbitrary positions.
            let mut grid = Grid::new();
            for index in 0..Grid::CELLS {
                let (row, col) = (u8::try_from(index / 9).unwrap(), u8::try_from(index % 9).unwrap());
                grid.set(row, col, cells[index % cells.len()]);
            }
            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
