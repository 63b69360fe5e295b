//! Sparse exact-cover matrix for 9×9 Sudoku grids.
//!
//! A grid reduces to an exact-cover problem over 324 binary constraints in
//! four families of 81:
//!
//! - cell `(r, c)` is filled,
//! - row `r` contains value `v`,
//! - column `c` contains value `v`,
//! - box `b` contains value `v`.
//!
//! Each candidate placement `(r, c, v)` satisfies exactly one constraint per
//! family and becomes a 4-node matrix row. A filled cell contributes one
//! candidate row, a blank cell nine, so the exact covers of the matrix are in
//! one-to-one correspondence with the completions of the grid.
//!
//! The matrix is a circular doubly-linked structure in all four directions.
//! Rather than heap-allocated nodes with pointers, every node lives in a flat
//! arena and links are plain indices into it, which keeps the O(1) splice
//! in/out of Dancing Links while staying in safe Rust.

use numeweave_core::Grid;

/// Number of constraint columns (4 families × 81).
pub const COLUMN_COUNT: usize = 324;

/// Arena index of the root of the column-header ring.
///
/// Column headers occupy indices `1..=COLUMN_COUNT` (the header of constraint
/// `c` is node `c + 1`); candidate nodes follow.
pub(crate) const ROOT: usize = 0;

/// One node of the sparse matrix: a 1-entry, a column header, or the root.
///
/// All links are arena indices. Row links (`left`/`right`) and column links
/// (`up`/`down`) are circular; `column` points at the owning column header
/// (headers and the root point at themselves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) up: usize,
    pub(crate) down: usize,
    pub(crate) column: usize,
}

/// The exact-cover matrix for one grid.
///
/// Built fresh from a [`Grid`] per solver invocation, mutated in place during
/// the search, and discarded afterwards; nothing survives across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactCoverMatrix {
    /// Node arena: root, then the 324 column headers, then candidate nodes.
    pub(crate) nodes: Vec<Node>,
    /// Live row count per column, indexed by header node. Index 0 is a dummy
    /// slot for the root.
    pub(crate) sizes: Vec<usize>,
}

impl ExactCoverMatrix {
    /// Builds the matrix for `grid`.
    ///
    /// Filled cells contribute one candidate row; blank cells contribute one
    /// candidate row per value 1-9.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        // Root and headers, linked into one circular header ring.
        let mut nodes = Vec::with_capacity(1 + COLUMN_COUNT + Grid::CELLS * 9 * 4);
        for index in 0..=COLUMN_COUNT {
            nodes.push(Node {
                left: index.checked_sub(1).unwrap_or(COLUMN_COUNT),
                right: if index == COLUMN_COUNT { 0 } else { index + 1 },
                up: index,
                down: index,
                column: index,
            });
        }
        let mut matrix = Self {
            nodes,
            sizes: vec![0; COLUMN_COUNT + 1],
        };

        for row in 0..9 {
            for col in 0..9 {
                match grid.get(row, col) {
                    0 => {
                        for value in 1..=9 {
                            matrix.add_candidate(row, col, value);
                        }
                    }
                    value => matrix.add_candidate(row, col, value),
                }
            }
        }
        matrix
    }

    /// Appends the 4-node candidate row for placing `value` at `(row, col)`.
    fn add_candidate(&mut self, row: u8, col: u8, value: u8) {
        let first = self.nodes.len();
        for (i, constraint) in constraint_columns(row, col, value).into_iter().enumerate() {
            let node = self.nodes.len();
            let header = constraint + 1;

            // Splice into the bottom of the column (just above the header).
            let above = self.nodes[header].up;
            self.nodes.push(Node {
                left: if i == 0 { node } else { node - 1 },
                right: first,
                up: above,
                down: header,
                column: header,
            });
            self.nodes[above].down = node;
            self.nodes[header].up = node;
            self.sizes[header] += 1;

            if i > 0 {
                self.nodes[node - 1].right = node;
                self.nodes[first].left = node;
            }
        }
    }

    /// Covers a column: unlinks its header from the header ring, then unlinks
    /// every other node of every row in the column from that node's own
    /// column ring, decrementing the affected column sizes.
    pub(crate) fn cover(&mut self, header: usize) {
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row = self.nodes[header].down;
        while row != header {
            let mut node = self.nodes[row].right;
            while node != row {
                let (up, down) = (self.nodes[node].up, self.nodes[node].down);
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[self.nodes[node].column] -= 1;
                node = self.nodes[node].right;
            }
            row = self.nodes[row].down;
        }
    }

    /// Uncovers a column, exactly mirroring [`Self::cover`] in reverse: rows
    /// bottom to top, row nodes right to left, then the header itself. The
    /// reversed traversal directions are what restore the structure to its
    /// pre-cover state.
    pub(crate) fn uncover(&mut self, header: usize) {
        let mut row = self.nodes[header].up;
        while row != header {
            let mut node = self.nodes[row].left;
            while node != row {
                let (up, down) = (self.nodes[node].up, self.nodes[node].down);
                self.sizes[self.nodes[node].column] += 1;
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                node = self.nodes[node].left;
            }
            row = self.nodes[row].up;
        }

        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }
}

/// Returns the four constraint column indices satisfied by placing `value`
/// at `(row, col)`.
fn constraint_columns(row: u8, col: u8, value: u8) -> [usize; 4] {
    debug_assert!(row < 9 && col < 9 && (1..=9).contains(&value));
    let (row, col, value) = (usize::from(row), usize::from(col), usize::from(value));
    let boxed = (row / 3) * 3 + col / 3;
    [
        row * 9 + col,
        81 + row * 9 + (value - 1),
        162 + col * 9 + (value - 1),
        243 + boxed * 9 + (value - 1),
    ]
}
