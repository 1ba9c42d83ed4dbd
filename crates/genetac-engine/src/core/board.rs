use std::fmt;

use arrayvec::ArrayVec;

use crate::PlacementError;

use super::mark::{CellState, Mark};

/// Number of cells on a side of the board.
pub const BOARD_SIDE: usize = 3;
/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Every row, column and diagonal, as cell indices.
const LINES: [[usize; BOARD_SIDE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 tic-tac-toe board.
///
/// Cells are indexed row by row from the top-left corner:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The board only stores marks. It does not track whose turn it is; see
/// [`Game`](crate::Game) for that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [None; CELL_COUNT],
    };

    #[must_use]
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the mark in `index`, or `None` for empty or out-of-range cells.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Returns `true` if `index` is on the board and nobody has played there.
    ///
    /// Out-of-range indices are reported as not empty rather than panicking.
    #[must_use]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Places `mark` at `index`.
    ///
    /// On error the board is left unchanged.
    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), PlacementError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlacementError::OutOfRange { index })?;
        if cell.is_some() {
            return Err(PlacementError::Occupied { index });
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Indices of all empty cells in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
            .collect()
    }

    /// Encodes every cell relative to `viewer` (0 empty, 1 own, 2 opponent).
    #[must_use]
    pub fn encoded_cells(&self, viewer: Mark) -> [u8; CELL_COUNT] {
        self.cells
            .map(|cell| CellState::relative_to(cell, viewer).code())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the mark owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line[1..]
                .iter()
                .all(|&i| self.cells[i] == Some(first))
                .then_some(first)
        })
    }

    /// Draws the board with box characters, using `glyph` to display marks.
    #[must_use]
    pub fn render<F>(&self, glyph: F) -> String
    where
        F: Fn(Mark) -> char,
    {
        let mut out = String::new();
        let separator = |left: char, mid: char, right: char| {
            let mut line = String::new();
            line.push(left);
            for x in 0..BOARD_SIDE {
                if x > 0 {
                    line.push('─');
                    line.push(mid);
                }
            }
            line.push('─');
            line.push(right);
            line
        };
        out.push_str(&separator('┌', '┬', '┐'));
        out.push('\n');
        for (y, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if y > 0 {
                out.push_str(&separator('├', '┼', '┤'));
                out.push('\n');
            }
            out.push('│');
            for cell in row {
                out.push(cell.map_or(' ', &glyph));
                out.push('│');
            }
            out.push('\n');
        }
        out.push_str(&separator('└', '┴', '┘'));
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render(|mark| match mark {
            Mark::X => 'X',
            Mark::O => 'O',
        });
        f.write_str(&rendered)
    }
}

impl FromIterator<(usize, Mark)> for Board {
    /// Builds a board from `(index, mark)` pairs; later pairs overwrite earlier ones and
    /// out-of-range indices are ignored.
    fn from_iter<T: IntoIterator<Item = (usize, Mark)>>(iter: T) -> Self {
        let mut board = Self::EMPTY;
        for (index, mark) in iter {
            if let Some(cell) = board.cells.get_mut(index) {
                *cell = Some(mark);
            }
        }
        board
    }
}

/// Writes the encoded cells as a compact string like `"010|002|000"`, used in logs.
#[must_use]
pub fn format_encoded(cells: &[u8; CELL_COUNT]) -> String {
    let mut out = String::with_capacity(CELL_COUNT + BOARD_SIDE);
    for (i, code) in cells.iter().enumerate() {
        if i > 0 && i % BOARD_SIDE == 0 {
            out.push('|');
        }
        out.push(char::from_digit(u32::from(*code), 10).unwrap_or('?'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[(usize, Mark)]) -> Board {
        cells.iter().copied().collect()
    }

    mod placement {
        use super::*;

        #[test]
        fn test_place_on_empty_cell() {
            let mut b = Board::new();
            assert!(b.is_cell_empty(4));
            b.place_mark(Mark::X, 4).unwrap();
            assert_eq!(b.cell(4), Some(Mark::X));
            assert!(!b.is_cell_empty(4));
        }

        #[test]
        fn test_place_on_occupied_cell_leaves_board_unchanged() {
            let mut b = board(&[(0, Mark::O)]);
            let before = b.clone();
            assert_eq!(
                b.place_mark(Mark::X, 0),
                Err(PlacementError::Occupied { index: 0 })
            );
            assert_eq!(b, before);
        }

        #[test]
        fn test_place_out_of_range_leaves_board_unchanged() {
            let mut b = Board::new();
            assert_eq!(
                b.place_mark(Mark::X, CELL_COUNT),
                Err(PlacementError::OutOfRange { index: CELL_COUNT })
            );
            assert_eq!(b, Board::EMPTY);
        }

        #[test]
        fn test_is_cell_empty_out_of_range() {
            let b = Board::new();
            assert!(!b.is_cell_empty(CELL_COUNT));
            assert!(!b.is_cell_empty(usize::MAX));
            assert_eq!(b.cell(usize::MAX), None);
        }
    }

    mod state {
        use super::*;

        #[test]
        fn test_empty_cells() {
            let b = board(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
            assert_eq!(b.empty_cells().as_slice(), &[1, 2, 3, 5, 6, 7]);
        }

        #[test]
        fn test_encoded_cells_relative_to_viewer() {
            let b = board(&[(0, Mark::X), (1, Mark::O)]);
            assert_eq!(b.encoded_cells(Mark::X), [1, 2, 0, 0, 0, 0, 0, 0, 0]);
            assert_eq!(b.encoded_cells(Mark::O), [2, 1, 0, 0, 0, 0, 0, 0, 0]);
        }

        #[test]
        fn test_is_full() {
            assert!(!Board::new().is_full());
            let full = (0..CELL_COUNT)
                .map(|i| (i, if i % 2 == 0 { Mark::X } else { Mark::O }))
                .collect::<Board>();
            assert!(full.is_full());
            assert!(full.empty_cells().is_empty());
        }

        #[test]
        fn test_format_encoded() {
            let b = board(&[(0, Mark::X), (5, Mark::O)]);
            assert_eq!(format_encoded(&b.encoded_cells(Mark::X)), "100|002|000");
        }
    }

    mod winner {
        use super::*;

        #[test]
        fn test_no_winner_on_empty_board() {
            assert_eq!(Board::new().winner(), None);
        }

        #[test]
        fn test_every_line_wins() {
            for line in LINES {
                let b = line.iter().map(|&i| (i, Mark::O)).collect::<Board>();
                assert_eq!(b.winner(), Some(Mark::O), "line {line:?}");
            }
        }

        #[test]
        fn test_mixed_line_does_not_win() {
            let b = board(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
            assert_eq!(b.winner(), None);
        }

        #[test]
        fn test_draw_position_has_no_winner() {
            // X O X
            // X O O
            // O X X
            let marks = [
                Mark::X,
                Mark::O,
                Mark::X,
                Mark::X,
                Mark::O,
                Mark::O,
                Mark::O,
                Mark::X,
                Mark::X,
            ];
            let b = marks.into_iter().enumerate().collect::<Board>();
            assert!(b.is_full());
            assert_eq!(b.winner(), None);
        }
    }

    #[test]
    fn test_render() {
        let b = board(&[(0, Mark::X), (4, Mark::O)]);
        let expected = "\
┌─┬─┬─┐
│X│ │ │
├─┼─┼─┤
│ │O│ │
├─┼─┼─┤
│ │ │ │
└─┴─┴─┘";
        assert_eq!(b.to_string(), expected);
        assert!(b.render(|_| '@').contains('@'));
    }
}
