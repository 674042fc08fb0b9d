use super::types::{Cell, Mark};

pub const BOARD_WIDTH: usize = 3;
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

/// A 3x3 board. Index 0 is the top left cell, index 8 the bottom right one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// # Panics
    /// Panics if `index >= CELL_COUNT`.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::from(mark);
    }

    /// # Panics
    /// Panics if `index >= CELL_COUNT`.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_WIDTH)
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index).is_some_and(|cell| cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.mark_count(), 0);
        assert!(!board.is_full());
        assert_eq!(get_available_moves(&board), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.mark_count(), 1);
        assert!(!is_valid_move(&board, 4));

        board.clear(4);
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert!(is_valid_move(&board, 4));
    }

    #[test]
    fn test_out_of_range_is_not_valid() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!is_valid_move(&board, 9));
    }

    #[test]
    fn test_rows_are_three_wide() {
        let mut board = Board::new();
        board.place(5, Mark::O);
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[Cell::Empty, Cell::Empty, Cell::O]);
    }
}
