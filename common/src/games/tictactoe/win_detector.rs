use super::board::Board;
use super::types::{Mark, Outcome, WinLine};

/// Rows first, then columns, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Returns the first completed line in [`WIN_LINES`] order.
///
/// A board reached through legal play holds at most one completed line right after a move.
/// Hand-built boards can hold several; the enumeration order then decides which one is reported.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinLine)> {
    let cells = board.cells();
    for line in WIN_LINES {
        let [a, b, c] = line.indexes();
        if let Some(mark) = cells[a].mark()
            && cells[a] == cells[b]
            && cells[b] == cells[c]
        {
            return Some((mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return Outcome::Win { mark, line };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
