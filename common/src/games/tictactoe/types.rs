use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    TwoPlayer,
    #[default]
    HumanVsAi,
}

impl Mode {
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::TwoPlayer => Mode::HumanVsAi,
            Mode::HumanVsAi => Mode::TwoPlayer,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::TwoPlayer => write!(f, "two players"),
            Mode::HumanVsAi => write!(f, "human vs AI"),
        }
    }
}

/// Three board indexes forming a winning pattern, sorted from least to greatest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn indexes(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win { mark: Mark, line: WinLine },
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Reasons a move can be rejected. The engine state is left untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    RoundOver,
    OutOfRange(usize),
    Occupied(usize),
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::RoundOver => write!(f, "the round is already over"),
            InvalidMove::OutOfRange(index) => write!(f, "cell {} is outside the board", index),
            InvalidMove::Occupied(index) => write!(f, "cell {} is already marked", index),
        }
    }
}

impl std::error::Error for InvalidMove {}
