//! Cell positions on the tic-tac-toe board.

use tracing::instrument;

/// A cell on the board, numbered 1-9 in row-major order.
///
/// The number is what the player types and what the heuristic's
/// adjacency offsets are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in cell order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Zero-based board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Cell number as typed by the player (1-9).
    pub fn number(self) -> i64 {
        self.index() as i64 + 1
    }

    /// Grid row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Grid column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a cell number, `None` outside 1-9.
    #[instrument]
    pub fn from_number(number: i64) -> Option<Self> {
        if (1..=9).contains(&number) {
            Self::from_index((number - 1) as usize)
        } else {
            None
        }
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Corners and the center: the cells that lie on a diagonal.
    pub fn is_diagonal_cell(self) -> bool {
        self.number() % 2 == 1
    }

    /// The cell reached by adding `offset` to this cell's number.
    ///
    /// Plain index arithmetic: `TopRight.offset(1)` is `MiddleLeft`.
    pub fn offset(self, offset: i64) -> Option<Self> {
        Self::from_number(self.number() + offset)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
