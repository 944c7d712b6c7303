//! The computer's move selection.
//!
//! Three tiers, first applicable wins:
//!
//! 1. A recognized line with two cells held by one side and the third empty
//!    gets the empty cell. Blocking and completing share one scan, so the
//!    line that comes first in [`RecognizedLines`] decides.
//! 2. One random cell is sampled; if the computer holds it, a shuffled set
//!    of index offsets is tried for an empty neighbour.
//! 3. Random empty cell.
//!
//! The computer is meant to be beatable. [`HeuristicMode::PreferWins`] is
//! the only knob that makes it stronger.

use super::action::MoveError;
use super::recognized::RecognizedLines;
use super::rules::WinningLine;
use super::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Offsets tried from a corner or the center.
pub const DIAGONAL_OFFSETS: [i64; 8] = [-1, 1, -3, 3, -4, 4, 2, -2];

/// Offsets tried from an edge cell.
pub const EDGE_OFFSETS: [i64; 4] = [-1, 1, -3, 3];

/// How tier one orders its two goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum HeuristicMode {
    /// One scan; block or complete, whichever line is met first.
    #[default]
    #[strum(serialize = "faithful")]
    Faithful,
    /// Scan for the computer's own completions before any block.
    #[strum(serialize = "prefer-wins")]
    PreferWins,
}

/// Which tier produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tier {
    /// A recognized line was one cell from complete.
    NearCompleteLine,
    /// Next to an existing computer mark.
    Adjacency,
    /// Random empty cell.
    Random,
}

/// A move chosen by the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    /// Cell to place the computer's mark on.
    pub position: Position,
    /// Tier that chose it.
    pub tier: Tier,
}

/// Picks the computer's next cell.
///
/// # Errors
///
/// Returns [`MoveError::BoardFull`] if no cell is empty.
#[instrument(skip(board, recognized, rng), fields(lines = recognized.len()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    recognized: &RecognizedLines,
    mode: HeuristicMode,
    rng: &mut R,
) -> Result<ComputerMove, MoveError> {
    if board.is_full() {
        return Err(MoveError::BoardFull);
    }

    let chosen = if let Some(position) = near_complete_line(board, recognized, mode) {
        ComputerMove {
            position,
            tier: Tier::NearCompleteLine,
        }
    } else if let Some(position) = adjacent_fill(board, rng) {
        ComputerMove {
            position,
            tier: Tier::Adjacency,
        }
    } else {
        ComputerMove {
            position: random_empty(board, rng),
            tier: Tier::Random,
        }
    };

    debug!(cell = chosen.position.number(), tier = %chosen.tier, "Computer chose cell");
    Ok(chosen)
}

/// Tier one: the first empty cell of the first recognized line in which one
/// side holds two cells and the other side none.
#[instrument(skip(board, recognized))]
pub fn near_complete_line(
    board: &Board,
    recognized: &RecognizedLines,
    mode: HeuristicMode,
) -> Option<Position> {
    match mode {
        HeuristicMode::Faithful => scan(board, recognized, |ac, pc| ac >= 2 || pc >= 2),
        HeuristicMode::PreferWins => scan(board, recognized, |ac, _| ac >= 2)
            .or_else(|| scan(board, recognized, |_, pc| pc >= 2)),
    }
}

fn scan(
    board: &Board,
    recognized: &RecognizedLines,
    fires: impl Fn(usize, usize) -> bool,
) -> Option<Position> {
    recognized.lines().iter().find_map(|line: &WinningLine| {
        let ac = line.count(board, Mark::Computer);
        let pc = line.count(board, Mark::Player);
        if fires(ac, pc) && ac + pc < 3 {
            debug!(line = %line, ac, pc, "Near-complete line");
            line.first_empty(board)
        } else {
            None
        }
    })
}

/// Tier two: a single random sample, then shuffled offsets from it.
#[instrument(skip(board, rng))]
pub fn adjacent_fill<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let start = Position::from_number(rng.random_range(1..=9))?;
    if board.get(start) != super::Square::Occupied(Mark::Computer) {
        return None;
    }

    let mut offsets = if start.is_diagonal_cell() {
        DIAGONAL_OFFSETS.to_vec()
    } else {
        EDGE_OFFSETS.to_vec()
    };
    offsets.shuffle(rng);

    offsets
        .into_iter()
        .filter_map(|offset| start.offset(offset))
        .find(|&pos| board.is_empty(pos))
}

/// Tier three: draws cells until an empty one comes up.
///
/// Loops forever on a full board; [`choose_move`] checks first.
pub fn random_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Position {
    loop {
        if let Some(pos) = Position::from_number(rng.random_range(1..=9))
            && board.is_empty(pos)
        {
            return pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::rules::WINNING_LINES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_full_board_is_error() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::Player } else { Mark::Computer };
            board.place(*pos, mark).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(1);
        let result = choose_move(&board, &RecognizedLines::all(), HeuristicMode::Faithful, &mut rng);
        assert_eq!(result, Err(MoveError::BoardFull));
    }

    #[test]
    fn test_mixed_line_does_not_fire() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Player).unwrap();
        board.place(Position::TopCenter, Mark::Computer).unwrap();
        let recognized = RecognizedLines::new(vec![WINNING_LINES[0]]);
        assert_eq!(near_complete_line(&board, &recognized, HeuristicMode::Faithful), None);
    }

    #[test]
    fn test_unrecognized_line_is_ignored() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Player).unwrap();
        board.place(Position::TopCenter, Mark::Player).unwrap();
        let recognized = RecognizedLines::new(vec![WINNING_LINES[2], WINNING_LINES[5]]);
        assert_eq!(near_complete_line(&board, &recognized, HeuristicMode::Faithful), None);
    }

    #[test]
    fn test_adjacency_only_from_computer_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::Computer).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut hits = 0;
        for _ in 0..500 {
            if let Some(pos) = adjacent_fill(&board, &mut rng) {
                hits += 1;
                assert!(board.is_empty(pos));
                let delta = pos.number() - Position::Center.number();
                assert!(DIAGONAL_OFFSETS.contains(&delta));
            }
        }
        // One cell in nine is the computer's; the center always finds a neighbour.
        assert!(hits > 0);
    }

    #[test]
    fn test_adjacency_edge_uses_edge_offsets() {
        let mut board = Board::new();
        board.place(Position::MiddleLeft, Mark::Computer).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            if let Some(pos) = adjacent_fill(&board, &mut rng) {
                let delta = pos.number() - Position::MiddleLeft.number();
                assert!(EDGE_OFFSETS.contains(&delta), "unexpected offset {delta}");
            }
        }
    }

    #[test]
    fn test_adjacency_gives_up_when_neighbours_taken() {
        let mut board = Board::new();
        // Cell 2 with 1, 3 and 5 taken; 2 - 3 is off the board.
        board.place(Position::TopCenter, Mark::Computer).unwrap();
        board.place(Position::TopLeft, Mark::Player).unwrap();
        board.place(Position::TopRight, Mark::Player).unwrap();
        board.place(Position::Center, Mark::Player).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            assert_eq!(adjacent_fill(&board, &mut rng), None);
        }
        for _ in 0..200 {
            let chosen =
                choose_move(&board, &RecognizedLines::none(), HeuristicMode::Faithful, &mut rng)
                    .unwrap();
            assert_eq!(chosen.tier, Tier::Random);
            assert!(board.is_empty(chosen.position));
        }
    }

    #[test]
    fn test_random_empty_finds_last_cell() {
        let mut board = Board::new();
        for pos in Position::ALL.iter().filter(|&&p| p != Position::BottomCenter) {
            board.place(*pos, Mark::Player).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(13);
        assert_eq!(random_empty(&board, &mut rng), Position::BottomCenter);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(HeuristicMode::Faithful.to_string(), "faithful");
        assert_eq!(HeuristicMode::PreferWins.to_string(), "prefer-wins");
    }
}
