//! Tests for the computer's move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use streak_tictactoe::heuristic::{adjacent_fill, near_complete_line};
use streak_tictactoe::{
    Board, HeuristicMode, Mark, Position, RecognizedLines, Square, Tier, WINNING_LINES,
    choose_move,
};

fn line(numbers: [i64; 3]) -> streak_tictactoe::WinningLine {
    *WINNING_LINES
        .iter()
        .find(|l| l.numbers() == numbers)
        .expect("known line")
}

#[test]
fn test_empty_recognized_lines_still_move() {
    let board = Board::new();
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen =
            choose_move(&board, &RecognizedLines::none(), HeuristicMode::Faithful, &mut rng)
                .unwrap();
        assert!(board.is_empty(chosen.position));
        // No computer marks yet, so adjacency never applies.
        assert_eq!(chosen.tier, Tier::Random);
    }
}

#[test]
fn test_blocks_player_near_win() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::Player).unwrap();
    board.place(Position::TopCenter, Mark::Player).unwrap();
    let recognized = RecognizedLines::new(vec![line([1, 2, 3])]);
    let mut rng = StdRng::seed_from_u64(0);
    let chosen = choose_move(&board, &recognized, HeuristicMode::Faithful, &mut rng).unwrap();
    assert_eq!(chosen.position, Position::TopRight);
    assert_eq!(chosen.tier, Tier::NearCompleteLine);
}

#[test]
fn test_completes_own_line() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::Computer).unwrap();
    board.place(Position::Center, Mark::Computer).unwrap();
    board.place(Position::TopCenter, Mark::Player).unwrap();
    board.place(Position::MiddleLeft, Mark::Player).unwrap();
    let recognized = RecognizedLines::new(vec![line([1, 5, 9])]);
    let mut rng = StdRng::seed_from_u64(0);
    let chosen = choose_move(&board, &recognized, HeuristicMode::Faithful, &mut rng).unwrap();
    assert_eq!(chosen.position, Position::BottomRight);
}

/// Computer holds 1 and 2 (wins at 3); player holds 4, 5 and 9 (wins at 6).
fn win_or_block_board() -> Board {
    let mut board = Board::new();
    for pos in [Position::MiddleLeft, Position::Center, Position::BottomRight] {
        board.place(pos, Mark::Player).unwrap();
    }
    for pos in [Position::TopLeft, Position::TopCenter] {
        board.place(pos, Mark::Computer).unwrap();
    }
    board
}

#[test]
fn test_scan_order_decides_between_block_and_win() {
    let board = win_or_block_board();
    let win = line([1, 2, 3]);
    let block = line([4, 5, 6]);

    let block_first = RecognizedLines::new(vec![block, win]);
    assert_eq!(
        near_complete_line(&board, &block_first, HeuristicMode::Faithful),
        Some(Position::MiddleRight)
    );

    let win_first = RecognizedLines::new(vec![win, block]);
    assert_eq!(
        near_complete_line(&board, &win_first, HeuristicMode::Faithful),
        Some(Position::TopRight)
    );
}

#[test]
fn test_prefer_wins_completes_before_blocking() {
    let board = win_or_block_board();
    let block_first = RecognizedLines::new(vec![line([4, 5, 6]), line([1, 2, 3])]);
    let mut rng = StdRng::seed_from_u64(4);
    let chosen = choose_move(&board, &block_first, HeuristicMode::PreferWins, &mut rng).unwrap();
    assert_eq!(chosen.position, Position::TopRight);
    assert_eq!(chosen.tier, Tier::NearCompleteLine);
}

#[test]
fn test_prefer_wins_still_blocks() {
    let mut board = Board::new();
    board.place(Position::BottomLeft, Mark::Player).unwrap();
    board.place(Position::BottomCenter, Mark::Player).unwrap();
    board.place(Position::Center, Mark::Computer).unwrap();
    let recognized = RecognizedLines::new(vec![line([7, 8, 9])]);
    assert_eq!(
        near_complete_line(&board, &recognized, HeuristicMode::PreferWins),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_repeated_lines_are_harmless() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::Player).unwrap();
    board.place(Position::MiddleLeft, Mark::Player).unwrap();
    let l = line([1, 4, 7]);
    let recognized = RecognizedLines::new(vec![l, l, l, l, l, l]);
    assert_eq!(
        near_complete_line(&board, &recognized, HeuristicMode::Faithful),
        Some(Position::BottomLeft)
    );
}

#[test]
fn test_adjacency_places_next_to_own_mark() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Mark::Computer).unwrap();
    board.place(Position::BottomRight, Mark::Player).unwrap();
    let mut adjacent = 0;
    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen =
            choose_move(&board, &RecognizedLines::none(), HeuristicMode::Faithful, &mut rng)
                .unwrap();
        assert_eq!(board.get(chosen.position), Square::Empty);
        if chosen.tier == Tier::Adjacency {
            adjacent += 1;
            // From cell 1 only +1, +3, +4 and +2 stay on the board.
            assert!(matches!(chosen.position.number(), 2 | 3 | 4 | 5));
        }
    }
    assert!(adjacent > 0, "one sample in nine lands on the computer's cell");
}

#[test]
fn test_blocked_neighbours_fall_through_to_random() {
    // Edge cell 2 reaches 1, 3 and 5; all are taken.
    let mut board = Board::new();
    board.place(Position::TopCenter, Mark::Computer).unwrap();
    for pos in [Position::TopLeft, Position::TopRight, Position::Center] {
        board.place(pos, Mark::Player).unwrap();
    }

    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen =
            choose_move(&board, &RecognizedLines::none(), HeuristicMode::Faithful, &mut rng)
                .unwrap();
        assert_eq!(chosen.tier, Tier::Random, "seed {seed}");
        assert!(board.is_empty(chosen.position));
    }

    // Freeing one neighbour lets the same mark produce adjacency moves.
    let mut open = Board::new();
    open.place(Position::TopCenter, Mark::Computer).unwrap();
    for pos in [Position::TopLeft, Position::TopRight] {
        open.place(pos, Mark::Player).unwrap();
    }
    let tiers: Vec<Tier> = (0..300)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let chosen =
                choose_move(&open, &RecognizedLines::none(), HeuristicMode::Faithful, &mut rng)
                    .unwrap();
            if chosen.tier == Tier::Adjacency {
                assert_eq!(chosen.position, Position::Center);
            }
            chosen.tier
        })
        .collect();
    assert!(tiers.contains(&Tier::Adjacency));
    assert!(tiers.contains(&Tier::Random));
}

#[test]
fn test_adjacent_fill_none_without_computer_marks() {
    let mut board = Board::new();
    board.place(Position::Center, Mark::Player).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..100 {
        assert_eq!(adjacent_fill(&board, &mut rng), None);
    }
}

#[test]
fn test_sampled_lines_always_give_legal_moves() {
    // Random games between two heuristic computers never pick a taken cell.
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let recognized = RecognizedLines::sample(&mut rng);
        let mut board = Board::new();
        let mut mark = Mark::Player;
        while !streak_tictactoe::outcome(&board).is_terminal() {
            let chosen =
                choose_move(&board, &recognized, HeuristicMode::Faithful, &mut rng).unwrap();
            board.place(chosen.position, mark).unwrap();
            mark = mark.opponent();
        }
    }
}
