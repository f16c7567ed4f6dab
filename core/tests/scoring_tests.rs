use goban_core::{scoring, Color, GameState, Winner};

#[test]
fn new_game_scores_zero_everywhere() {
    let game = GameState::new(9);
    let summary = scoring::score(&game);

    assert_eq!(summary.captured_black, 0);
    assert_eq!(summary.captured_white, 0);
    assert_eq!(summary.black_stones, 0);
    assert_eq!(summary.white_stones, 0);
    assert_eq!(summary.black_points, 0);
    assert_eq!(summary.white_points, 0);
    assert!(!summary.ended);
    assert_eq!(scoring::winner(&game), Winner::Tie);
}

#[test]
fn prisoners_count_toward_the_capturing_side() {
    let mut game = GameState::new(9);

    // White surrounds and captures the lone black stone at (4,4)
    game.place_stone(4, 4).unwrap();
    game.place_stone(3, 4).unwrap();
    game.pass().unwrap();
    game.place_stone(5, 4).unwrap();
    game.pass().unwrap();
    game.place_stone(4, 3).unwrap();
    game.pass().unwrap();
    game.place_stone(4, 5).unwrap();

    let summary = scoring::score(&game);
    assert_eq!(summary.captured_black, 1);
    assert_eq!(summary.black_stones, 0);
    assert_eq!(summary.white_stones, 4);
    assert_eq!(summary.black_points, 0);
    assert_eq!(summary.white_points, 5); // four stones plus one prisoner

    assert_eq!(scoring::points(&game, Color::White), 5);
    assert_eq!(scoring::winner(&game), Winner::WhiteWins);
}

#[test]
fn more_stones_on_board_wins() {
    let mut game = GameState::new(9);
    game.place_stone(0, 0).unwrap(); // B
    game.place_stone(2, 2).unwrap(); // W
    game.place_stone(4, 4).unwrap(); // B

    assert_eq!(scoring::winner(&game), Winner::BlackWins);
}

#[test]
fn equal_points_is_a_tie() {
    let mut game = GameState::new(9);
    game.place_stone(0, 0).unwrap(); // B
    game.place_stone(8, 8).unwrap(); // W
    game.pass().unwrap();
    game.pass().unwrap();

    let summary = scoring::score(&game);
    assert!(summary.ended);
    assert_eq!(summary.black_points, summary.white_points);
    assert_eq!(scoring::winner(&game), Winner::Tie);
}
