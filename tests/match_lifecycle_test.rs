//! Round lifecycle, scoring and turn order through the match controller.

use strictly_rounds::{
    Board, Mark, Match, MoveEffect, MoveRejection, Position, RoundPhase, apply_move,
};

fn play_all(game: &mut Match, indices: &[usize]) {
    for &index in indices {
        game.play(index).expect("scripted move is legal");
    }
}

#[test]
fn test_top_row_win_scores_once() {
    let mut game = Match::new(Mark::X);
    play_all(&mut game, &[0, 3, 1, 4]);
    let effect = game.play(2).expect("winning move is legal");

    let MoveEffect::Won(win) = effect else {
        panic!("expected a win, got {effect:?}");
    };
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.indices(), [0, 1, 2]);
    assert_eq!(game.phase(), RoundPhase::RoundWon);
    assert_eq!(*game.scoreboard().x_wins(), 1);
    assert_eq!(*game.scoreboard().o_wins(), 0);
    assert_eq!(*game.scoreboard().draws(), 0);
    assert_eq!(game.snapshot().status(), "X takes the round!");
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut game = Match::new(Mark::X);
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.clone();

    assert_eq!(game.play(8), Err(MoveRejection::RoundOver));
    assert_eq!(game, before);
    assert_eq!(game.scoreboard().rounds_played(), 1);
}

#[test]
fn test_draw_through_controller_with_o_starting() {
    let mut game = Match::new(Mark::O);
    play_all(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7]);
    let effect = game.play(8).expect("last square is free");

    assert_eq!(effect, MoveEffect::Draw);
    assert_eq!(game.phase(), RoundPhase::RoundDraw);
    assert_eq!(*game.scoreboard().draws(), 1);
    assert_eq!(game.scoreboard().rounds_played(), 1);
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.snapshot().status(), "It's a draw.");
}

#[test]
fn test_draw_with_explicit_marks() {
    let marks = [
        Mark::X,
        Mark::O,
        Mark::X,
        Mark::O,
        Mark::X,
        Mark::O,
        Mark::O,
        Mark::X,
        Mark::O,
    ];
    let mut board = Board::new();
    let mut last = None;
    for (index, mark) in marks.into_iter().enumerate() {
        let application = apply_move(&board, index, mark, None).expect("square is free");
        board = *application.board();
        last = Some(*application.effect());
    }
    assert_eq!(last, Some(MoveEffect::Draw));
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut game = Match::new(Mark::X);
    game.play(4).expect("center is free");
    let before = game.clone();

    assert_eq!(game.play(4), Err(MoveRejection::SquareOccupied(Position::Center)));
    assert_eq!(game.play(9), Err(MoveRejection::OutOfBounds(9)));
    assert_eq!(game, before);
    assert_eq!(game.current_mark(), Mark::O);
}

#[test]
fn test_turns_alternate_from_starter() {
    let mut game = Match::new(Mark::X);
    let mut seen = Vec::new();
    for index in [0, 4, 8, 2] {
        seen.push(game.current_mark());
        game.play(index).expect("square is free");
    }
    assert_eq!(seen, vec![Mark::X, Mark::O, Mark::X, Mark::O]);

    let marks: Vec<Mark> = game.history().iter().map(|m| m.mark).collect();
    assert_eq!(marks, seen);
}

#[test]
fn test_next_round_alternates_and_keeps_score() {
    let mut game = Match::new(Mark::X);
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(game.start_next_round(None), Mark::O);
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.phase(), RoundPhase::AwaitingMove);
    assert_eq!(*game.scoreboard().x_wins(), 1);
    assert!(game.history().is_empty());

    assert_eq!(game.start_next_round(None), Mark::X);
    assert_eq!(game.start_next_round(Some(Mark::X)), Mark::X);
}

#[test]
fn test_choose_starter_restarts_round() {
    let mut game = Match::new(Mark::X);
    game.play(0).expect("square is free");
    game.choose_starter(Mark::O);

    assert_eq!(game.starting_mark(), Mark::O);
    assert_eq!(game.current_mark(), Mark::O);
    assert!(game.board().is_empty(Position::TopLeft));
    assert_eq!(game.scoreboard().rounds_played(), 0);
}

#[test]
fn test_reset_match_clears_scores_and_restores_default_starter() {
    let mut game = Match::new(Mark::O);
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.start_next_round(None);

    game.reset_match();

    assert_eq!(game.scoreboard().rounds_played(), 0);
    assert_eq!(game.starting_mark(), Mark::O);
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.phase(), RoundPhase::AwaitingMove);
}

#[test]
fn test_moves_after_draw_are_ignored() {
    let mut game = Match::new(Mark::O);
    play_all(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);
    assert_eq!(game.phase(), RoundPhase::RoundDraw);
    let before = game.clone();

    assert_eq!(game.play(4), Err(MoveRejection::SquareOccupied(Position::Center)));
    assert_eq!(game.play(9), Err(MoveRejection::OutOfBounds(9)));
    assert_eq!(game, before);
    assert_eq!(*game.scoreboard().draws(), 1);
    assert_eq!(game.current_mark(), Mark::O);
}

#[test]
fn test_choose_starter_after_finished_round() {
    let mut game = Match::new(Mark::X);
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.phase(), RoundPhase::RoundWon);

    game.choose_starter(Mark::X);

    assert_eq!(game.starting_mark(), Mark::X);
    assert_eq!(game.current_mark(), Mark::X);
    assert_eq!(game.phase(), RoundPhase::AwaitingMove);
    assert!(game.history().is_empty());
    assert_eq!(*game.scoreboard().x_wins(), 1);

    play_all(&mut game, &[1, 0, 3, 2, 5, 4, 6, 7, 8]);
    assert_eq!(game.phase(), RoundPhase::RoundDraw);
    game.choose_starter(Mark::O);
    assert_eq!(game.current_mark(), Mark::O);
    assert!(game.board().is_empty(Position::Center));
    assert_eq!(game.scoreboard().rounds_played(), 2);
}

#[test]
fn test_o_win_scores_only_o() {
    let mut game = Match::new(Mark::X);
    play_all(&mut game, &[0, 3, 1, 4, 8]);
    let effect = game.play(5).expect("winning move is legal");

    let MoveEffect::Won(win) = effect else {
        panic!("expected a win, got {effect:?}");
    };
    assert_eq!(win.mark, Mark::O);
    assert_eq!(win.indices(), [3, 4, 5]);
    assert_eq!(*game.scoreboard().o_wins(), 1);
    assert_eq!(*game.scoreboard().x_wins(), 0);
    assert_eq!(*game.scoreboard().draws(), 0);
    assert_eq!(game.current_mark(), Mark::O);
    assert_eq!(game.snapshot().status(), "O takes the round!");
}
