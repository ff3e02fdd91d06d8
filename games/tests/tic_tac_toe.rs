use games::*;
use mcts::{Game, Moves, Search, SearchConfig};

#[test]
fn row_win() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[0, 3, 1, 4, 2])?;
    assert_eq!(game.winner(), Some(Player::First));
    assert!(game.possible_moves().is_empty());
    Ok(())
}

#[test]
fn diagonal_win() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[1, 2, 0, 4, 3, 6])?;
    assert_eq!(game.winner(), Some(Player::Second));
    Ok(())
}

#[test]
fn full_board_draw() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8])?;
    assert!(game.is_full());
    assert_eq!(game.winner(), None);
    assert_eq!(game.possible_moves(), Moves::Decision(vec![]));
    Ok(())
}

#[test]
fn illegal_moves() {
    assert_eq!(TicTacToe::from_moves(&[4, 4]), Err(IllegalMove::Occupied(4)));
    assert_eq!(TicTacToe::from_moves(&[9]), Err(IllegalMove::OutOfBounds(9)));
    assert_eq!(
        TicTacToe::from_moves(&[0, 3, 1, 4, 2, 5]),
        Err(IllegalMove::GameOver)
    );
}

#[test]
fn display() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[4, 0])?;
    assert_eq!(game.to_string(), "o . .\n. x .\n. . .\n");
    Ok(())
}

#[test]
fn win_in_one() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[0, 3, 1, 4])?;
    for seed in 0..10 {
        let mut search = Search::seeded(game.clone(), SearchConfig::default(), seed);
        let cell = search.select_move().unwrap();
        let mut after = game.clone();
        after.try_play(cell)?;
        assert_eq!(after.winner(), Some(Player::First));
    }
    Ok(())
}

#[test]
fn block_threat() -> PlayResult<()> {
    // x holds 0 and 1, o has to take 2.
    let game = TicTacToe::from_moves(&[0, 4, 1])?;
    for seed in 0..10 {
        let mut search = Search::seeded(game.clone(), SearchConfig::default(), seed);
        assert_eq!(search.select_move(), Ok(2));
    }
    Ok(())
}

#[test]
fn block_threat_with_few_rounds() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[0, 4, 1])?;
    let blocked = (0..500)
        .filter(|&seed| {
            let mut search = Search::seeded(game.clone(), SearchConfig::with_rounds(100), seed);
            search.select_move() == Ok(2)
        })
        .count();
    // At least 95% of searches find the block.
    assert!(blocked >= 475, "blocked only {blocked} of 500 times");
    Ok(())
}

#[test]
fn root_statistics() -> PlayResult<()> {
    let game = TicTacToe::from_moves(&[4])?;
    let mut search = Search::seeded(game, SearchConfig::with_rounds(500), 3);
    search.select_move().unwrap();
    let stats = search.move_stats();
    assert_eq!(stats.len(), 8);
    assert_eq!(stats.iter().map(|s| s.stats.visits).sum::<u32>(), 500);
    assert!(stats.iter().all(|s| (0.0..=1.0).contains(&s.win_rate)));
    Ok(())
}
