use games::*;
use mcts::{Game, Moves, NodeId, Search, SearchConfig};

fn close_race(distance: u8) -> DiceRace {
    let mut game = DiceRace::default();
    game.scores = [game.target - distance; 2];
    game
}

#[test]
fn outcome_frequencies() {
    assert_eq!(roll_outcomes(1), vec![1, 2, 3, 4, 5, 6]);
    let two = roll_outcomes(2);
    assert_eq!(two.len(), 36);
    assert_eq!(two.iter().filter(|&&total| total == 7).count(), 6);
    assert_eq!(two.iter().filter(|&&total| total == 2).count(), 1);
    assert_eq!(two.iter().filter(|&&total| total == 12).count(), 1);
}

#[test]
fn throw_then_roll() -> PlayResult<()> {
    let mut game = DiceRace::default();
    assert_eq!(
        game.possible_moves(),
        Moves::Decision(vec![DiceMove::Throw(1), DiceMove::Throw(2)])
    );
    game.try_play(DiceMove::Throw(2))?;
    let moves = game.possible_moves();
    assert!(moves.is_chance());
    assert_eq!(moves.len(), 36);
    assert_eq!(game.current_player(), Player::First);

    game.try_play(DiceMove::Roll(5))?;
    assert_eq!(game.scores, [5, 0]);
    assert_eq!(game.current_player(), Player::Second);
    assert_eq!(game.distance(Player::First), DEFAULT_TARGET - 5);
    Ok(())
}

#[test]
fn exact_landing_wins() -> PlayResult<()> {
    let mut game = close_race(3);
    game.try_play(DiceMove::Throw(1))?;
    game.try_play(DiceMove::Roll(3))?;
    assert_eq!(game.winner(), Some(Player::First));
    assert!(game.possible_moves().is_empty());
    assert_eq!(game.try_play(DiceMove::Throw(1)), Err(IllegalMove::GameOver));
    Ok(())
}

#[test]
fn overshooting_wastes_the_turn() -> PlayResult<()> {
    let mut game = close_race(3);
    game.try_play(DiceMove::Throw(1))?;
    game.try_play(DiceMove::Roll(5))?;
    assert_eq!(game.winner(), None);
    assert_eq!(game.distance(Player::First), 3);
    assert_eq!(game.to_move, Player::Second);
    Ok(())
}

#[test]
fn illegal_moves() -> PlayResult<()> {
    let mut game = DiceRace::default();
    assert_eq!(game.try_play(DiceMove::Roll(3)), Err(IllegalMove::AwaitingDecision));
    assert_eq!(game.try_play(DiceMove::Throw(3)), Err(IllegalMove::DiceCount(3)));
    game.try_play(DiceMove::Throw(1))?;
    assert_eq!(game.try_play(DiceMove::Throw(1)), Err(IllegalMove::AwaitingRoll));
    assert_eq!(game.try_play(DiceMove::Roll(7)), Err(IllegalMove::ImpossibleRoll(7)));
    Ok(())
}

#[test]
fn display() {
    let game = close_race(4);
    assert_eq!(game.to_string(), "first 8/12, second 8/12, first to move");
    assert_eq!(DiceMove::Throw(1).to_string(), "throw 1 die");
    assert_eq!(DiceMove::Throw(2).to_string(), "throw 2 dice");
    assert_eq!(DiceMove::Roll(9).to_string(), "rolled 9");
}

#[test]
fn one_die_when_close() {
    for distance in 2..=3 {
        for seed in 0..5 {
            let config = SearchConfig::with_rounds(3000);
            let mut search = Search::seeded(close_race(distance), config, seed);
            assert_eq!(search.select_move(), Ok(DiceMove::Throw(1)), "distance {distance}");
        }
    }
}

#[test]
fn throws_lead_to_chance_nodes() {
    let mut search = Search::seeded(DiceRace::default(), SearchConfig::with_rounds(200), 1);
    search.select_move().unwrap();
    let tree = search.tree();
    assert!(!tree.root().is_chance);
    for &child in tree.children(NodeId::ROOT) {
        let node = tree.get(child);
        assert!(node.is_chance);
        let dice = match node.mv {
            Some(DiceMove::Throw(dice)) => dice,
            other => panic!("unexpected root move {other:?}"),
        };
        assert_eq!(tree.children(child).len(), 6usize.pow(dice as u32));
    }
}
