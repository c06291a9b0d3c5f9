use battleship_gym::{benchmark, Agent, Board, BoardError, FloodHunt, Scorecard};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_scorecard_statistics() {
    let card = Scorecard::from_scores(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
    assert_eq!(card.games, 8);
    assert_eq!(card.mean, 5.0);
    assert_eq!(card.std_dev, 2.0);
    assert_eq!(card.min, 2);
    assert_eq!(card.max, 9);
}

#[test]
fn test_empty_scores_rejected() {
    assert_eq!(Scorecard::from_scores(&[]).unwrap_err(), BoardError::NoGames);
    assert_eq!(benchmark(0, |_| Ok(1)).unwrap_err(), BoardError::NoGames);
}

#[test]
fn test_benchmark_runs_every_game() {
    let mut rng = SmallRng::seed_from_u64(10);
    let mut played = Vec::new();
    let card = benchmark(12, |game| {
        played.push(game);
        let board = Board::with_default_fleet(&mut rng)?;
        Agent::new(board, FloodHunt::new(), SmallRng::seed_from_u64(game as u64))
            .play_until_completion()
    })
    .unwrap();

    assert_eq!(played, (0..12).collect::<Vec<_>>());
    assert_eq!(card.games, 12);
    assert!(card.min >= 17 && card.max <= 100);
    assert!(card.mean >= card.min as f64 && card.mean <= card.max as f64);
}

#[test]
fn test_benchmark_propagates_errors() {
    let err = benchmark(3, |game| {
        if game == 1 {
            Err(BoardError::NoTargetsLeft)
        } else {
            Ok(20)
        }
    })
    .unwrap_err();
    assert_eq!(err, BoardError::NoTargetsLeft);
}
