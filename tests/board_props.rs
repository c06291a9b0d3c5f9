use battleship_gym::{Board, Shot, DEFAULT_DIM, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::with_default_fleet(&mut rng).unwrap()
}

fn total_health(board: &Board) -> usize {
    board.ships().iter().map(|s| s.health()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_has_no_overlap_and_stays_in_bounds(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.grid().count_nonzero(), TOTAL_SHIP_CELLS);
        for (idx, ship) in board.ships().iter().enumerate() {
            for (r, c) in ship.footprint() {
                let (r, c) = board.grid().locate(r, c).expect("footprint leaves board");
                prop_assert_eq!(board.grid().get(r, c).unwrap(), idx as i32 + 1);
            }
        }
    }

    #[test]
    fn live_cell_hit_flips_sign_and_costs_one_health(
        seed in any::<u64>(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut board = random_board(seed);
        let live: Vec<_> = board.grid().iter_nonzero().collect();
        let ((r, c), marker) = live[pick.index(live.len())];
        let idx = (marker - 1) as usize;
        let health = board.ships()[idx].health();

        prop_assert_eq!(board.torpedo(r as isize, c as isize).unwrap(), Shot::Hit);
        prop_assert_eq!(board.ships()[idx].health(), health - 1);
        prop_assert_eq!(board.grid().get(r, c).unwrap(), -marker);

        // repeated attacks never cost more health
        prop_assert_eq!(board.torpedo(r as isize, c as isize).unwrap(), Shot::Miss);
        prop_assert_eq!(board.ships()[idx].health(), health - 1);
        prop_assert_eq!(board.score(), 2);
    }

    #[test]
    fn ocean_shot_is_a_miss(seed in any::<u64>(), row in 0..DEFAULT_DIM, col in 0..DEFAULT_DIM) {
        let mut board = random_board(seed);
        prop_assume!(board.grid().get(row, col).unwrap() == 0);
        let health = total_health(&board);
        prop_assert_eq!(board.torpedo(row as isize, col as isize).unwrap(), Shot::Miss);
        prop_assert_eq!(total_health(&board), health);
        prop_assert_eq!(board.grid().get(row, col).unwrap(), 0);
    }

    #[test]
    fn game_over_iff_no_health(seed in any::<u64>(), shots in 0usize..200) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..shots {
            let r = rng.random_range(0..DEFAULT_DIM) as isize;
            let c = rng.random_range(0..DEFAULT_DIM) as isize;
            board.torpedo(r, c).unwrap();
            prop_assert_eq!(board.is_game_over(), total_health(&board) == 0);
        }
        prop_assert_eq!(board.score(), shots);
        let hit_cells = board.grid().iter_nonzero().filter(|(_, v)| *v < 0).count();
        prop_assert_eq!(hit_cells, TOTAL_SHIP_CELLS - total_health(&board));
    }
}
