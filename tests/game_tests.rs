use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_board, AiPlayer, Board, Coord, Game, GameStatus, Orientation, Player, Ship,
    BOARD_SIZE, FLEET_LENGTHS,
};

/// Test player that replays a fixed shot list.
struct ScriptedPlayer {
    shots: Vec<Coord>,
    next: usize,
}

impl ScriptedPlayer {
    fn new(shots: Vec<Coord>) -> Self {
        Self { shots, next: 0 }
    }
}

impl Player for ScriptedPlayer {
    fn choose_target(&mut self, _rng: &mut SmallRng, _opponent: &Board) -> Coord {
        let coord = self.shots[self.next % self.shots.len()];
        self.next += 1;
        coord
    }
}

fn one_ship_board(size: i32, head: Coord, length: u32) -> Board {
    let mut board = Board::new(size, false);
    board
        .place_ship(Ship::new(head, length, Orientation::Down))
        .unwrap();
    board.reset_shot_history();
    board
}

#[test]
fn ai_vs_ai_game_terminates() {
    let mut rng = SmallRng::seed_from_u64(123);
    let board_one = random_board(&mut rng, BOARD_SIZE, &FLEET_LENGTHS, false);
    let board_two = random_board(&mut rng, BOARD_SIZE, &FLEET_LENGTHS, false);
    let mut game = Game::new(
        Box::new(AiPlayer::new()),
        board_one,
        Box::new(AiPlayer::new()),
        board_two,
    );
    let mut steps = 0;
    while game.status() == GameStatus::InProgress {
        game.step(&mut rng);
        steps += 1;
        assert!(steps <= 200, "game took too many steps");
    }
    assert_ne!(game.status(), GameStatus::InProgress);
}

#[test]
fn single_cell_fleets_finish_within_bounds() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut game = Game::new(
        Box::new(AiPlayer::new()),
        one_ship_board(2, Coord::new(0, 0), 1),
        Box::new(AiPlayer::new()),
        one_ship_board(2, Coord::new(1, 1), 1),
    );
    let status = game.run(&mut rng);
    assert!(matches!(
        status,
        GameStatus::PlayerOneWins | GameStatus::PlayerTwoWins
    ));
}

#[test]
fn hit_earns_an_extra_turn() {
    let mut rng = SmallRng::seed_from_u64(1);
    let shooter = ScriptedPlayer::new(vec![Coord::new(0, 0), Coord::new(1, 0)]);
    let mut game = Game::new(
        Box::new(shooter),
        one_ship_board(4, Coord::new(3, 3), 1),
        Box::new(AiPlayer::new()),
        one_ship_board(4, Coord::new(0, 0), 2),
    );

    // first shot hits without sinking: player one keeps the turn
    game.step(&mut rng);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_side(), 0);

    // second shot sinks the only enemy ship: player one wins, player two
    // never acted
    game.step(&mut rng);
    assert_eq!(game.status(), GameStatus::PlayerOneWins);
}

#[test]
fn miss_passes_the_turn() {
    let mut rng = SmallRng::seed_from_u64(2);
    let shooter = ScriptedPlayer::new(vec![Coord::new(3, 3)]);
    let mut game = Game::new(
        Box::new(shooter),
        one_ship_board(4, Coord::new(0, 0), 1),
        Box::new(AiPlayer::new()),
        one_ship_board(4, Coord::new(0, 0), 1),
    );
    assert_eq!(game.current_side(), 0);
    game.step(&mut rng);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_side(), 1);
}

#[test]
fn rejected_shots_cost_nothing() {
    let mut rng = SmallRng::seed_from_u64(3);
    // off-grid, then a repeat of an exclusion-free miss, then a fresh cell
    let mut shooter = ScriptedPlayer::new(vec![
        Coord::new(10, 10),
        Coord::new(-1, 0),
        Coord::new(3, 3),
    ]);
    let mut board = one_ship_board(4, Coord::new(0, 0), 1);
    let extra = shooter.take_turn(&mut rng, &mut board);
    assert!(!extra);
    // only the accepted shot is recorded
    assert!(board.is_busy(Coord::new(3, 3)));
    assert!(!board.is_busy(Coord::new(0, 1)));
}

#[test]
fn finished_game_ignores_further_steps() {
    let mut rng = SmallRng::seed_from_u64(4);
    let shooter = ScriptedPlayer::new(vec![Coord::new(0, 0)]);
    let mut game = Game::new(
        Box::new(shooter),
        one_ship_board(4, Coord::new(2, 2), 1),
        Box::new(AiPlayer::new()),
        one_ship_board(4, Coord::new(0, 0), 1),
    );
    game.step(&mut rng);
    assert_eq!(game.status(), GameStatus::PlayerOneWins);
    game.step(&mut rng);
    assert_eq!(game.status(), GameStatus::PlayerOneWins);
}
