use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, print_board, random_board, AiPlayer, ConsolePlayer, Game, GameStatus,
    BOARD_SIZE, FLEET_LENGTHS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play both sides.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn greet() {
    println!("============================");
    println!("||       Sea Battle       ||");
    println!("============================");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => {
            greet();
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let own = random_board(&mut rng, BOARD_SIZE, &FLEET_LENGTHS, false);
            let enemy = random_board(&mut rng, BOARD_SIZE, &FLEET_LENGTHS, true);
            let mut game = Game::new(
                Box::new(ConsolePlayer::new()),
                own,
                Box::new(AiPlayer::new()),
                enemy,
            );
            while game.status() == GameStatus::InProgress {
                if game.current_side() == 0 {
                    println!("\nYour board:");
                    print_board(game.board(0));
                    println!("\nOpponent board:");
                    print_board(game.board(1));
                }
                game.step(&mut rng);
            }
            match game.status() {
                GameStatus::PlayerOneWins => println!("\nYou win!"),
                GameStatus::PlayerTwoWins => println!("\nThe computer wins."),
                GameStatus::InProgress => unreachable!(),
            }
        }
        Commands::Auto { seed } => {
            greet();
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let board_one = random_board(&mut rng, BOARD_SIZE, &FLEET_LENGTHS, false);
            let board_two = random_board(&mut rng, BOARD_SIZE, &FLEET_LENGTHS, false);
            let mut game = Game::new(
                Box::new(AiPlayer::new()),
                board_one,
                Box::new(AiPlayer::new()),
                board_two,
            );
            let status = game.run(&mut rng);
            println!("\nPlayer one board:");
            print_board(game.board(0));
            println!("\nPlayer two board:");
            print_board(game.board(1));
            match status {
                GameStatus::PlayerOneWins => println!("\nPlayer one wins."),
                GameStatus::PlayerTwoWins => println!("\nPlayer two wins."),
                GameStatus::InProgress => unreachable!(),
            }
        }
    }

    Ok(())
}
