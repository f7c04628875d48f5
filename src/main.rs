#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    clear_screen, init_logging, pause, print_board, print_fleet_catalog, print_stats,
    prompt_guess, prompt_play_again, Board, GameSession, GameStatus, GuessResult, BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (games will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    // Explicit replay loop; every iteration builds a fresh board and session.
    loop {
        play_game(&mut rng)?;
        if !prompt_play_again() {
            println!("Thanks for playing!");
            break;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play_game(rng: &mut SmallRng) -> anyhow::Result<()> {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("    WELCOME TO BATTLESHIPS!");
    println!("{}", rule);
    println!("\nRules:");
    println!("- Find and sink all enemy ships");
    println!("- Enter coordinates as 'row col' (e.g., '3 5')");
    println!("- Coordinates range from 1 to {}", BOARD_SIZE);
    println!("- 'X' = Hit, 'O' = Miss, '~' = Water");
    println!("- Board size: {}x{}", BOARD_SIZE, BOARD_SIZE);
    println!("- Ships to find:");
    print_fleet_catalog();
    pause("\nPress Enter to start the game...");

    let mut board = Board::new();
    let report = board.place_fleet(rng);
    for name in report.unplaced.iter().flatten() {
        println!("Warning: {} could not be placed; the fleet will be smaller.", name);
    }
    println!(
        "\nAll ships have been placed! You need to sink {} ship parts.",
        report.placed_cells
    );
    pause("Press Enter to continue...");

    let mut session = GameSession::new(board);
    loop {
        clear_screen();
        println!("{}", rule);
        println!("    BATTLESHIPS - Your Guesses");
        println!("{}", rule);
        print_board(session.board(), false);
        print_stats(&session.stats());
        println!("\nShip parts remaining: {}", session.remaining_ship_cells());

        if session.status() == GameStatus::Won {
            println!("\n{}", rule);
            println!("    CONGRATULATIONS! YOU WON!");
            println!("{}", rule);
            println!("You sank all ships in {} turns!", session.stats().turns);
            print_stats(&session.stats());
            break;
        }

        let (row, col) = prompt_guess();
        let result = session
            .resolve_guess(row, col)
            .map_err(|e| anyhow::anyhow!(e))?;
        match result {
            GuessResult::Hit => println!("HIT! Great shot!"),
            GuessResult::Miss => println!("Miss! Try again."),
            GuessResult::AlreadyGuessed => {
                println!("You already guessed that position! Try again.")
            }
        }
        pause("Press Enter to continue...");
    }

    println!("\nFinal board with all ships revealed:");
    print_board(session.board(), true);
    Ok(())
}
