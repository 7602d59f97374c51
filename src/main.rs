use std::io;
use std::panic;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use wrap_snake::config::{Board, TICKS_PER_SECOND};
use wrap_snake::error::Result;
use wrap_snake::game::GameState;
use wrap_snake::input::{GameInput, InputHandler};
use wrap_snake::renderer;

/// Upper bound on how long one input poll may block; keeps the loop
/// responsive between ticks without busy-waiting.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(15);

#[derive(Debug, Parser)]
struct Cli {
    /// Seed the food-placement RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    install_panic_hook();

    run(cli)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let input = InputHandler::new(INPUT_POLL_INTERVAL);

    let board = Board::standard();
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    };

    let tick_interval = Duration::from_millis(1000 / TICKS_PER_SECOND);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state))?;

        // Quit is a normal control-flow value, not an unwind: break out,
        // let run() return, and tear the terminal down in main().
        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }

            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
