use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_n::ai::{Agent, HumanAgent};
use connect_n::config::AppConfig;
use connect_n::game::Session;
use connect_n::ui::{console, App};

/// Play Connect N against minimax bots.
#[derive(Parser)]
#[command(name = "connect-n", about = "Three-player Connect N")]
struct Cli {
    /// Counters in a row needed to win (2-7, anything else plays as 4)
    run_length: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-n.toml")]
    config: PathBuf,

    /// Plain console game on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Replace every human seat with a bot
    #[arg(long)]
    bots_only: bool,

    /// Print the resulting configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(run_length) = cli.run_length {
        app_config.game.run_length = run_length;
    }
    if cli.bots_only {
        app_config.game.bots_only();
    }
    if cli.print_config {
        print!("{}", app_config.to_toml()?);
        return Ok(());
    }
    let run_length = app_config.game.effective_run_length();

    if cli.headless {
        let agents = app_config
            .game
            .build_agents(|| Box::new(HumanAgent::stdio()) as Box<dyn Agent>);
        let session = Session::new(run_length, agents).context("seating players")?;
        run_console(session)
    } else {
        let agents = app_config
            .game
            .build_agents(|| Box::new(HumanAgent::detached()) as Box<dyn Agent>);
        let session = Session::new(run_length, agents).context("seating players")?;
        run_tui(session)
    }
}

/// Line-based game: the board after every round, the result at the end.
fn run_console(mut session: Session) -> Result<()> {
    let mut stdout = io::stdout();
    let human = session
        .seats()
        .iter()
        .find(|seat| seat.agent.is_human())
        .map(|seat| seat.symbol);
    let last_seat = session.seats().last().map(|seat| seat.symbol);
    let run_length = session.state().board().run_length();

    writeln!(stdout, "{}", console::welcome_message(run_length, session.seats()))?;
    writeln!(stdout, "{}", session.state().board())?;

    let outcome = session.play(|state, turn| {
        if turn.outcome.is_some() || Some(turn.player) == last_seat {
            println!("{}", state.board());
        }
    })?;

    writeln!(stdout, "{}", console::game_over_message(outcome, human))?;
    Ok(())
}

fn run_tui(session: Session) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal even if the game loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    Ok(res?)
}
