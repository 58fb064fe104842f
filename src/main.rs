mod app;
mod domain;
mod input;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::parse_duration;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "lapse")]
#[command(about = "An interactive terminal countdown timer", long_about = None)]
struct Cli {
    /// Countdown duration, e.g. 1h10m15s
    #[arg(allow_hyphen_values = true)]
    duration: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = match cli.duration {
        Some(raw) if raw != "help" => raw,
        _ => {
            print_usage();
            return Ok(());
        }
    };

    let total = match parse_duration(&raw) {
        Ok(total) => total,
        Err(err) => {
            eprintln!("invalid duration provided: {}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    let completed = run_tui(total)?;
    if completed {
        println!("Time is up!");
    }

    Ok(())
}

fn print_usage() {
    println!("usage: lapse <duration>");
    println!("example: lapse 1h10m15s    # counts down 1 hour 10 minutes and 15 seconds");
}

fn run_tui(total: chrono::Duration) -> Result<bool> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(total);

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<bool> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events, with the time to the next tick as the poll timeout
        let timeout = tick_rate.saturating_sub(app.last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    if input::handle_key(app, key)? {
                        return Ok(false);
                    }
                }
            }
        }

        // Advance the countdown once per elapsed interval
        if app.last_tick.elapsed() >= tick_rate {
            app.tick();
        }

        if app.timer.is_completed() {
            // Draw the final "Time is up!" frame before tearing down
            terminal.draw(|f| ui::render(f, app))?;
            return Ok(true);
        }
    }
}
