//! cherubin: live network monitor for the terminal.
//!
//! Shows, refreshed on a fixed cadence:
//!   - Per-interface upload/download bars with per-tick byte counts
//!   - Per-interface Mbps and packet counts, highlighted by alert tier
//!   - The remote IPs with the most open connections
//!
//! Press `q`, `Esc` or `Ctrl-C` to quit.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    style::Stylize,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cherubin::app::App;
use cherubin::color_scheme::ColorScheme;
use cherubin::config::{Cli, Config};
use cherubin::logging;
use cherubin::system::collector::Collector;
use cherubin::ui::session::run_session;
use cherubin::ui::ticker::TerminalTicker;
use cherubin::ui::TerminalRenderer;

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config.log_file)?;

    // Raw mode first; everything after it is undone by restore_terminal
    enable_raw_mode().context("enabling raw mode")?;
    let result = run_session(setup_terminal, |terminal| run_app(terminal, &config), restore_terminal);

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "dashboard stopped");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    println!("{}", "\nExiting Cherubin...".bold().yellow());
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// Main application loop
fn run_app(terminal: Terminal<CrosstermBackend<io::Stdout>>, config: &Config) -> Result<()> {
    let renderer = TerminalRenderer::new(
        terminal,
        ColorScheme::from_id(config.color_scheme_id),
        &config.log_file,
    );
    let mut app = App::new(config.clone(), Collector::new(), renderer, TerminalTicker);
    app.run()
}
