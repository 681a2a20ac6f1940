use chip_table::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::fs::{self, File};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Debug-level log to `logs/chip-table-<unix-secs>.log`. The terminal belongs to the TUI,
/// so nothing is logged to it.
fn init_logging() -> io::Result<()> {
    fs::create_dir_all("logs")?;
    let secs = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    let file = File::create(format!("logs/chip-table-{secs}.log"))?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "chip-table needs a real terminal (TTY).\nRun it in a terminal and press q to quit. Version: {}",
            chip_table::VERSION
        );
        return Ok(());
    }
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }
    log::info!("chip-table {} starting", chip_table::VERSION);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!("chip-table exiting");
    res
}
