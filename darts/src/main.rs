mod app;
mod audio;
mod effects;
mod input;
mod logging;
mod screens;

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use darts_core::{Options, Viewport};

use app::App;

const CONFIG_ENV: &str = "DARTS_CONFIG";
const DEFAULT_CONFIG: &str = "darts.toml";
const LOG_FILE: &str = "darts.log";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init(Path::new(LOG_FILE))?;

    let config = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let options = Options::load(&config)?;

    let (width, height) = terminal::size()?;
    let app = App::new(options, Viewport::new(width as i32, height as i32))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> color_eyre::Result<()> {
    let mut last = Instant::now();

    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // ~30fps tick; drain everything that arrived meanwhile
        if event::poll(Duration::from_millis(33))? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        if app.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => app.handle_mouse(mouse),
                    Event::Resize(w, h) => app.handle_resize(w, h),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        if !app.tick(dt)? {
            log::info!("screen stack empty, quitting");
            return Ok(());
        }
    }
}
