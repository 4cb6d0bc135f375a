use std::env;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokeka_search::{
    app::App,
    catalog::Catalog,
    clipboard::Clipboard,
    config::{self, LOG_DIR, LOG_FILE, TICK_RATE_MS},
    error::Result,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

fn setup_logging() -> Result<()> {
    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE);

    // Debug builds log debug and higher, release builds info and higher
    let env_filter = if cfg!(debug_assertions) {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .init();

    info!("Logging system initialized");
    debug!("Debug logging {}", if cfg!(debug_assertions) { "enabled" } else { "disabled" });

    Ok(())
}

fn main() -> Result<()> {
    setup_logging()?;
    info!("Starting pokeka search");

    let config = config::parse_args(env::args().skip(1))?;
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    // External clipboard tools run on this runtime's blocking pool.
    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(
        catalog,
        config.lang_mode,
        Clipboard::detect(),
        runtime.handle().clone(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, Duration::from_millis(TICK_RATE_MS));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Give in-flight clipboard writes a chance to report.
    app.poll_clipboard();
    runtime.shutdown_timeout(Duration::from_millis(500));

    if let Err(err) = res {
        error!("Application error: {}", err);
        println!("Error: {}", err);
    }

    info!("Application terminated");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.render(f))?;
        app.flush_terminal_clipboard(terminal.backend_mut());

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Utc::now());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
