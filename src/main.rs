use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use tracing::error;
use tracing_subscriber::EnvFilter;

use bx::app::App;
use bx::browser::{self, Discovery};
use bx::config;
use bx::error::Error;
use bx::frame;
use bx::launch;
use bx::profiles::{clean_work_dir, default_root, ProfileStore};
use bx::screens;
use bx::theme::ThemeTokens;
use bx::view::View;

#[derive(Parser, Debug)]
#[command(name = "bx", version, about = "Manage and launch Chromium browser profiles")]
struct Cli {
    /// Subcommands bypass the TUI; with none, the interactive menu opens
    #[command(subcommand)]
    cmd: Option<BxCmd>,
}

#[derive(Subcommand, Debug)]
enum BxCmd {
    /// Launch the browser with a profile
    Launch {
        /// Profile name
        #[arg(long, default_value = "default")]
        profile: String,
    },
    /// Clear a profile's browsing data
    Clean {
        /// Profile name
        #[arg(long, default_value = "default")]
        profile: String,
    },
    /// List profile names, one per line
    List,
    /// Print the version
    Version,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let is_json = matches!(
        std::env::var("BX_LOG_FORMAT").ok().as_deref(),
        Some("json") | Some("JSON")
    );
    if is_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    init_tracing();
    let code = match cli_main() {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "bx error");
            1
        }
    };
    std::process::exit(code);
}

fn cli_main() -> Result<i32> {
    let cli = Cli::parse();
    let cfg = config::load_app_config();
    let root = default_root().context("cannot determine home directory")?;
    let store = ProfileStore::open(root)?;

    match cli.cmd {
        Some(BxCmd::Launch { profile }) => {
            let discovery = browser::discover(cfg.browser_path.map(PathBuf::from));
            println!("Launching browser with profile: {profile}");
            match launch::launch_profile(&store, &discovery.path, &profile) {
                Ok(msg) => {
                    println!("{msg}");
                    Ok(0)
                }
                Err(e) => {
                    println!("{e}");
                    Ok(1)
                }
            }
        }
        Some(BxCmd::Clean { profile }) => match clean_work_dir(&store.work_dir(&profile)) {
            Ok(_) => {
                println!("Profile '{profile}' completely cleared and reset");
                Ok(0)
            }
            Err(Error::WorkDirMissing) => {
                println!("Error: Profile directory does not exist");
                Ok(0)
            }
            Err(e) => {
                println!("Error cleaning profile: {e}");
                Ok(1)
            }
        },
        Some(BxCmd::List) => {
            for name in store.names() {
                println!("{name}");
            }
            Ok(0)
        }
        Some(BxCmd::Version) => {
            println!("bx version {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        None => {
            let discovery = browser::discover(cfg.browser_path.map(PathBuf::from));
            let theme = ThemeTokens::from_name(cfg.theme.as_deref());
            run_tui(store, discovery, theme)
        }
    }
}

fn run_tui(store: ProfileStore, discovery: Discovery, theme: ThemeTokens) -> Result<i32> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, App::new(store, discovery, theme));

    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => Ok(0),
        Err(e) => Err(e),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        if app.needs_clear {
            terminal.clear()?;
            app.needs_clear = false;
        }
        terminal.draw(|f| draw(f, &mut app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                // Windows delivers both press and release events
                if key.kind == KeyEventKind::Press && app.handle_key(key)? {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn draw(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    match app.view {
        View::Main { .. } | View::Manage { .. } => screens::menu::render(f, chunks[0], app),
        View::Picker { .. } => screens::picker::render(f, chunks[0], app),
        View::ConfirmDelete { .. } => screens::confirm::render(f, chunks[0], app),
        View::Editor { .. } => screens::editor::render(f, chunks[0], app),
    }
    frame::render_status_bar(app, chunks[1], f);
}
