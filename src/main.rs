//! Rampedit - a terminal curve editor.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rampedit::{app::App, config, curve, ui, util};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rampedit")]
#[command(about = "A terminal curve editor", long_about = None)]
struct Args {
    /// TOML file with curve definitions (built-in demo curves if omitted)
    file: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Print the curves and exit without starting the editor
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Rampedit");
    }

    // Validate path if provided
    if let Some(ref path) = args.file {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    let curves = match args.file {
        Some(ref path) => config::load_curve_file(path)?,
        None => curve::demo_set(),
    };

    if args.dump {
        print!("{}", util::format_summary(&curves)?);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(curves, args.file.clone());
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Rampedit exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                return Ok(())
            },

            // Curve selection
            (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char(']')) => {
                app.next_curve();
            },
            (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('[')) => {
                app.prev_curve();
            },

            // Point selection
            (KeyModifiers::NONE, KeyCode::Char('h')) => app.prev_point(),
            (KeyModifiers::NONE, KeyCode::Char('l')) => app.next_point(),

            // Point movement; Shift moves ten steps
            (m, KeyCode::Left) => app.nudge(-1.0, 0.0, m.contains(KeyModifiers::SHIFT)),
            (m, KeyCode::Right) => app.nudge(1.0, 0.0, m.contains(KeyModifiers::SHIFT)),
            (m, KeyCode::Up) => app.nudge(0.0, 1.0, m.contains(KeyModifiers::SHIFT)),
            (m, KeyCode::Down) => app.nudge(0.0, -1.0, m.contains(KeyModifiers::SHIFT)),

            // Point insertion and removal
            (KeyModifiers::NONE, KeyCode::Char('a')) => app.insert_point(),
            (KeyModifiers::NONE, KeyCode::Char('x')) | (KeyModifiers::NONE, KeyCode::Delete) => {
                app.delete_point();
            },

            // Visibility checkboxes
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                let curve = c as usize - '1' as usize;
                app.toggle_visibility(curve);
            },

            // View
            (_, KeyCode::Char('+')) | (KeyModifiers::NONE, KeyCode::Char('=')) => app.zoom(0.8),
            (KeyModifiers::NONE, KeyCode::Char('-')) => app.zoom(1.25),
            (KeyModifiers::NONE, KeyCode::Char('0')) => app.reset_view(),

            // Features
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_points(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (_, KeyCode::Char('?')) => {
                app.status = "Help: Tab=curve, h/l=point, arrows=move, a=add, x=delete, 1-9=visibility, q=quit".to_string();
            },

            _ => {},
        }
    }
}
