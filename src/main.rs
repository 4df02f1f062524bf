// stepviz: step-by-step replay of sorting, graph and linked list algorithms

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use stepviz::cli::{algorithm_listing, build_trace, Cli, Command, USAGE};
use stepviz::config::Settings;
use stepviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with exported JSON or the TUI
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::List => {
            print!("{}", algorithm_listing());
            return Ok(());
        }
        _ => {}
    }

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply(&mut settings);

    let trace = match build_trace(&cli.command, &settings) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(title = %trace.title(), frames = trace.cursor().len(), "recorded trace");

    if cli.export {
        println!("{}", trace.frames_json()?);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(trace, settings.speed_ms);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
