use std::fs::{self, File};
use std::path::PathBuf;

use clap::Parser;
use dropdown_tui::terminal::{Screen, TerminalGuard};
use dropdown_tui::{App, DemoSettings, Error, paths, settings};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive demo of the dropdown widget")]
struct Cli {
    /// Settings JSON file; defaults to settings.json in the config directory
    #[arg(long, short = 's')]
    settings: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = match settings::load(cli.settings.as_deref()) {
        Ok(settings) => run(settings).await,
        Err(e) => Err(e.into()),
    };

    // The terminal guard is gone by now
    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to `latest.log` in the cache directory. Logging stays off when the
/// directory is unavailable; the terminal belongs to the UI.
fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

async fn run(settings: DemoSettings) -> Result<(), Error> {
    let _guard = TerminalGuard::new()?;
    let mut screen = Screen::new()?;
    App::new(settings).run(&mut screen).await
}
