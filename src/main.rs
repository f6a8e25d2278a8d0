use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use autosuggest::config::{self, Config, SourceKind};
use autosuggest::logging;
use autosuggest::source::{Fetcher, spawn_worker};
use autosuggest::tui::{self, App};
use autosuggest::widget::Autocomplete;

#[derive(Parser, Debug)]
#[command(name = "autosuggest")]
#[command(about = "Autocomplete combo box in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/autosuggest/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where suggestions come from
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// Word list for the `words` source
    #[arg(long)]
    words: Option<PathBuf>,

    /// Opensearch endpoint for the `wikipedia` source
    #[arg(long)]
    endpoint: Option<String>,

    /// Append debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => config::load_config_from_path(path)?,
            None => config::load_config()?,
        };

        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(words) = &self.words {
            config.source.words_file = words.clone();
        }
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log.file = Some(log_file.clone());
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = cli.load_config()?;
    logging::init(&config.log)?;

    let fetcher = Fetcher::from_config(&config.source)?;
    log::info!("starting with {:?} source", config.source.kind);
    let (worker, source_events) = spawn_worker(fetcher);

    let mut app = App::new(
        Autocomplete::new(config.intent_config()),
        Box::new(worker),
    );

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = tui::run(&mut terminal, &mut app, &source_events);

    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    log::info!("selected: {:?}", app.view.selected_list);
    Ok(result?)
}
