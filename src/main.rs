//! hostsbundle - main entry point
//!
//! Picks a StevenBlack hosts bundle for a host configuration, either through
//! the interactive checklist or straight from the command line.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hostsbundle::app::App;
use hostsbundle::cli::{Cli, Commands};
use hostsbundle::config::HostEntry;
use hostsbundle::{Catalog, Category, HostConfiguration, JsonFileStore, Selector};

/// Initialize tracing. `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool, log_file: Option<File>) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        // The terminal belongs to the UI, so logs go to a file
        Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.command.clone().unwrap_or(Commands::Edit);

    let log_file = if command == Commands::Edit {
        let log_path = cli.config.with_extension("log");
        Some(
            File::create(&log_path)
                .with_context(|| format!("Failed to create log file {:?}", log_path))?,
        )
    } else {
        None
    };
    init_logging(cli.verbose, log_file);
    info!("hostsbundle starting up");

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match command {
        Commands::Edit => run_editor(&cli.config, catalog),
        Commands::Show => run_show(&cli.config, &catalog),
        Commands::Set { with, disable } => run_set(&cli.config, &catalog, &with, disable),
        Commands::Catalog => {
            print_catalog(&catalog);
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {:?}", path))?;
            if !catalog.is_complete() {
                tracing::warn!(
                    "Catalog {:?} has {} entries and does not cover every category subset",
                    path,
                    catalog.len()
                );
            }
            Ok(catalog)
        }
        None => Ok(Catalog::stevenblack()),
    }
}

/// Run the interactive checklist
fn run_editor(config_path: &Path, catalog: Catalog) -> Result<()> {
    let config = HostConfiguration::load_or_default(config_path)?;
    let store = JsonFileStore::new(config_path);
    let mut app = App::new(config, catalog, Box::new(store));

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| app.run(&mut terminal).map_err(Into::into));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

/// Print the bundle the configuration currently selects
fn run_show(config_path: &Path, catalog: &Catalog) -> Result<()> {
    let config = HostConfiguration::load_or_default(config_path)?;
    let selector = Selector::open(catalog, &config.hosts);

    match selector.matched_index() {
        Some(i) => {
            let entry = &config.hosts[i];
            println!("Managed entry: #{} {} [{}]", i, entry.title, entry.state);
            println!("Location:      {}", entry.location);
        }
        None => println!("Managed entry: none"),
    }
    println!("Selected:      {}", selector.vector());
    Ok(())
}

/// Headless selection: the same toggles a user would make, then commit
fn run_set(config_path: &Path, catalog: &Catalog, with: &[Category], disable: bool) -> Result<()> {
    let mut config = HostConfiguration::load_or_default(config_path)?;
    let mut selector = Selector::open(catalog, &config.hosts);

    selector.toggle(Category::AdsMalware, !disable);
    if !disable {
        for &category in Category::CATEGORIES.iter() {
            selector.toggle(category, with.contains(&category));
        }
    }

    let mut store = JsonFileStore::new(config_path);
    let mut on_change = |hosts: &[HostEntry]| debug!("Host list now has {} entries", hosts.len());
    let outcome = selector.commit(&mut config, &mut on_change, &mut store)?;

    println!(
        "{} entry #{}: {} [{}]",
        if outcome.inserted { "Inserted" } else { "Updated" },
        outcome.index,
        config.hosts[outcome.index].title,
        outcome.state
    );
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for (i, combination) in catalog.iter().enumerate() {
        println!("{:>2}  {:<32} {}", i, combination.selector.to_string(), combination.title);
        println!("    {}", combination.url);
    }
}
