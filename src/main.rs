mod app;
mod error;
mod logging;
mod render;
mod settings;

use std::path::PathBuf;

use clap::Parser;

use error::Error;
use settings::{Algorithm, HeuristicKind, Settings};

#[derive(Parser, Debug)]
#[clap(version, about, name = "tsearch")]
struct Args {
    #[clap(short, long, help = "Number of rows of the maze")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of columns of the maze")]
    columns: Option<usize>,
    #[clap(short, long, help = "Probability that a cell is blocked, 0 to 1")]
    density: Option<f64>,
    #[clap(short, long, help = "Seed of the maze generator")]
    seed: Option<u64>,
    #[clap(short, long, value_enum, help = "Search algorithm to run")]
    algorithm: Option<Algorithm>,
    #[clap(long, value_enum, help = "Heuristic used by A*")]
    heuristic: Option<HeuristicKind>,
    #[clap(long, help = "Stop a search after expanding this many nodes")]
    max_expansions: Option<usize>,
    #[clap(long, help = "Stop a search after this many milliseconds")]
    time_limit_ms: Option<u64>,
    #[clap(long, action, help = "Disable coloured output")]
    no_color: bool,
    #[clap(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More log output, repeatable")]
    verbose: u8,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Less log output, repeatable")]
    quiet: u8,
}

impl Args {
    /// Overrides the values from the settings file with the ones given on the command line.
    fn apply(&self, mut settings: Settings) -> Settings {
        settings.rows = self.rows.or(settings.rows);
        settings.columns = self.columns.or(settings.columns);
        settings.density = self.density.or(settings.density);
        settings.seed = self.seed.or(settings.seed);
        settings.algorithm = self.algorithm.or(settings.algorithm);
        settings.heuristic = self.heuristic.or(settings.heuristic);
        settings.max_expansions = self.max_expansions.or(settings.max_expansions);
        settings.time_limit_ms = self.time_limit_ms.or(settings.time_limit_ms);
        if self.no_color {
            settings.color = Some(false);
        }
        settings
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    let created = !settings_path.exists();
    let settings = args.apply(Settings::load(&settings_path)?).populate();

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    let level = logging::adjust_level(settings.get_log_level()?, args.verbose, args.quiet);
    logging::init(level)?;

    if created {
        log::info!("Created default settings file at {:?}", settings_path);
    }

    if !settings.get_color() {
        colored::control::set_override(false);
    }

    app::run(&settings)
}
