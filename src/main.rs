//! Terminal driver for the toroidal Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    engine::{GridEngine, Pattern},
    error::EngineError,
    utils::{ColorOutput, GridFormatter},
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wrapping grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log engine activity at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct SeedArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Seed pattern: block, blinker, beacon, glider or none (overrides config)
    #[arg(short, long, value_parser = parse_seed_pattern)]
    pattern: Option<SeedPattern>,

    /// Pattern corner as x,y (overrides config)
    #[arg(long, value_parser = parse_offset)]
    at: Option<(usize, usize)>,

    /// Extra cell to toggle as x,y; may be repeated
    #[arg(long = "cell", value_parser = parse_cell, allow_hyphen_values = true)]
    cells: Vec<(i64, i64)>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// A `--pattern` value, where `none` clears the configured seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SeedPattern(Option<Pattern>);

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation frame by frame
    Run {
        #[command(flatten)]
        seed: SeedArgs,

        /// Delay between generations in milliseconds (overrides config)
        #[arg(short, long)]
        tick: Option<u64>,
    },

    /// Advance without animation and print the final generation
    Step {
        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { seed, tick } => run_command(seed, tick),
        Commands::Step { seed } => step_command(seed),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn load_settings(seed: &SeedArgs, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if seed.config.exists() {
        Settings::from_file(&seed.config)
            .with_context(|| format!("Failed to load config from {}", seed.config.display()))?
    } else {
        info!("Config file {} not found, using defaults", seed.config.display());
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        generations: seed.generations,
        pattern: seed.pattern.map(|SeedPattern(pattern)| pattern),
        offset: seed.at,
        cells: seed.cells.clone(),
        format: seed.format,
        ..overrides
    });

    settings.validate()
        .context("Configuration validation failed")?;
    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

fn run_command(seed: SeedArgs, tick: Option<u64>) -> Result<()> {
    let settings = load_settings(&seed, CliOverrides {
        tick_millis: tick,
        ..Default::default()
    })?;
    let mut engine = settings.seeded_engine()?;
    let tick = Duration::from_millis(settings.simulation.tick_millis);

    print_frame(&engine, &settings)?;
    for _ in 0..settings.simulation.generations {
        std::thread::sleep(tick);
        engine.advance_generation();
        print_frame(&engine, &settings)?;
    }

    if engine.is_empty() {
        println!("{}", ColorOutput::warning("All cells are dead"));
    }
    Ok(())
}

fn step_command(seed: SeedArgs) -> Result<()> {
    let settings = load_settings(&seed, CliOverrides::default())?;

    let start_time = Instant::now();
    let engine = toroidal_life::simulate(&settings)
        .context("Failed to run simulation")?;
    let elapsed = start_time.elapsed();

    print_frame(&engine, &settings)?;
    println!("{}", ColorOutput::success(&format!(
        "Advanced {} generations in {:.3}ms",
        engine.generation(),
        elapsed.as_secs_f64() * 1000.0
    )));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join("config").join("default.yaml");

    if config_path.exists() && !force {
        println!("Skipped: {} (already exists)", config_path.display());
        return Ok(());
    }

    Settings::default().to_file(&config_path)
        .context("Failed to create default configuration")?;
    println!("{}", ColorOutput::success(&format!("Created: {}", config_path.display())));
    println!("{}", ColorOutput::info("Run: toroidal_life run --config config/default.yaml"));
    Ok(())
}

fn print_frame(engine: &GridEngine, settings: &Settings) -> Result<()> {
    let rendered = GridFormatter::render_frame(engine, settings.output.format, settings.output.show_coordinates)?;
    if let Some(frame) = rendered {
        println!("{}", frame);
    }
    Ok(())
}

fn parse_pair<T: std::str::FromStr>(value: &str) -> Result<(T, T), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", value))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<T>()
            .map_err(|_| format!("invalid coordinate '{}'", part))
    };
    Ok((parse(x)?, parse(y)?))
}

fn parse_cell(value: &str) -> Result<(i64, i64), String> {
    parse_pair(value)
}

fn parse_offset(value: &str) -> Result<(usize, usize), String> {
    parse_pair(value)
}

fn parse_seed_pattern(value: &str) -> Result<SeedPattern, EngineError> {
    Pattern::parse_seed(value).map(SeedPattern)
}
