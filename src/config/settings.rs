//! Configuration settings for the simulation driver

use crate::engine::{GridEngine, Pattern, HEIGHT, WIDTH};
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Pattern name, or `none` for an empty grid
    #[serde(with = "seed_pattern", default)]
    pub pattern: Option<Pattern>,
    pub offset_x: usize,
    pub offset_y: usize,
    /// Extra `(x, y)` cells toggled after the pattern is placed
    #[serde(default)]
    pub cells: Vec<(i64, i64)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_coordinates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    None,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                width: WIDTH,
                height: HEIGHT,
                generations: 10,
                tick_millis: 100,
            },
            seed: SeedConfig {
                pattern: Some(Pattern::Glider),
                offset_x: 1,
                offset_y: 1,
                cells: Vec::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_coordinates: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let SimulationConfig { width, height, .. } = self.simulation;

        if width == 0 || height == 0 {
            anyhow::bail!("Grid dimensions must be positive, got {}x{}", width, height);
        }

        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            anyhow::bail!("Grid dimensions {}x{} exceed the frame header range", width, height);
        }

        if width.checked_mul(height).and_then(|area| u32::try_from(area).ok()).is_none() {
            anyhow::bail!("Grid area {}x{} is too large", width, height);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(tick_millis) = cli_overrides.tick_millis {
            self.simulation.tick_millis = tick_millis;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.seed.pattern = pattern;
        }
        if let Some((x, y)) = cli_overrides.offset {
            self.seed.offset_x = x;
            self.seed.offset_y = y;
        }
        self.seed.cells.extend(cli_overrides.cells.iter().copied());
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }

    /// Build an engine and place the configured seed on it
    pub fn seeded_engine(&self) -> Result<GridEngine> {
        let mut engine = GridEngine::with_dimensions(self.simulation.width, self.simulation.height)
            .context("Failed to create grid engine")?;

        if let Some(pattern) = self.seed.pattern {
            debug!("Seeding {} at ({}, {})", pattern, self.seed.offset_x, self.seed.offset_y);
            pattern.stamp(&mut engine, self.seed.offset_x, self.seed.offset_y);
        }
        for &(x, y) in &self.seed.cells {
            engine.toggle_cell(x, y);
        }

        Ok(engine)
    }
}

/// Seed pattern as its name, with `none` for no pattern
mod seed_pattern {
    use crate::engine::Pattern;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(pattern: &Option<Pattern>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(pattern.map_or("none", Pattern::name))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Pattern>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(name) => Pattern::parse_seed(&name).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub tick_millis: Option<u64>,
    /// `Some(None)` clears the configured pattern
    pub pattern: Option<Option<Pattern>>,
    pub offset: Option<(usize, usize)>,
    pub cells: Vec<(i64, i64)>,
    pub format: Option<OutputFormat>,
}
