use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use clap::ValueEnum;
use csearch::{grid::GridConfig, progress::Budget};
use log::LevelFilter;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Algorithm {
    Dfs,
    AStar,
    #[default]
    Both,
}

impl Algorithm {
    /// Strategies to run, in the order they are run.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Algorithm::Dfs => &[Strategy::Dfs],
            Algorithm::AStar => &[Strategy::AStar],
            Algorithm::Both => &[Strategy::Dfs, Strategy::AStar],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Dfs,
    AStar,
}

impl Strategy {
    pub fn title(self) -> &'static str {
        match self {
            Strategy::Dfs => "DFS",
            Strategy::AStar => "A*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum HeuristicKind {
    #[default]
    Chebyshev,
    Manhattan,
    Zero,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read or write settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("Invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub columns: Option<usize>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub algorithm: Option<Algorithm>,
    #[serde(default)]
    pub heuristic: Option<HeuristicKind>,
    #[serde(default)]
    pub max_expansions: Option<usize>,
    #[serde(default)]
    pub time_limit_ms: Option<u64>,
    #[serde(default)]
    pub color: Option<bool>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Fills every unset field with its default value. Seed and limits stay unset, for them
    /// `None` is the default.
    pub fn populate(mut self) -> Self {
        let grid = GridConfig::default();
        self.rows = Some(self.rows.unwrap_or(grid.rows));
        self.columns = Some(self.columns.unwrap_or(grid.columns));
        self.density = Some(self.density.unwrap_or(grid.density));
        self.algorithm = Some(self.algorithm.unwrap_or_default());
        self.heuristic = Some(self.heuristic.unwrap_or_default());
        self.color = Some(self.color.unwrap_or(true));
        self.log_level = Some(self.log_level.unwrap_or_else(|| "warn".to_string()));

        self
    }

    pub fn grid_config(&self) -> GridConfig {
        let default = GridConfig::default();
        GridConfig {
            rows: self.rows.unwrap_or(default.rows),
            columns: self.columns.unwrap_or(default.columns),
            density: self.density.unwrap_or(default.density),
            seed: self.seed,
            ..default
        }
    }

    pub fn budget(&self) -> Budget {
        let mut budget = Budget::unlimited();
        if let Some(max) = self.max_expansions {
            budget = budget.max_expansions(max);
        }
        if let Some(ms) = self.time_limit_ms {
            budget = budget.time_limit(Duration::from_millis(ms));
        }
        budget
    }

    pub fn get_algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or_default()
    }

    pub fn get_heuristic(&self) -> HeuristicKind {
        self.heuristic.unwrap_or_default()
    }

    pub fn get_color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn get_log_level(&self) -> Result<LevelFilter, SettingsError> {
        match &self.log_level {
            None => Ok(LevelFilter::Warn),
            Some(level) => LevelFilter::from_str(level)
                .map_err(|_| SettingsError::InvalidLogLevel(level.clone())),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tsearch")
            .join("settings.ron")
    }

    pub fn parse(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
    }

    /// Loads settings from `path`, writing the default settings there first if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                DEFAULT_SETTINGS.to_string()
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_owned(),
                    source,
                })
            }
        };

        Self::parse(&source).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_owned(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_SETTINGS).map_err(io_err)
    }
}
