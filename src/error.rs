use csearch::grid::GridError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings error; {0}")]
    Settings(#[from] SettingsError),
    #[error("Maze error; {0}")]
    Grid(#[from] GridError),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
}
