use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Problem folder '{0}' already exists!")]
    AlreadyExists(String),
    #[error("Invalid problem name '{0}'")]
    InvalidName(String),
    #[error("{} not found!", .0.display())]
    NotFound(PathBuf),
    #[error("No problems found in {}", .0.display())]
    NoProblems(PathBuf),
    #[error("Invalid selection.")]
    InvalidSelection,
    #[error("Compilation failed.")]
    BuildFailed { diagnostics: String },
    #[error("No test cases found!")]
    NoTestCases,
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
