pub mod config;
pub mod language;
pub mod problem;

// config is accessed as crate::models::config::{load_config, save_to, ...}
pub use config::UserConfig;
pub use language::Language;
pub use problem::{list_problems, ProblemLayout};
