pub mod cli;
pub mod display;
pub mod error;
pub mod lang;
pub mod models;
pub mod runner;
pub mod scaffold;

pub use error::{Error, Result};
