use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use super::language::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub problems_root: PathBuf,
    pub default_cases: u32,
    pub language: Language,
    pub cpp_flags: Vec<String>,
    pub c_flags: Vec<String>,
    pub rust_flags: Vec<String>,
    /// Wall-clock limit for a single case. `None` waits forever.
    pub timeout_secs: Option<u64>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            problems_root: PathBuf::from("problems"),
            default_cases: 2,
            language: Language::Cpp,
            cpp_flags: vec!["-std=c++17".to_string()],
            c_flags: vec!["-std=c11".to_string()],
            rust_flags: vec!["--edition".to_string(), "2021".to_string()],
            timeout_secs: None,
        }
    }
}

impl UserConfig {
    pub fn flags_for(&self, language: Language) -> &[String] {
        match language {
            Language::Cpp => &self.cpp_flags,
            Language::C => &self.c_flags,
            Language::Rs => &self.rust_flags,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("cpkit").join("config.json"))
}

pub fn load_config() -> Result<UserConfig> {
    match get_config_path() {
        Some(path) => load_from(&path),
        None => {
            log::debug!("no home directory, using default config");
            Ok(UserConfig::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_to(path: &Path, config: &UserConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, contents)?;
    Ok(())
}
