use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    C,
    Rs,
}

impl Language {
    /// Order in which a problem directory is probed for its solution source.
    pub const ALL: [Language; 3] = [Language::Cpp, Language::C, Language::Rs];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Rs => "Rust",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Rs => "rs",
        }
    }

    pub fn source_file_name(&self) -> String {
        format!("main.{}", self.extension())
    }

    pub fn compiler(&self) -> &'static str {
        match self {
            Language::Cpp => "g++",
            Language::C => "gcc",
            Language::Rs => "rustc",
        }
    }
}
