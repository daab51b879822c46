mod c;
mod cpp;
mod process;
mod rust;

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::models::Language;

pub use process::{ProcessExecutor, Toolchain};

/// Result of compiling a solution source.
#[derive(Debug)]
pub struct BuildOutput {
    pub success: bool,
    pub diagnostics: String,
}

/// Compiles a solution source into an executable at a caller-chosen path.
pub trait Builder {
    fn build(&self, source: &Path, language: Language, executable: &Path) -> Result<BuildOutput>;
}

/// What a single run of the solution produced.
#[derive(Debug, Default)]
pub struct Execution {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub timed_out: bool,
    pub elapsed: Duration,
}

/// Runs an executable with the given bytes on standard input.
pub trait Executor {
    fn execute(&self, executable: &Path, stdin: &[u8]) -> Result<Execution>;
}

/// Minimal program written into a freshly scaffolded solution file.
pub fn stub(lang: Language) -> &'static str {
    match lang {
        Language::Cpp => cpp::STUB,
        Language::C => c::STUB,
        Language::Rs => rust::STUB,
    }
}
