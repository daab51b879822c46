use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use super::language::Language;

pub const TESTCASES_DIR: &str = "testcases";
const CASE_PREFIX: &str = "case";
const INPUT_MARKER: &str = "input";
const OUTPUT_MARKER: &str = "output";
const CASE_EXTENSION: &str = ".txt";

pub fn case_dir_name(index: u32) -> String {
    format!("{}{}", CASE_PREFIX, index)
}

pub fn input_file_name(index: u32) -> String {
    format!("{}{}{}", INPUT_MARKER, index, CASE_EXTENSION)
}

pub fn output_file_name(index: u32) -> String {
    format!("{}{}{}", OUTPUT_MARKER, index, CASE_EXTENSION)
}

/// Swaps the leading input marker for the output marker, keeping the rest
/// of the name (and so the embedded case index) intact.
pub fn output_name_for(input_name: &str) -> Option<String> {
    input_name
        .strip_prefix(INPUT_MARKER)
        .map(|rest| format!("{}{}", OUTPUT_MARKER, rest))
}

/// The case number as written in an input file name: `input12.txt` -> `12`.
pub fn case_number(input_name: &str) -> &str {
    let rest = input_name.strip_prefix(INPUT_MARKER).unwrap_or(input_name);
    rest.strip_suffix(CASE_EXTENSION).unwrap_or(rest)
}

/// A problem name must be exactly one normal path component, so it can never
/// point outside the problems root.
pub fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(Error::InvalidName(name.to_string())),
    }
}

/// Resolved paths of an existing problem directory.
#[derive(Debug, Clone)]
pub struct ProblemLayout {
    pub name: String,
    pub dir: PathBuf,
    pub source: PathBuf,
    pub language: Language,
    pub testcases: PathBuf,
}

impl ProblemLayout {
    pub fn open(root: &Path, name: &str) -> Result<Self> {
        validate_name(name)?;
        let dir = root.join(name);
        let found = Language::ALL
            .iter()
            .map(|lang| (*lang, dir.join(lang.source_file_name())))
            .find(|(_, path)| path.is_file());

        let (language, source) = match found {
            Some(f) => f,
            None => {
                return Err(Error::NotFound(
                    dir.join(Language::Cpp.source_file_name()),
                ))
            }
        };

        log::debug!("resolved {} solution at {}", language.display_name(), source.display());

        Ok(Self {
            name: name.to_string(),
            testcases: dir.join(TESTCASES_DIR),
            dir,
            source,
            language,
        })
    }
}

/// Problem directory names under `root`, sorted.
pub fn list_problems(root: &Path) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(Error::NoProblems(root.to_path_buf()));
    }

    let problems = sorted_subdirs(root)?;
    if problems.is_empty() {
        return Err(Error::NoProblems(root.to_path_buf()));
    }
    Ok(problems)
}

pub(crate) fn sorted_subdirs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    names.sort();
    Ok(names)
}
