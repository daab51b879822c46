use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::lang::stub;
use crate::models::problem::{
    case_dir_name, input_file_name, output_file_name, validate_name, TESTCASES_DIR,
};
use crate::models::Language;

/// One filesystem artifact written while scaffolding, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    Folder(PathBuf),
    File(PathBuf),
    Case { folder: PathBuf, input: String, output: String },
}

/// Creates `root/name` with a solution stub and `case_count` empty cases.
///
/// Nothing is written when the problem folder already exists.
pub fn create_problem(
    root: &Path,
    name: &str,
    case_count: u32,
    language: Language,
) -> Result<Vec<Created>> {
    validate_name(name)?;

    let problem_path = root.join(name);
    if problem_path.exists() {
        return Err(Error::AlreadyExists(name.to_string()));
    }

    let mut created = Vec::new();

    fs::create_dir_all(root)?;
    fs::create_dir(&problem_path)?;
    created.push(Created::Folder(problem_path.clone()));

    let source_path = problem_path.join(language.source_file_name());
    fs::write(&source_path, stub(language))?;
    created.push(Created::File(source_path));

    let testcases_path = problem_path.join(TESTCASES_DIR);
    fs::create_dir(&testcases_path)?;
    created.push(Created::Folder(testcases_path.clone()));

    for i in 1..=case_count {
        let case_folder = testcases_path.join(case_dir_name(i));
        fs::create_dir(&case_folder)?;

        let input = input_file_name(i);
        let output = output_file_name(i);
        fs::write(case_folder.join(&input), "")?;
        fs::write(case_folder.join(&output), "")?;
        created.push(Created::Case { folder: case_folder, input, output });
    }

    log::info!("scaffolded {} with {} case(s)", problem_path.display(), case_count);
    Ok(created)
}
