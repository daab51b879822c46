use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::lang::{Builder, Executor};
use crate::models::problem::{case_number, output_name_for, sorted_subdirs};
use crate::models::ProblemLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    TimedOut,
}

impl Verdict {
    pub fn passed(&self) -> bool {
        *self == Verdict::Pass
    }
}

/// A single input file after it has been scored.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: String,
    pub number: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub verdict: Verdict,
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum CaseOutcome {
    Scored(CaseReport),
    /// The matching output file is missing; not counted.
    Skipped { case_folder: PathBuf, output_file: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub passed: usize,
    pub total: usize,
}

/// Compares trimmed outputs; whitespace inside the text is significant.
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    actual.trim() == expected.trim()
}

/// Builds the solution into a scratch directory and scores every case.
///
/// `on_case` is called as soon as each case finishes so that progress is
/// visible while later cases are still running.
pub fn run_problem<B, E, F>(
    layout: &ProblemLayout,
    builder: &B,
    executor: &E,
    mut on_case: F,
) -> Result<RunSummary>
where
    B: Builder + ?Sized,
    E: Executor + ?Sized,
    F: FnMut(&CaseOutcome),
{
    let scratch = tempfile::Builder::new().prefix("cpkit-").tempdir()?;
    let executable = scratch
        .path()
        .join(format!("solution{}", std::env::consts::EXE_SUFFIX));

    let build = builder.build(&layout.source, layout.language, &executable)?;
    if !build.success {
        return Err(Error::BuildFailed { diagnostics: build.diagnostics });
    }
    log::debug!("built {} into {}", layout.source.display(), executable.display());

    let cases = discover_cases(&layout.testcases)?;
    let mut summary = RunSummary::default();

    for case in &cases {
        let case_folder = layout.testcases.join(case);
        for (input_name, output_name) in input_files(&case_folder)? {
            let outcome =
                run_case(&executable, executor, case, &case_folder, &input_name, output_name)?;
            if let CaseOutcome::Scored(report) = &outcome {
                summary.total += 1;
                if report.verdict.passed() {
                    summary.passed += 1;
                }
            }
            on_case(&outcome);
        }
    }

    Ok(summary)
}

fn discover_cases(testcases: &Path) -> Result<Vec<String>> {
    if !testcases.is_dir() {
        return Err(Error::NoTestCases);
    }
    let cases = sorted_subdirs(testcases)?;
    if cases.is_empty() {
        return Err(Error::NoTestCases);
    }
    Ok(cases)
}

/// Input files of a case folder paired with their expected output names.
fn input_files(case_folder: &Path) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for entry in fs::read_dir(case_folder)? {
        let name = entry?.file_name().to_string_lossy().to_string();
        if let Some(output) = output_name_for(&name) {
            pairs.push((name, output));
        }
    }
    pairs.sort();
    Ok(pairs)
}

fn run_case<E: Executor + ?Sized>(
    executable: &Path,
    executor: &E,
    case: &str,
    case_folder: &Path,
    input_name: &str,
    output_name: String,
) -> Result<CaseOutcome> {
    let output_path = case_folder.join(&output_name);
    if !output_path.exists() {
        log::warn!("{} has no {}, skipping", case_folder.display(), output_name);
        return Ok(CaseOutcome::Skipped {
            case_folder: case_folder.to_path_buf(),
            output_file: output_name,
        });
    }

    let input = fs::read(case_folder.join(input_name))?;
    let expected = fs::read_to_string(&output_path)?.trim().to_string();

    let run = executor.execute(executable, &input)?;
    let actual = run.stdout.trim().to_string();
    log::debug!("{}/{} exited with {:?}", case, input_name, run.status);

    let verdict = if run.timed_out {
        Verdict::TimedOut
    } else if outputs_match(&actual, &expected) {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    Ok(CaseOutcome::Scored(CaseReport {
        case: case.to_string(),
        number: case_number(input_name).to_string(),
        input: String::from_utf8_lossy(&input).trim().to_string(),
        expected,
        actual,
        verdict,
        exit_code: run.status,
        elapsed: run.elapsed,
    }))
}
