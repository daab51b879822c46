use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use cpkit::lang::{BuildOutput, Builder, Execution, Executor, ProcessExecutor, Toolchain};
use cpkit::models::{Language, ProblemLayout, UserConfig};
use cpkit::runner::{run_problem, CaseOutcome, RunSummary, Verdict};
use cpkit::scaffold::create_problem;
use cpkit::{Error, Result};

/// Pretends to compile by touching the executable path.
struct FakeBuilder {
    success: bool,
    built_at: Cell<Option<PathBuf>>,
}

impl FakeBuilder {
    fn ok() -> Self {
        Self { success: true, built_at: Cell::new(None) }
    }

    fn broken() -> Self {
        Self { success: false, built_at: Cell::new(None) }
    }
}

impl Builder for FakeBuilder {
    fn build(&self, _source: &Path, _language: Language, executable: &Path) -> Result<BuildOutput> {
        self.built_at.set(Some(executable.to_path_buf()));
        if self.success {
            fs::write(executable, "")?;
        }
        Ok(BuildOutput {
            success: self.success,
            diagnostics: if self.success { String::new() } else { "main.cpp:1: error".to_string() },
        })
    }
}

/// Behaves like a solution that prints the sum of the integers it reads.
#[derive(Default)]
struct SumExecutor {
    calls: Cell<usize>,
    timed_out: bool,
}

impl Executor for SumExecutor {
    fn execute(&self, _executable: &Path, stdin: &[u8]) -> Result<Execution> {
        self.calls.set(self.calls.get() + 1);
        let sum: i64 = String::from_utf8_lossy(stdin)
            .split_whitespace()
            .filter_map(|t| t.parse::<i64>().ok())
            .sum();
        Ok(Execution {
            stdout: format!("{}\n", sum),
            status: Some(0),
            timed_out: self.timed_out,
            ..Execution::default()
        })
    }
}

/// Echoes a fixed output regardless of input.
struct FixedExecutor(&'static str);

impl Executor for FixedExecutor {
    fn execute(&self, _executable: &Path, _stdin: &[u8]) -> Result<Execution> {
        Ok(Execution {
            stdout: self.0.to_string(),
            stderr: "debug noise".to_string(),
            status: Some(0),
            ..Execution::default()
        })
    }
}

fn setup(cases: &[(&str, Option<&str>)]) -> (tempfile::TempDir, ProblemLayout) {
    let tmp = tempfile::tempdir().unwrap();
    create_problem(tmp.path(), "q1", cases.len() as u32, Language::Cpp).unwrap();

    let testcases = tmp.path().join("q1").join("testcases");
    for (i, (input, output)) in cases.iter().enumerate() {
        let folder = testcases.join(format!("case{}", i + 1));
        fs::write(folder.join(format!("input{}.txt", i + 1)), input).unwrap();
        let output_path = folder.join(format!("output{}.txt", i + 1));
        match output {
            Some(text) => fs::write(output_path, text).unwrap(),
            None => fs::remove_file(output_path).unwrap(),
        }
    }

    let layout = ProblemLayout::open(tmp.path(), "q1").unwrap();
    (tmp, layout)
}

fn run<E: Executor>(layout: &ProblemLayout, executor: &E) -> (Result<RunSummary>, Vec<CaseOutcome>) {
    let mut outcomes = Vec::new();
    let result = run_problem(layout, &FakeBuilder::ok(), executor, |o| outcomes.push(o.clone()));
    (result, outcomes)
}

fn verdicts(outcomes: &[CaseOutcome]) -> Vec<Option<Verdict>> {
    outcomes
        .iter()
        .map(|o| match o {
            CaseOutcome::Scored(r) => Some(r.verdict),
            CaseOutcome::Skipped { .. } => None,
        })
        .collect()
}

#[test]
fn test_sum_passes() {
    let (_tmp, layout) = setup(&[("1 2", Some("3"))]);
    let (result, outcomes) = run(&layout, &SumExecutor::default());

    assert_eq!(result.unwrap(), RunSummary { passed: 1, total: 1 });
    match &outcomes[0] {
        CaseOutcome::Scored(report) => {
            assert_eq!(report.case, "case1");
            assert_eq!(report.number, "1");
            assert_eq!(report.input, "1 2");
            assert_eq!(report.expected, "3");
            assert_eq!(report.actual, "3");
            assert_eq!(report.verdict, Verdict::Pass);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_wrong_answer_fails() {
    let (_tmp, layout) = setup(&[("1 2", Some("4"))]);
    let (result, outcomes) = run(&layout, &SumExecutor::default());

    assert_eq!(result.unwrap(), RunSummary { passed: 0, total: 1 });
    assert_eq!(verdicts(&outcomes), vec![Some(Verdict::Fail)]);
}

#[test]
fn test_build_failure_scores_nothing() {
    let (_tmp, layout) = setup(&[("1 2", Some("3")), ("3 4", Some("7")), ("", Some("0"))]);
    let executor = SumExecutor::default();
    let mut outcomes = Vec::new();

    let err = run_problem(&layout, &FakeBuilder::broken(), &executor, |o| outcomes.push(o.clone()))
        .unwrap_err();

    assert!(matches!(err, Error::BuildFailed { ref diagnostics } if diagnostics.contains("error")));
    assert_eq!(executor.calls.get(), 0);
    assert!(outcomes.is_empty());
}

#[test]
fn test_missing_output_is_skipped() {
    let (_tmp, layout) = setup(&[("1 2", Some("3")), ("5 5", None)]);
    let (result, outcomes) = run(&layout, &SumExecutor::default());

    assert_eq!(result.unwrap(), RunSummary { passed: 1, total: 1 });
    assert_eq!(verdicts(&outcomes), vec![Some(Verdict::Pass), None]);
    match &outcomes[1] {
        CaseOutcome::Skipped { case_folder, output_file } => {
            assert!(case_folder.ends_with("case2"));
            assert_eq!(output_file, "output2.txt");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[test]
fn test_trimming_only_at_ends() {
    let (_tmp, layout) = setup(&[("", Some("\n  1 2\n3  \n"))]);

    let (result, _) = run(&layout, &FixedExecutor("1 2\n3\n\n"));
    assert_eq!(result.unwrap(), RunSummary { passed: 1, total: 1 });

    let (result, _) = run(&layout, &FixedExecutor("1  2\n3"));
    assert_eq!(result.unwrap(), RunSummary { passed: 0, total: 1 });
}

#[test]
fn test_timed_out_counts_as_scored() {
    let (_tmp, layout) = setup(&[("1 2", Some("3"))]);
    let executor = SumExecutor { timed_out: true, ..SumExecutor::default() };
    let (result, outcomes) = run(&layout, &executor);

    assert_eq!(result.unwrap(), RunSummary { passed: 0, total: 1 });
    assert_eq!(verdicts(&outcomes), vec![Some(Verdict::TimedOut)]);
}

#[test]
fn test_no_case_folders() {
    let (tmp, layout) = setup(&[("1 2", Some("3"))]);
    fs::remove_dir_all(tmp.path().join("q1").join("testcases").join("case1")).unwrap();

    let (result, _) = run(&layout, &SumExecutor::default());
    assert!(matches!(result, Err(Error::NoTestCases)));
}

#[test]
fn test_cases_run_in_name_order() {
    let (tmp, layout) = setup(&[("1", Some("1")), ("2", Some("2"))]);
    let case10 = tmp.path().join("q1").join("testcases").join("case10");
    fs::create_dir(&case10).unwrap();
    fs::write(case10.join("input10.txt"), "10").unwrap();
    fs::write(case10.join("output10.txt"), "10").unwrap();
    fs::write(case10.join("notes.md"), "ignored").unwrap();

    let (result, outcomes) = run(&layout, &SumExecutor::default());
    assert_eq!(result.unwrap(), RunSummary { passed: 3, total: 3 });

    let order: Vec<String> = outcomes
        .iter()
        .filter_map(|o| match o {
            CaseOutcome::Scored(r) => Some(r.case.clone()),
            CaseOutcome::Skipped { .. } => None,
        })
        .collect();
    assert_eq!(order, vec!["case1", "case10", "case2"]);
}

#[test]
fn test_executable_lives_outside_problem() {
    let (_tmp, layout) = setup(&[("1 2", Some("3"))]);
    let builder = FakeBuilder::ok();

    run_problem(&layout, &builder, &SumExecutor::default(), |_| {}).unwrap();

    let built = builder.built_at.take().unwrap();
    assert!(!built.starts_with(&layout.dir));
    // The scratch directory is gone once the run returns.
    assert!(!built.exists());
}

fn have_gxx() -> bool {
    Command::new("g++").arg("--version").output().is_ok()
}

#[test]
fn test_real_toolchain_sum() {
    if !have_gxx() {
        eprintln!("g++ not available, skipping");
        return;
    }

    let (tmp, layout) = setup(&[("1 2", Some("3")), ("2 2", Some("5"))]);
    fs::write(
        &layout.source,
        "#include <iostream>\nint main() { long a, b; std::cin >> a >> b; std::cout << a + b << std::endl; }\n",
    )
    .unwrap();

    let toolchain = Toolchain::from_config(&UserConfig::default());
    let executor = ProcessExecutor::new(Some(Duration::from_secs(10)));
    let summary = run_problem(&layout, &toolchain, &executor, |_| {}).unwrap();
    assert_eq!(summary, RunSummary { passed: 1, total: 2 });

    fs::write(&layout.source, "int main( {\n").unwrap();
    let err = run_problem(&layout, &toolchain, &executor, |_| {}).unwrap_err();
    assert!(matches!(err, Error::BuildFailed { .. }));
    drop(tmp);
}
