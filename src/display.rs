use crate::runner::{CaseOutcome, CaseReport, RunSummary, Verdict};
use crate::scaffold::Created;

const RULE_WIDTH: usize = 40;

pub fn display_created(created: &[Created]) {
    for item in created {
        match item {
            Created::Folder(path) => println!("Created folder: {}", path.display()),
            Created::File(path) => println!("Created file: {}", path.display()),
            Created::Case { folder, input, output } => println!(
                "Created test case folder: {} with {} and {}",
                folder.display(),
                input,
                output
            ),
        }
    }
}

pub fn display_menu(problems: &[String]) {
    println!("Available problems:");
    for (idx, problem) in problems.iter().enumerate() {
        println!("{}. {}", idx + 1, problem);
    }
}

pub fn display_outcome(outcome: &CaseOutcome) {
    match outcome {
        CaseOutcome::Scored(report) => display_report(report),
        CaseOutcome::Skipped { case_folder, output_file } => println!(
            "Expected output file {} not found in {}. Skipping.",
            output_file,
            case_folder.display()
        ),
    }
}

fn display_report(report: &CaseReport) {
    let rule = "-".repeat(RULE_WIDTH);

    println!("\n{}", rule);
    println!("--- {} Test Case {} ---", report.case, report.number);
    println!("{}", rule);
    println!("Input:");
    println!("{}", report.input);
    println!("\n{}", rule);
    println!("Expected Output:");
    println!("{}", report.expected);
    println!("\n{}", rule);
    println!("Your Output:");
    println!("{}", report.actual);
    println!("{}", rule);

    if let Some(code) = report.exit_code.filter(|c| *c != 0) {
        println!("Exit code: {}", code);
    }
    println!("Time: {} ms", report.elapsed.as_millis());

    match report.verdict {
        Verdict::Pass => println!("Result: PASS ✅"),
        Verdict::Fail => println!("Result: FAIL ❌"),
        Verdict::TimedOut => println!("Result: TIMED OUT ⏱"),
    }
}

pub fn display_summary(problem: &str, summary: &RunSummary) {
    println!("\n{}", summary_line(problem, summary));
}

pub fn summary_line(problem: &str, summary: &RunSummary) -> String {
    format!("{} test cases passed for {}.", summary.passed, problem)
}
