use std::time::Duration;

use crate::display::{display_menu, display_outcome, display_summary};
use crate::error::Error;
use crate::lang::{ProcessExecutor, Toolchain};
use crate::models::{list_problems, ProblemLayout, UserConfig};
use crate::runner;
use super::{fail, prompt};

pub fn run_problem(user_config: &UserConfig, problem: Option<String>) {
    let root = &user_config.problems_root;

    let problem = match problem {
        Some(p) => p,
        None => select_problem(user_config),
    };

    let layout = ProblemLayout::open(root, &problem).unwrap_or_else(|e| fail(e));

    println!("\nCompiling {}...", layout.source.display());

    let toolchain = Toolchain::from_config(user_config);
    let executor = ProcessExecutor::new(user_config.timeout_secs.map(Duration::from_secs));

    match runner::run_problem(&layout, &toolchain, &executor, display_outcome) {
        Ok(summary) => display_summary(&layout.name, &summary),
        Err(Error::BuildFailed { diagnostics }) => {
            if !diagnostics.trim().is_empty() {
                eprintln!("{}", diagnostics.trim_end());
            }
            fail(Error::BuildFailed { diagnostics })
        }
        Err(e) => fail(e),
    }
}

fn select_problem(user_config: &UserConfig) -> String {
    let problems = list_problems(&user_config.problems_root).unwrap_or_else(|e| fail(e));
    display_menu(&problems);

    let choice = prompt::read_line(&format!(
        "Select a problem to test (1-{}): ",
        problems.len()
    ))
    .unwrap_or_else(|e| fail(e));

    match prompt::parse_selection(&choice, problems.len()) {
        Ok(idx) => problems[idx].clone(),
        Err(e) => fail(e),
    }
}
