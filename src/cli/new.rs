use crate::display::display_created;
use crate::error::{Error, Result};
use crate::models::{Language, UserConfig};
use crate::scaffold::{create_problem, Created};
use super::{fail, prompt};

pub fn new_problem(
    user_config: &UserConfig,
    name: Option<String>,
    cases: Option<u32>,
    lang: Option<Language>,
) {
    let name = match name {
        Some(n) => n.trim().to_string(),
        None => prompt::read_line("Enter problem name (e.g., q1): ").unwrap_or_else(|e| fail(e)),
    };
    let cases = cases.unwrap_or(user_config.default_cases).max(1);
    let language = lang.unwrap_or(user_config.language);

    let result = create_problem(&user_config.problems_root, &name, cases, language);
    if let Err(e) = report_created(result) {
        fail(e);
    }
}

/// Prints the scaffolding result. An existing problem is reported but is not
/// an error; anything else is handed back as fatal.
fn report_created(result: Result<Vec<Created>>) -> Result<()> {
    match result {
        Ok(created) => {
            display_created(&created);
            Ok(())
        }
        Err(e @ Error::AlreadyExists(_)) => {
            println!("{}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
