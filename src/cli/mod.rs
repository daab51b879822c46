mod config_cmd;
mod list;
mod new;
mod prompt;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Error;
use crate::models::{config, Language};

#[derive(Parser)]
#[command(name = "cpkit")]
#[command(about = "Scaffold and test competitive programming problems", long_about = None)]
pub struct Cli {
    /// Problems folder, overriding the configured one
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new problem folder
    New {
        name: Option<String>,
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        cases: Option<u32>,
        #[arg(short, long, value_enum)]
        lang: Option<Language>,
    },
    /// Build a problem's solution and check it against its test cases
    Run { problem: Option<String> },
    /// List the available problems
    List,
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

pub fn run(cli: Cli) {
    let mut user_config = config::load_config().unwrap_or_else(|e| fail(e));
    if let Some(root) = cli.root {
        user_config.problems_root = root;
    }

    match cli.command {
        None | Some(Commands::List) => list::list_problems(&user_config),
        Some(Commands::New { name, cases, lang }) => {
            new::new_problem(&user_config, name, cases, lang)
        }
        Some(Commands::Run { problem }) => run::run_problem(&user_config, problem),
        Some(Commands::Config { init }) => config_cmd::show_config(&user_config, init),
    }
}

fn fail(e: Error) -> ! {
    eprintln!("{}", e);
    std::process::exit(1);
}

