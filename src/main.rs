use clap::Parser;
use cpkit::cli::{self, Cli};

fn main() {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    cli::run(cli);
}
