use clap::Parser;

use mathquiz::cli::{self, Cli};

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    cli::run(cli);
}
