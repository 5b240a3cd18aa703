use clap::Parser;
use zoonfarm::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
