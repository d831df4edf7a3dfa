use std::process::ExitCode;
use crate::structs::cli::Cli;
use clap::Parser;
use crate::workers::command_runner::CommandRunner;

mod structs;
mod services;
mod enums;
mod errors;
mod logger;
mod config;
mod workers;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    CommandRunner::new().run_command(&cli)
}
