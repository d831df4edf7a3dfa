use std::path::PathBuf;
use clap::{ArgAction, Parser};
use crate::config::constants::DEFAULT_REPORT_PATH;

#[derive(Parser, Debug)]
#[clap(name = "zap-severity", version)]
#[clap(about = "Tally ZAP report alerts by risk code into a CI env file", long_about = None)]
pub struct Cli {
    /// Path to the ZAP XML report
    #[clap(default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// Also print the counts as JSON on stdout
    #[clap(long)]
    pub json: bool,

    /// Increase log output (-v info, -vv debug)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
