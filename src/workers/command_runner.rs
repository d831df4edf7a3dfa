use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use crate::config::constants::EXIT_SUCCESS;
use crate::enums::risk_level::RiskLevel;
use crate::errors::{ZapResult, ZapSeverityError};
use crate::services::alert_counter::AlertCounter;
use crate::services::env_file_writer::EnvFileWriter;
use crate::services::report_parser::ReportParser;
use crate::structs::cli::Cli;
use crate::structs::severity_counts::SeverityCounts;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub counts: SeverityCounts,
    pub env_path: PathBuf,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub fn run_command(&mut self, cli: &Cli) -> ExitCode {
        self.start_time = Some(Instant::now());

        let result = Self::process_report(&cli.report).and_then(|outcome| {
            if cli.json {
                println!("{}", serde_json::to_string(&outcome.counts)?);
            }
            Ok(outcome)
        });

        if let Some(start) = self.start_time {
            log::info!("⏱️  Completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        match result {
            Ok(outcome) => {
                log::info!("✅ Severity counts written to {}", outcome.env_path.display());
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                log::debug!("{:?}", e);
                eprintln!("error: {}", e);
                ExitCode::from(e.exit_code())
            }
        }
    }

    /// Parses the report at `report_path`, tallies its alerts and writes the env
    /// file beside it. Nothing is written unless the whole report parsed.
    pub fn process_report(report_path: &Path) -> ZapResult<ReportOutcome> {
        if !report_path.is_file() {
            return Err(ZapSeverityError::ReportNotFound {
                path: report_path.to_path_buf(),
            });
        }

        log::info!("🔍 Parsing ZAP report: {}", report_path.display());
        let report = ReportParser::parse_file(report_path)?;
        if report.is_empty() {
            log::info!("🎉 No alert items in report");
        } else {
            log::info!("📋 Found {} alert items", report.len());
        }

        let counts = AlertCounter::count(&report);
        for level in RiskLevel::ALL {
            log::info!("   {:<13} (riskcode {}) {}", level.label(), level.code(), counts.get(level));
        }
        log::info!("   {:<13}              {}", "Total", counts.total());

        let env_path = EnvFileWriter::env_path_for(report_path);
        EnvFileWriter::write(&counts, &env_path)?;

        Ok(ReportOutcome { counts, env_path })
    }
}
