use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{ENV_FILE_NAME, TOTAL_ENV_KEY};
use crate::enums::risk_level::RiskLevel;
use crate::errors::{ZapResult, ZapSeverityError};
use crate::structs::severity_counts::SeverityCounts;

pub struct EnvFileWriter;

impl EnvFileWriter {
    /// The env file lives next to the report it was computed from.
    pub fn env_path_for(report_path: &Path) -> PathBuf {
        report_path.with_file_name(ENV_FILE_NAME)
    }

    pub fn render(counts: &SeverityCounts) -> String {
        let mut content = String::new();
        for level in RiskLevel::ALL {
            content.push_str(&format!("{}={}\n", level.env_key(), counts.get(level)));
        }
        content.push_str(&format!("{}={}\n", TOTAL_ENV_KEY, counts.total()));
        content
    }

    /// Writes the five `KEY=VALUE` lines, replacing whatever was at `path`.
    pub fn write(counts: &SeverityCounts, path: &Path) -> ZapResult<()> {
        fs::write(path, Self::render(counts)).map_err(|source| ZapSeverityError::EnvFileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("💾 Wrote {}", path.display());
        Ok(())
    }
}
