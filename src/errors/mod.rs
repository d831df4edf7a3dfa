use std::io;
use std::path::PathBuf;
use thiserror::Error;
use crate::config::constants::{EXIT_FAILURE, EXIT_MALFORMED_REPORT, EXIT_REPORT_NOT_FOUND};

#[derive(Debug, Error)]
pub enum ZapSeverityError {
    #[error("report not found: {}", path.display())]
    ReportNotFound {
        path: PathBuf,
    },

    #[error("failed to parse XML: {reason}")]
    MalformedReport {
        reason: String,
    },

    #[error("failed to read report '{}': {source}", path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write env file '{}': {source}", path.display())]
    EnvFileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize counts: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ZapSeverityError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedReport {
            reason: reason.into(),
        }
    }

    /// Process exit status for this failure. Only a missing report and a
    /// malformed report have dedicated codes.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ReportNotFound { .. } => EXIT_REPORT_NOT_FOUND,
            Self::MalformedReport { .. } => EXIT_MALFORMED_REPORT,
            Self::ReportRead { .. } | Self::EnvFileWrite { .. } | Self::Serialization(_) => EXIT_FAILURE,
        }
    }
}

/// Result type alias for zap-severity operations
pub type ZapResult<T> = Result<T, ZapSeverityError>;
