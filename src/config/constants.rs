pub const DEFAULT_REPORT_PATH: &str = "zap-report.xml";
pub const ENV_FILE_NAME: &str = "zap-severity.env";

pub const ALERT_ITEM_TAG: &[u8] = b"alertitem";
pub const RISK_CODE_TAG: &[u8] = b"riskcode";

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_REPORT_NOT_FOUND: u8 = 2;
pub const EXIT_MALFORMED_REPORT: u8 = 3;

pub const TOTAL_ENV_KEY: &str = "ZAP_TOTAL";
