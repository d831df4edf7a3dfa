use crate::enums::risk_level::RiskLevel;
use crate::structs::report::Report;
use crate::structs::severity_counts::SeverityCounts;

pub struct AlertCounter;

impl AlertCounter {
    /// Tallies alert items by risk level. Alerts with no `riskcode`, or with a
    /// code outside `0`..`3`, are skipped and do not reach the total.
    pub fn count(report: &Report) -> SeverityCounts {
        let mut counts = SeverityCounts::default();

        for alert in &report.alerts {
            match alert.risk_code.as_deref().and_then(RiskLevel::from_code) {
                Some(level) => counts.record(level),
                None => log::debug!("⏭️ Ignoring alert with risk code {:?}", alert.risk_code),
            }
        }

        counts
    }
}
