use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use crate::enums::risk_level::RiskLevel;

/// Alert tallies per risk level. The total is always derived from the four
/// buckets and never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, level: RiskLevel) {
        *self.bucket_mut(level) += 1;
    }

    pub const fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
            RiskLevel::Informational => self.info,
        }
    }

    /// Lookup by raw `riskcode` string, `"0"`..`"3"`. Any other key has no bucket.
    pub fn by_code(&self, code: &str) -> Option<usize> {
        RiskLevel::from_code(code).map(|level| self.get(level))
    }

    pub const fn total(&self) -> usize {
        self.high + self.medium + self.low + self.info
    }

    fn bucket_mut(&mut self, level: RiskLevel) -> &mut usize {
        match level {
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
            RiskLevel::Informational => &mut self.info,
        }
    }
}

impl Serialize for SeverityCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SeverityCounts", 5)?;
        state.serialize_field("high", &self.high)?;
        state.serialize_field("medium", &self.medium)?;
        state.serialize_field("low", &self.low)?;
        state.serialize_field("info", &self.info)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}
