/// ZAP alert severity, keyed by the numeric `riskcode` ZAP writes into its XML report.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Informational,
}

impl RiskLevel {
    /// Env-file order.
    pub const ALL: [Self; 4] = [Self::High, Self::Medium, Self::Low, Self::Informational];

    /// Maps a `riskcode` value to its level. The text must be exactly `"0"`..`"3"`,
    /// padded or otherwise decorated values are not a level.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "3" => Some(Self::High),
            "2" => Some(Self::Medium),
            "1" => Some(Self::Low),
            "0" => Some(Self::Informational),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::High => "3",
            Self::Medium => "2",
            Self::Low => "1",
            Self::Informational => "0",
        }
    }

    pub const fn env_key(self) -> &'static str {
        match self {
            Self::High => "ZAP_HIGH",
            Self::Medium => "ZAP_MEDIUM",
            Self::Low => "ZAP_LOW",
            Self::Informational => "ZAP_INFO",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Informational => "Informational",
        }
    }
}
