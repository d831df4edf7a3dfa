/// One `<alertitem>` from a ZAP report. `risk_code` holds the raw text of its
/// first `<riskcode>` child, if it has one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertItem {
    pub risk_code: Option<String>,
}

/// A fully parsed ZAP report: every alert item, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub alerts: Vec<AlertItem>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
