use chrono::{DateTime, Local};
use log::warn;
use serde::{Deserialize, Serialize};

/// One logged water-consumption event.
///
/// Nothing is validated: blank names and zero or negative gallons are kept
/// as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// User label for the task (e.g. "shower")
    pub name: String,
    /// Gallons used
    pub gallons: f64,
    /// When the record was added
    pub recorded_at: DateTime<Local>,
}

impl UsageRecord {
    /// Log line, e.g. "shower: 10 gallons on Tue Mar 05 2024".
    pub fn log_line(&self) -> String {
        format!(
            "{}: {} gallons on {}",
            self.name,
            self.gallons,
            self.recorded_at.format("%a %b %d %Y")
        )
    }
}

/// Sum of gallons over `records`; 0 when empty.
pub fn total_gallons(records: &[UsageRecord]) -> f64 {
    records.iter().map(|r| r.gallons).sum()
}

/// Gallons typed into a text box. Text that is not a number counts as 0.
pub fn parse_gallons(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(gallons) if gallons.is_finite() => gallons,
        _ => {
            warn!("ignoring non-numeric gallons {:?}", text);
            0.0
        }
    }
}
