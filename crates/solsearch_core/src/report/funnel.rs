//! Status funnel: how records are spread across pipeline stages.

use crate::model::application::ApplicationStatus;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// One funnel row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub status: ApplicationStatus,
    pub count: u64,
    /// Share of all records, `0.0..=100.0`.
    pub percentage: f64,
}

/// Funnel over every record in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FunnelReport {
    /// The store is empty; there is nothing to divide by.
    NoData,
    /// Present statuses in canonical order.
    Stages(Vec<FunnelStage>),
}

impl FunnelReport {
    /// Builds the funnel from per-status counts.
    pub fn from_counts(counts: &BTreeMap<ApplicationStatus, u64>) -> Self {
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Self::NoData;
        }

        let stages = counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(status, count)| FunnelStage {
                status: *status,
                count: *count,
                percentage: 100.0 * (*count as f64) / (total as f64),
            })
            .collect();
        Self::Stages(stages)
    }

    pub fn total(&self) -> u64 {
        match self {
            Self::NoData => 0,
            Self::Stages(stages) => stages.iter().map(|stage| stage.count).sum(),
        }
    }

    pub fn stages(&self) -> &[FunnelStage] {
        match self {
            Self::NoData => &[],
            Self::Stages(stages) => stages,
        }
    }
}

impl Display for FunnelStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            " > {:<15}: {} ({:.1}%)",
            self.status.as_str(),
            self.count,
            self.percentage
        )
    }
}

impl Display for FunnelReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => f.write_str("No data available yet."),
            Self::Stages(stages) => {
                for (index, stage) in stages.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{stage}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FunnelReport;
    use crate::model::application::ApplicationStatus;
    use std::collections::BTreeMap;

    #[test]
    fn empty_counts_report_no_data() {
        let report = FunnelReport::from_counts(&BTreeMap::new());
        assert_eq!(report, FunnelReport::NoData);
        assert_eq!(report.to_string(), "No data available yet.");
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn thirds_render_with_one_decimal() {
        let counts = BTreeMap::from([
            (ApplicationStatus::Offer, 1),
            (ApplicationStatus::Applied, 1),
            (ApplicationStatus::Rejected, 1),
        ]);
        let rendered = FunnelReport::from_counts(&counts).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" > Applied"));
        assert!(lines[0].ends_with("1 (33.3%)"));
        assert!(lines[1].starts_with(" > Rejected"));
        assert!(lines[2].starts_with(" > Offer"));
    }
}
