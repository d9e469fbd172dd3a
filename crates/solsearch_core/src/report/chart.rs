//! Chart-ready data shapes. Rendering belongs to the caller.

use crate::model::application::{ApplicationStatus, Priority};
use serde::Serialize;
use std::collections::BTreeMap;

/// Index-aligned labels and values for a status bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl StatusChart {
    /// Every status in canonical order, zeros included.
    pub fn from_counts(counts: &BTreeMap<ApplicationStatus, u64>) -> Self {
        let (labels, values) = ApplicationStatus::ALL
            .into_iter()
            .map(|status| {
                (
                    status.as_str().to_string(),
                    counts.get(&status).copied().unwrap_or(0),
                )
            })
            .unzip();
        Self { labels, values }
    }

    /// Same pairs with zero-count categories removed.
    pub fn non_zero(&self) -> StatusChart {
        let (labels, values) = self
            .labels
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| **value > 0)
            .map(|(label, value)| (label.clone(), *value))
            .unzip();
        StatusChart { labels, values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|value| *value == 0)
    }
}

/// Record count per priority level `1..=5`, zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityDistribution {
    pub counts: BTreeMap<u8, u64>,
}

impl PriorityDistribution {
    pub fn from_priorities(priorities: &[Priority]) -> Self {
        let mut counts: BTreeMap<u8, u64> = Priority::levels().map(|level| (level.get(), 0)).collect();
        for priority in priorities {
            *counts.entry(priority.get()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count_for(&self, priority: Priority) -> u64 {
        self.counts.get(&priority.get()).copied().unwrap_or(0)
    }
}

/// Both chart inputs from one read of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub status: StatusChart,
    pub priority: PriorityDistribution,
}

#[cfg(test)]
mod tests {
    use super::{PriorityDistribution, StatusChart};
    use crate::model::application::{ApplicationStatus, Priority};
    use std::collections::BTreeMap;

    #[test]
    fn status_chart_keeps_zero_categories_aligned() {
        let counts = BTreeMap::from([(ApplicationStatus::Offer, 2), (ApplicationStatus::Applied, 5)]);
        let chart = StatusChart::from_counts(&counts);
        assert_eq!(chart.labels, ["Applied", "Interview", "Rejected", "Offer"]);
        assert_eq!(chart.values, [5, 0, 0, 2]);

        let compact = chart.non_zero();
        assert_eq!(compact.labels, ["Applied", "Offer"]);
        assert_eq!(compact.values, [5, 2]);
    }

    #[test]
    fn empty_counts_give_all_zero_chart() {
        let chart = StatusChart::from_counts(&BTreeMap::new());
        assert_eq!(chart.labels.len(), chart.values.len());
        assert!(chart.is_empty());
        assert!(chart.non_zero().labels.is_empty());
    }

    #[test]
    fn priority_distribution_lists_every_level() {
        let priorities: Vec<Priority> = [5, 3, 5]
            .into_iter()
            .map(|value| Priority::new(value).unwrap())
            .collect();
        let distribution = PriorityDistribution::from_priorities(&priorities);
        let levels: Vec<u8> = distribution.counts.keys().copied().collect();
        assert_eq!(levels, [1, 2, 3, 4, 5]);
        assert_eq!(distribution.count_for(Priority::new(5).unwrap()), 2);
        assert_eq!(distribution.count_for(Priority::new(1).unwrap()), 0);
    }
}
