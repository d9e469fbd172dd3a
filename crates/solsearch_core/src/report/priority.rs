//! Central tendency of stored priorities.

use crate::model::application::Priority;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Mean and median over all stored priorities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriorityStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
}

impl PriorityStats {
    /// Returns `None` for an empty input.
    pub fn from_priorities(priorities: &[Priority]) -> Option<Self> {
        if priorities.is_empty() {
            return None;
        }

        let mut values: Vec<u8> = priorities.iter().map(|priority| priority.get()).collect();
        values.sort_unstable();

        let count = values.len();
        let sum: u64 = values.iter().map(|value| u64::from(*value)).sum();
        let mean = sum as f64 / count as f64;
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (f64::from(values[mid - 1]) + f64::from(values[mid])) / 2.0
        } else {
            f64::from(values[mid])
        };

        Some(Self {
            count,
            mean,
            median,
        })
    }
}

impl Display for PriorityStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let max = f64::from(Priority::MAX);
        writeln!(f, " > Total Apps:      {}", self.count)?;
        writeln!(f, " > Average Score:   {:.2} / {:.1}", self.mean, max)?;
        write!(f, " > Median Score:    {:.2} / {:.1}", self.median, max)
    }
}

#[cfg(test)]
mod tests {
    use super::PriorityStats;
    use crate::model::application::Priority;

    fn priorities(values: &[u8]) -> Vec<Priority> {
        values.iter().map(|value| Priority::new(*value).unwrap()).collect()
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(PriorityStats::from_priorities(&[]), None);
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let stats = PriorityStats::from_priorities(&priorities(&[5, 1, 4, 2])).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);

        let skewed = PriorityStats::from_priorities(&priorities(&[1, 1, 2, 5])).unwrap();
        assert_eq!(skewed.median, 1.5);
        assert_eq!(skewed.mean, 2.25);
    }

    #[test]
    fn display_uses_two_decimals() {
        let stats = PriorityStats::from_priorities(&priorities(&[3])).unwrap();
        let rendered = stats.to_string();
        assert!(rendered.contains("Average Score:   3.00 / 5.0"));
        assert!(rendered.contains("Median Score:    3.00 / 5.0"));
    }
}
