//! Plain-text rendering of records and reports for the terminal.

use solsearch_core::{Application, Dashboard, StatusChart};
use std::fmt::{Display, Formatter};

const COMPANY_WIDTH: usize = 18;
const ROLE_WIDTH: usize = 18;
const BAR_WIDTH: u64 = 40;

/// Aligned history table with truncated text cells and star priorities.
pub struct ApplicationTable<'a>(pub &'a [Application]);

impl Display for ApplicationTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<4} {:<18} {:<18} {:<12} {:<10} {:<10}",
            "ID", "Company", "Role", "Date", "Status", "Priority"
        )?;
        writeln!(f, "{}", "=".repeat(78))?;

        if self.0.is_empty() {
            return writeln!(f, "No records found.");
        }

        for application in self.0 {
            writeln!(
                f,
                "{:<4} {:<18} {:<18} {:<12} {:<10} {:<10}",
                application.id,
                truncate_cell(&application.company, COMPANY_WIDTH),
                truncate_cell(&application.role, ROLE_WIDTH),
                application.date_applied,
                application.status,
                application.stars()
            )?;
        }
        Ok(())
    }
}

/// Funnel, priority alignment and a text bar chart.
pub struct DashboardView<'a>(pub &'a Dashboard);

impl Display for DashboardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dashboard = self.0;
        writeln!(f, "--- FUNNEL ANALYSIS ---")?;
        writeln!(f, "{}", dashboard.funnel)?;

        if let Some(priority) = &dashboard.priority {
            writeln!(f, "\n--- PRIORITY ALIGNMENT ---")?;
            writeln!(f, "{priority}")?;
        }

        writeln!(f, "\n--- STATUS DISTRIBUTION ---")?;
        write!(f, "{}", StatusBars(&dashboard.charts.status))
    }
}

struct StatusBars<'a>(&'a StatusChart);

impl Display for StatusBars<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let chart = self.0.non_zero();
        if chart.labels.is_empty() {
            return writeln!(f, "Not enough data for chart.");
        }

        let max = chart.values.iter().copied().max().unwrap_or(1).max(1);
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            // Round up so every non-zero bucket stays visible.
            let width = (value * BAR_WIDTH).div_ceil(max);
            let bar_len = usize::try_from(width).unwrap_or(0);
            writeln!(f, "{label:<10} {} {value}", "#".repeat(bar_len))?;
        }
        Ok(())
    }
}

fn truncate_cell(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{truncate_cell, ApplicationTable, StatusBars};
    use solsearch_core::{Application, ApplicationStatus, AppliedDate, Priority, StatusChart};

    #[test]
    fn long_cells_are_cut_with_ellipsis() {
        assert_eq!(
            truncate_cell("Senior Engineering Manager", 18),
            "Senior Engineer..."
        );
        assert_eq!(truncate_cell("Stripe", 18), "Stripe");
    }

    #[test]
    fn empty_table_says_so() {
        assert!(ApplicationTable(&[]).to_string().contains("No records found."));
    }

    #[test]
    fn table_rows_keep_column_alignment() {
        let applications = vec![Application {
            id: 7,
            company: "Stripe".to_string(),
            role: "Senior Engineering Manager".to_string(),
            date_applied: AppliedDate::parse("2024-03-09").unwrap(),
            status: ApplicationStatus::Offer,
            priority: Priority::new(3).unwrap(),
        }];

        let rendered = ApplicationTable(&applications).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[2].trim_end(),
            "7    Stripe             Senior Engineer... 2024-03-09   Offer      ***"
        );
        assert_eq!(lines[0].find("Date"), lines[2].find("2024-03-09"));
    }

    #[test]
    fn bars_skip_zero_buckets_and_scale_to_max() {
        let chart = StatusChart {
            labels: vec!["Applied".into(), "Interview".into(), "Offer".into()],
            values: vec![4, 0, 1],
        };
        let rendered = StatusBars(&chart).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Applied"));
        assert_eq!(lines[0].matches('#').count(), 40);
        assert_eq!(lines[1].matches('#').count(), 10);
    }
}
