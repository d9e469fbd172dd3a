//! Reporting over the application store.
//!
//! # Responsibility
//! - Derive funnel, priority and chart summaries from current store state.
//! - Shape the export table consumed by the CSV writer.
//!
//! # Invariants
//! - Reporting never mutates the store.
//! - Nothing is cached; each call re-reads the store.

pub mod chart;
pub mod export;
pub mod funnel;
pub mod priority;

use crate::repo::application_repo::ApplicationOrder;
use crate::service::application_store::{ApplicationStore, StoreResult};
use chart::{ChartData, PriorityDistribution, StatusChart};
use export::ExportTable;
use funnel::FunnelReport;
use priority::PriorityStats;
use serde::Serialize;

/// Analytics dashboard contents: every summary from one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub funnel: FunnelReport,
    pub priority: Option<PriorityStats>,
    pub charts: ChartData,
}

/// Stateless read-only view over an `ApplicationStore`.
pub struct Reporter<'store> {
    store: &'store ApplicationStore,
}

impl<'store> Reporter<'store> {
    pub fn new(store: &'store ApplicationStore) -> Self {
        Self { store }
    }

    /// Counts and percentages per present status.
    ///
    /// An empty store yields `FunnelReport::NoData`, not an error.
    pub fn funnel_report(&self) -> StoreResult<FunnelReport> {
        let counts = self.store.aggregate_status_counts()?;
        Ok(FunnelReport::from_counts(&counts))
    }

    /// Mean and median priority; `None` when the store is empty.
    pub fn priority_statistics(&self) -> StoreResult<Option<PriorityStats>> {
        let priorities = self.store.priorities()?;
        Ok(PriorityStats::from_priorities(&priorities))
    }

    /// Status chart pairs and the per-priority histogram.
    pub fn chart_data(&self) -> StoreResult<ChartData> {
        let counts = self.store.aggregate_status_counts()?;
        let priorities = self.store.priorities()?;
        Ok(ChartData {
            status: StatusChart::from_counts(&counts),
            priority: PriorityDistribution::from_priorities(&priorities),
        })
    }

    /// Fixed header plus every record in `order`.
    pub fn export_rows(&self, order: ApplicationOrder) -> StoreResult<ExportTable> {
        Ok(ExportTable::new(self.store.query(order)?))
    }

    pub fn dashboard(&self) -> StoreResult<Dashboard> {
        Ok(Dashboard {
            funnel: self.funnel_report()?,
            priority: self.priority_statistics()?,
            charts: self.chart_data()?,
        })
    }
}
