//! Dashboard orchestration: one store read per refresh, every widget's
//! data derived from that single snapshot.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;

use moodlog_core::factors::positive_tag_counts;
use moodlog_core::filter::{EntryFilter, filter_entries};
use moodlog_core::kpi::compute_kpis;
use moodlog_core::series::{mood_series, sleep_scatter};
use moodlog_core::triggers::compute_triggers;
use moodlog_core::{Entry, EntryStore};

use crate::error::DashboardResult;
use crate::types::DashboardSummary;

/// The dashboard view keeps this many trigger rows.
const TRIGGER_LIST_LEN: usize = 50;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn EntryStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// One dashboard refresh anchored to `now`.
    ///
    /// Overlapping refreshes are independent snapshots; callers that
    /// care about last-write-wins serialize or debounce on their side.
    pub async fn refresh(&self, now: NaiveDate) -> DashboardResult<DashboardSummary> {
        let started = Instant::now();
        let entries = self.store.list_entries().await?;

        let kpis = compute_kpis(&entries, now);
        let mut recent_triggers = compute_triggers(&entries);
        let overflow = recent_triggers.len().saturating_sub(TRIGGER_LIST_LEN);
        recent_triggers.drain(..overflow);
        recent_triggers.reverse();

        let summary = DashboardSummary {
            entry_count: entries.len(),
            kpis,
            recent_triggers,
            positive_tags: positive_tag_counts(&entries),
            mood_series: mood_series(&entries),
            sleep_points: sleep_scatter(&entries),
        };

        metrics::counter!("dashboard_refresh_total").increment(1);
        metrics::histogram!("dashboard_refresh_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        tracing::debug!(
            entries = summary.entry_count,
            triggers = summary.recent_triggers.len(),
            "dashboard refreshed"
        );

        Ok(summary)
    }

    /// Refresh anchored to the local calendar date. Test code injects a
    /// date through [`DashboardService::refresh`] instead.
    pub async fn refresh_today(&self) -> DashboardResult<DashboardSummary> {
        self.refresh(chrono::Local::now().date_naive()).await
    }

    /// History table rows: filtered entries, newest first.
    pub async fn history(&self, filter: &EntryFilter) -> DashboardResult<Vec<Entry>> {
        let entries = self.store.list_entries().await?;
        let mut rows = filter_entries(&entries, filter);
        rows.reverse();
        Ok(rows)
    }
}
