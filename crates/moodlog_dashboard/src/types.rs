use serde::Serialize;

use moodlog_core::factors::TagFrequencies;
use moodlog_core::kpi::Kpis;
use moodlog_core::series::{MoodSeries, SleepPoint};
use moodlog_core::triggers::TriggerEvent;

/// Everything one dashboard render needs, as plain data. The
/// presentation collaborator owns widgets and their lifecycle; nothing
/// in here holds a handle to anything.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardSummary {
    pub entry_count: usize,
    pub kpis: Kpis,
    /// Most recent trigger events, newest first, capped at 50.
    pub recent_triggers: Vec<TriggerEvent>,
    pub positive_tags: TagFrequencies,
    pub mood_series: MoodSeries,
    pub sleep_points: Vec<SleepPoint>,
}
