use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use moodlog_core::Entry;
use moodlog_core::filter::EntryFilter;
use moodlog_core::memory_store::MemoryStore;
use moodlog_dashboard::DashboardService;

fn entry(date: String, mood: f64, tags: &[&str]) -> Entry {
    Entry {
        date,
        mood: Some(mood),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Entry::default()
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).expect("ymd")
}

#[tokio::test]
async fn refresh_assembles_all_widget_data() {
    let entries = vec![
        entry("2026-03-11".into(), 6.0, &["Sport"]),
        entry("2026-03-12".into(), 6.0, &["Sport"]),
        entry("2026-03-13".into(), 6.0, &[]),
        entry("2026-03-14".into(), 7.0, &["Soziales"]),
        entry("2026-03-15".into(), 4.0, &[]),
    ];
    let service = DashboardService::new(Arc::new(MemoryStore::with_entries(entries)));
    let summary = service.refresh(day(15)).await.expect("refresh");

    assert_eq!(summary.entry_count, 5);
    assert_eq!(summary.kpis.avg7, Some(5.8));
    // trend: 4.0 against mean(6,6,6,7)
    assert_eq!(summary.kpis.trend, Some(-2.25));
    // 2026-03-15: baseline mean(6,6,6,7) = 6.25, 4.0 <= 5.25
    assert_eq!(summary.recent_triggers.len(), 1);
    assert_eq!(summary.recent_triggers[0].date, "2026-03-15");
    assert_eq!(summary.recent_triggers[0].baseline, 6.25);
    // overall mean 5.8: the 6.0 and 7.0 days count their tags
    assert_eq!(
        summary.positive_tags.labels,
        vec!["Sport".to_string(), "Soziales".to_string()]
    );
    assert_eq!(summary.positive_tags.counts, vec![2, 1]);
    assert_eq!(summary.mood_series.labels.len(), 5);
    assert!(summary.sleep_points.is_empty());
}

#[tokio::test]
async fn trigger_list_is_capped_and_newest_first() {
    // Mood cycle 6,6,6,2: every dip day past the warm-up is a trigger,
    // 60 of them across 240 days.
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).expect("ymd");
    let entries: Vec<Entry> = (0..240)
        .map(|i| {
            let mood = if i % 4 == 3 { 2.0 } else { 6.0 };
            let date = base + Duration::days(i);
            entry(date.format("%Y-%m-%d").to_string(), mood, &[])
        })
        .collect();
    let service = DashboardService::new(Arc::new(MemoryStore::with_entries(entries)));
    let summary = service
        .refresh(base + Duration::days(239))
        .await
        .expect("refresh");

    assert_eq!(summary.recent_triggers.len(), 50);
    let first = &summary.recent_triggers[0];
    let last = &summary.recent_triggers[49];
    assert!(first.date > last.date, "expected newest first");
    assert_eq!(first.date, "2025-08-28");
}

#[tokio::test]
async fn history_filters_and_reverses() {
    let entries = vec![
        entry("2026-03-01".into(), 5.0, &["Arbeit"]),
        entry("2026-03-02".into(), 5.0, &["Sport"]),
        entry("2026-03-03".into(), 5.0, &["Arbeit", "Sport"]),
    ];
    let service = DashboardService::new(Arc::new(MemoryStore::with_entries(entries)));
    let filter = EntryFilter {
        tag: Some("arbeit".into()),
        ..EntryFilter::default()
    };
    let rows = service.history(&filter).await.expect("history");
    let dates: Vec<&str> = rows.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-03-03", "2026-03-01"]);
}

#[tokio::test]
async fn concurrent_refreshes_agree() {
    let entries: Vec<Entry> = (1..=9)
        .map(|d| entry(format!("2026-03-{d:02}"), d as f64, &[]))
        .collect();
    let service = DashboardService::new(Arc::new(MemoryStore::with_entries(entries)));
    let (a, b) = tokio::join!(service.refresh(day(9)), service.refresh(day(9)));
    let a = a.expect("refresh a");
    let b = b.expect("refresh b");
    assert_eq!(a.kpis, b.kpis);
    assert_eq!(a.recent_triggers, b.recent_triggers);
}
