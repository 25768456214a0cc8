//! Seed a volatile store with two weeks of sample entries and print one
//! dashboard refresh as JSON.
//!
//! Run with `cargo run --example render_dashboard`; set `RUST_LOG=debug`
//! to watch the refresh.

use std::sync::Arc;

use chrono::{Duration, Local};
use moodlog_core::memory_store::MemoryStore;
use moodlog_core::{Entry, EntryStore, MedDose};
use moodlog_dashboard::DashboardService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let today = Local::now().date_naive();
    let moods = [6.0, 7.0, 6.0, 5.0, 6.0, 7.0, 6.0, 6.0, 4.0, 6.0, 5.0, 6.0, 7.0, 3.0];

    let store = MemoryStore::new();
    for (i, mood) in moods.iter().enumerate() {
        let date = today - Duration::days((moods.len() - 1 - i) as i64);
        let entry = Entry {
            date: date.format("%Y-%m-%d").to_string(),
            mood: Some(*mood),
            anxiety: Some(10.0 - mood),
            sleep_hours: Some(6.0 + (i % 3) as f64),
            tags: if *mood >= 7.0 {
                vec!["Sport".into(), "Soziales".into()]
            } else {
                vec![]
            },
            notes: String::new(),
            meds: vec![MedDose {
                name: "Sertraline".into(),
                dose: "50mg".into(),
            }],
            ..Entry::default()
        };
        store.add_entry(entry).await?;
    }

    let service = DashboardService::new(Arc::new(store));
    let summary = service.refresh(today).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
