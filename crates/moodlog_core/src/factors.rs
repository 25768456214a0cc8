//! Ranking of tags that co-occur with above-average mood days.

use std::collections::HashMap;

use serde::Serialize;

use crate::Entry;

/// Ranking chart shows at most this many tags.
const MAX_TAGS: usize = 12;

/// Parallel label/count columns for the ranking chart, descending by
/// count, ties in first-encountered order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TagFrequencies {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
}

/// Count tags on days whose mood is strictly above the overall mean.
///
/// The mean here covers only entries with a parseable mood; unparsable
/// moods are excluded rather than coerced to 0. The KPI and trigger
/// paths coerce instead; the two policies differ on purpose and both
/// are pinned by tests.
pub fn positive_tag_counts(entries: &[Entry]) -> TagFrequencies {
    let moods: Vec<f64> = entries.iter().filter_map(|e| e.mood).collect();
    if moods.is_empty() {
        return TagFrequencies::default();
    }
    let overall = moods.iter().sum::<f64>() / moods.len() as f64;

    // First-encountered order doubles as the tie-break: the stable sort
    // below never reorders equal counts.
    let mut ranked: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        let Some(mood) = entry.mood else { continue };
        if mood <= overall {
            continue;
        }
        for tag in &entry.tags {
            let label = tag.trim();
            if label.is_empty() {
                continue;
            }
            match index.get(label) {
                Some(&i) => ranked[i].1 += 1,
                None => {
                    index.insert(label.to_string(), ranked.len());
                    ranked.push((label.to_string(), 1));
                }
            }
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_TAGS);

    TagFrequencies {
        labels: ranked.iter().map(|(label, _)| label.clone()).collect(),
        counts: ranked.iter().map(|(_, count)| *count).collect(),
    }
}
