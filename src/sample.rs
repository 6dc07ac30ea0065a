//! Built-in sample news used when a load fails under the sample fallback policy.
//!
//! The sample goes through the same normalize/render path as fetched data.

use crate::models::{FeaturedPayload, FeaturedSlot, Layout, NewsPayload};
use serde_json::json;

const SAMPLE: [(&str, &str); 3] = [
    (
        "Open-Weight Model Tops Reasoning Benchmarks",
        "A new **open-weight language model** matched proprietary systems on several **reasoning benchmarks**, renewing debate over how quickly frontier capabilities spread.",
    ),
    (
        "AI-Generated Short Film Goes Viral Overnight",
        "A short film produced almost entirely with **video generation** tools drew millions of views, sparking discussion among **filmmakers** about creative credit.",
    ),
    (
        "Chipmakers Race to Meet Data Center Demand",
        "Demand for **AI accelerators** keeps outpacing supply as cloud providers expand **data center** capacity for training and inference.",
    ),
];

/// The sample payload in the shape `layout` expects.
pub fn sample_payload(layout: Layout) -> NewsPayload {
    match layout {
        Layout::Featured => NewsPayload::Featured(sample_featured()),
        Layout::List => NewsPayload::List(
            SAMPLE
                .iter()
                .zip(FeaturedSlot::ALL)
                .map(|((title, summary), slot)| {
                    json!({"title": title, "summary": summary, "tag": slot.category()})
                })
                .collect(),
        ),
    }
}

fn sample_featured() -> FeaturedPayload {
    let item = |i: usize| json!({"title": SAMPLE[i].0, "summary": SAMPLE[i].1});
    FeaturedPayload {
        best_news: item(0),
        most_viral_news: item(1),
        relevant_news: item(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{default_palette, normalize};

    #[test]
    fn test_sample_has_three_records_in_both_layouts() {
        for layout in [Layout::List, Layout::Featured] {
            let records = normalize(&sample_payload(layout), &default_palette());
            assert_eq!(records.len(), 3);
            assert_eq!(records[0].title, SAMPLE[0].0);
            assert_eq!(records[2].category, "relevant");
        }
    }

    #[test]
    fn test_sample_links_default_to_hash() {
        let records = normalize(&sample_payload(Layout::Featured), &default_palette());
        assert!(records.iter().all(|r| r.url == "#"));
    }
}
