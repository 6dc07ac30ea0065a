//! Normalization of raw payload entries into [`DisplayRecord`]s.
//!
//! Normalization never fails. Each field falls back to a fixed default when
//! it is missing or falsy (`null`, `false`, `0`, `""`), and list entries get
//! an illustrative image picked cyclically from [`IMAGE_PALETTE`].

use crate::models::{DisplayRecord, FeaturedPayload, FeaturedSlot, NewsPayload};
use serde_json::Value;
use tracing::{debug, instrument};

pub const DEFAULT_TITLE: &str = "Untitled News";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_URL: &str = "#";

/// Illustrative AI images assigned by position (`index % 8`).
pub const IMAGE_PALETTE: [&str; 8] = [
    "https://images.unsplash.com/photo-1677442136019-21780ecad995?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1555255707-c07966088b7b?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1531297484001-80022131f5a1?q=80&w=600&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1516110833967-0b5716ca1387?q=80&w=600&auto=format&fit=crop",
];

/// Normalize any payload into its display records.
///
/// `palette` is only consulted for list payloads; an empty palette leaves
/// every image unset.
pub fn normalize(payload: &NewsPayload, palette: &[String]) -> Vec<DisplayRecord> {
    match payload {
        NewsPayload::List(items) => normalize_list(items, palette),
        NewsPayload::Featured(featured) => normalize_featured(featured),
    }
}

/// Normalize a list payload. Produces exactly one record per item.
///
/// Items that are not JSON objects normalize to an all-default record.
#[instrument(level = "debug", skip_all, fields(items = items.len()))]
pub fn normalize_list(items: &[Value], palette: &[String]) -> Vec<DisplayRecord> {
    let records: Vec<DisplayRecord> = items
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayRecord {
            title: field_or(item, "title", DEFAULT_TITLE),
            description: field_or(item, "summary", DEFAULT_DESCRIPTION),
            category: field_or(item, "tag", DEFAULT_CATEGORY),
            url: field_or(item, "url", DEFAULT_URL),
            image: palette_image(palette, i),
        })
        .collect();
    debug!(count = records.len(), "Normalized list payload");
    records
}

/// Normalize the featured payload into exactly three records in slot order.
///
/// Slots follow the same falsy rule as list items; a missing or non-object
/// slot becomes an all-default record carrying its slot label.
pub fn normalize_featured(payload: &FeaturedPayload) -> Vec<DisplayRecord> {
    FeaturedSlot::ALL
        .iter()
        .map(|&slot| {
            let item = payload.slot(slot);
            DisplayRecord {
                title: field_or(item, "title", DEFAULT_TITLE),
                description: field_or(item, "summary", DEFAULT_DESCRIPTION),
                category: slot.category().to_string(),
                url: field_or(item, "url", DEFAULT_URL),
                image: None,
            }
        })
        .collect()
}

/// The default palette as owned strings, for configuration defaults.
pub fn default_palette() -> Vec<String> {
    IMAGE_PALETTE.iter().map(|s| s.to_string()).collect()
}

fn palette_image(palette: &[String], index: usize) -> Option<String> {
    if palette.is_empty() {
        None
    } else {
        Some(palette[index % palette.len()].clone())
    }
}

/// Read `key` from `item`, falling back to `default` when missing or falsy.
fn field_or(item: &Value, key: &str, default: &str) -> String {
    item.get(key)
        .and_then(truthy_text)
        .unwrap_or_else(|| default.to_string())
}

/// Text form of a truthy JSON scalar; `None` for falsy values.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_title_gets_defaults() {
        let records = normalize_list(&[json!({"title": "X"})], &default_palette());

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.title, "X");
        assert_eq!(r.description, "No description available.");
        assert_eq!(r.category, "general");
        assert_eq!(r.url, "#");
        assert_eq!(r.image.as_deref(), Some(IMAGE_PALETTE[0]));
    }

    #[test]
    fn test_palette_cycles_by_index() {
        let items: Vec<Value> = (0..19).map(|i| json!({"title": format!("n{i}")})).collect();
        let records = normalize_list(&items, &default_palette());

        assert_eq!(records.len(), 19);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.image.as_deref(), Some(IMAGE_PALETTE[i % 8]));
        }
    }

    #[test]
    fn test_falsy_values_fall_back() {
        let item = json!({"title": "", "summary": null, "tag": false, "url": 0});
        let r = &normalize_list(&[item], &default_palette())[0];

        assert_eq!(r.title, DEFAULT_TITLE);
        assert_eq!(r.description, DEFAULT_DESCRIPTION);
        assert_eq!(r.category, DEFAULT_CATEGORY);
        assert_eq!(r.url, DEFAULT_URL);
    }

    #[test]
    fn test_truthy_scalars_use_text_form() {
        let item = json!({"title": 42, "tag": true});
        let r = &normalize_list(&[item], &default_palette())[0];

        assert_eq!(r.title, "42");
        assert_eq!(r.category, "true");
    }

    #[test]
    fn test_non_object_items_never_fail() {
        let items = vec![json!(null), json!(7), json!("text"), json!([1, 2])];
        let records = normalize_list(&items, &default_palette());

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.title == DEFAULT_TITLE && r.url == DEFAULT_URL));
    }

    #[test]
    fn test_all_fields_copied() {
        let item = json!({
            "title": "GPT news",
            "summary": "Something **big** happened",
            "tag": "research",
            "url": "https://example.com/a"
        });
        let r = &normalize_list(&[item], &default_palette())[0];

        assert_eq!(r.title, "GPT news");
        assert_eq!(r.description, "Something **big** happened");
        assert_eq!(r.category, "research");
        assert_eq!(r.url, "https://example.com/a");
    }

    #[test]
    fn test_empty_palette_leaves_images_unset() {
        let records = normalize_list(&[json!({}), json!({})], &[]);
        assert!(records.iter().all(|r| r.image.is_none()));
    }

    #[test]
    fn test_featured_produces_three_records() {
        let payload = FeaturedPayload {
            best_news: json!({"title": "Best", "summary": "S", "url": "https://b.example"}),
            most_viral_news: Value::Null,
            relevant_news: json!({}),
        };

        let records = normalize_featured(&payload);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "Best");
        assert_eq!(records[0].category, "best");
        assert_eq!(records[0].url, "https://b.example");
        assert_eq!(records[1].title, DEFAULT_TITLE);
        assert_eq!(records[1].category, "viral");
        assert_eq!(records[2].description, DEFAULT_DESCRIPTION);
        assert_eq!(records[2].category, "relevant");
        assert!(records.iter().all(|r| r.image.is_none()));
    }

    #[test]
    fn test_malformed_featured_slot_does_not_affect_siblings() {
        let payload = FeaturedPayload {
            best_news: json!({"title": "Real A", "summary": "a", "url": ""}),
            most_viral_news: json!("oops"),
            relevant_news: json!({"title": 42, "summary": false}),
        };

        let records = normalize_featured(&payload);
        assert_eq!(records[0].title, "Real A");
        assert_eq!(records[0].url, DEFAULT_URL);
        assert_eq!(records[1].title, DEFAULT_TITLE);
        assert_eq!(records[1].category, "viral");
        assert_eq!(records[2].title, "42");
        assert_eq!(records[2].description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_normalize_dispatches_on_shape() {
        let list = NewsPayload::List(vec![json!({"title": "X"})]);
        assert_eq!(normalize(&list, &default_palette()).len(), 1);

        let featured = NewsPayload::Featured(FeaturedPayload::default());
        assert_eq!(normalize(&featured, &default_palette()).len(), 3);
    }
}
