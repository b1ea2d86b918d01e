use reqwest::Client;
use serde_json::Value;

use super::{
    fetcher,
    providers::ImageProvider,
};
use crate::core::{
    CategoryOption,
    FetchError,
};

/// Fetch the provider's category/breed listing. Safe to call again to refresh.
///
/// Failures here are local and recoverable: the caller keeps its default
/// "Random" entry, so a dead listing endpoint just means an emptier dropdown.
pub async fn load_categories(client: &Client, provider: ImageProvider) -> Vec<CategoryOption> {
    match fetch_listing(client, provider).await {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Failed to load categories from {}: {}", provider.label(), e);
            Vec::new()
        }
    }
}

async fn fetch_listing(
    client: &Client,
    provider: ImageProvider,
) -> Result<Vec<CategoryOption>, FetchError> {
    let (status, body) = fetcher::fetch_body(client, provider.listing_url()).await?;
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    parse_listing(&body)
}

fn parse_listing(body: &str) -> Result<Vec<CategoryOption>, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Malformed(format!("listing is not JSON: {e}")))?;

    let entries = value
        .as_array()
        .ok_or_else(|| FetchError::Malformed("listing is not an array".to_string()))?;

    Ok(entries.iter().filter_map(option_from_entry).collect())
}

// Providers disagree on shape: Cataas lists bare tag strings, TheCatAPI lists
// breed objects with id/name. Entries fitting neither are skipped.
fn option_from_entry(entry: &Value) -> Option<CategoryOption> {
    match entry {
        Value::String(tag) if !tag.is_empty() => {
            Some(CategoryOption { value: tag.clone(), label: tag.clone() })
        }
        Value::Object(fields) => {
            let value = fields.get("id")?.as_str()?;
            let label = fields.get("name").and_then(Value::as_str).unwrap_or(value);
            Some(CategoryOption { value: value.to_string(), label: label.to_string() })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_listing_keeps_order_and_mirrors_labels() {
        let options = parse_listing(r#"["boxes","sleepy"]"#).unwrap();
        assert_eq!(
            options,
            vec![
                CategoryOption { value: "boxes".to_string(), label: "boxes".to_string() },
                CategoryOption { value: "sleepy".to_string(), label: "sleepy".to_string() },
            ]
        );
    }

    #[test]
    fn object_listing_maps_id_and_name() {
        let options =
            parse_listing(r#"[{"id":"beng","name":"Bengal"},{"id":"abys","name":"Abyssinian"}]"#)
                .unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "beng");
        assert_eq!(options[0].label, "Bengal");
    }

    #[test]
    fn object_without_name_falls_back_to_id() {
        let options = parse_listing(r#"[{"id":"beng"}]"#).unwrap();
        assert_eq!(options[0].label, "beng");
    }

    #[test]
    fn unusable_entries_are_skipped() {
        let options = parse_listing(r#"["boxes", 42, {"name":"no id"}, "", null, "sleepy"]"#)
            .unwrap();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["boxes", "sleepy"]);
    }

    #[test]
    fn non_array_listing_is_malformed() {
        assert!(matches!(
            parse_listing(r#"{"tags":["boxes"]}"#),
            Err(FetchError::Malformed(_))
        ));
        assert!(matches!(parse_listing("not json"), Err(FetchError::Malformed(_))));
    }
}
