//! Types for search requests and results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::SearchError;
use super::thumbnail::{select_best_thumbnail, ThumbnailCandidate};
use crate::provider::RawEntry;

/// A validated-later search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Requested result count before clamping. `None` means the configured default.
    pub max_results: Option<i64>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: None,
        }
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Builds a request from a loosely typed JSON body.
    ///
    /// `query` must be a string. `max_results` may be an integer, a whole
    /// float, or a numeric string.
    pub fn from_json(body: &Value) -> Result<Self, SearchError> {
        let query = match body.get("query") {
            Some(Value::String(s)) => s.clone(),
            _ => return Err(SearchError::missing_query()),
        };

        let max_results = match body.get("max_results") {
            None | Some(Value::Null) => None,
            Some(value) => Some(coerce_max_results(value)?),
        };

        Ok(Self { query, max_results })
    }
}

fn coerce_max_results(value: &Value) -> Result<i64, SearchError> {
    let invalid = || SearchError::Validation(format!("Invalid max_results value: {}", value));

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
                    _ => Err(invalid()),
                }
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: Option<String>,
    #[serde(rename = "url")]
    pub source_url: Option<String>,
    #[serde(rename = "thumbnail")]
    pub best_thumbnail_url: Option<String>,
    #[serde(rename = "duration")]
    pub duration_seconds: Option<f64>,
    #[serde(rename = "channel")]
    pub channel_name: Option<String>,
    pub channel_url: Option<String>,
    pub view_count: Option<u64>,
}

impl SearchResultItem {
    /// Normalizes a raw provider entry. Entries without an id are unusable.
    pub fn from_raw(entry: &RawEntry) -> Option<Self> {
        let id = entry.id.clone().filter(|id| !id.is_empty())?;

        let candidates: Option<Vec<ThumbnailCandidate>> = entry
            .thumbnails
            .as_ref()
            .map(|thumbs| thumbs.iter().map(ThumbnailCandidate::from).collect());

        Some(Self {
            id,
            title: entry.title.clone(),
            source_url: entry.url.clone(),
            best_thumbnail_url: select_best_thumbnail(candidates.as_deref()),
            duration_seconds: entry.duration,
            channel_name: entry.uploader.clone(),
            channel_url: entry.channel_url.clone(),
            view_count: entry.view_count,
        })
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The query as the caller sent it.
    pub query: String,
    pub results_count: usize,
    pub videos: Vec<SearchResultItem>,
}

impl SearchOutcome {
    pub fn new(query: impl Into<String>, videos: Vec<SearchResultItem>) -> Self {
        Self {
            query: query.into(),
            results_count: videos.len(),
            videos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::RawThumbnail;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let request = SearchRequest::from_json(&json!({"query": "lofi", "max_results": 5})).unwrap();
        assert_eq!(request, SearchRequest::new("lofi").with_max_results(5));

        let request = SearchRequest::from_json(&json!({"query": "lofi"})).unwrap();
        assert_eq!(request.max_results, None);

        let request = SearchRequest::from_json(&json!({"query": "lofi", "max_results": null})).unwrap();
        assert_eq!(request.max_results, None);
    }

    #[test]
    fn test_from_json_coerces_max_results() {
        let request = SearchRequest::from_json(&json!({"query": "a", "max_results": "7"})).unwrap();
        assert_eq!(request.max_results, Some(7));

        let request = SearchRequest::from_json(&json!({"query": "a", "max_results": 3.0})).unwrap();
        assert_eq!(request.max_results, Some(3));
    }

    #[test]
    fn test_from_json_rejects_bad_max_results() {
        for bad in [json!("seven"), json!(2.5), json!(true), json!([1])] {
            let err = SearchRequest::from_json(&json!({"query": "a", "max_results": bad})).unwrap_err();
            assert!(err.is_validation());
        }
    }

    #[test]
    fn test_from_json_requires_string_query() {
        for body in [json!({}), json!({"query": null}), json!({"query": 5})] {
            let err = SearchRequest::from_json(&body).unwrap_err();
            assert_eq!(err.to_string(), "Search query is required");
        }
    }

    #[test]
    fn test_result_item_from_raw() {
        let entry = RawEntry {
            id: Some("abc".to_string()),
            title: Some("Song".to_string()),
            url: Some("https://www.youtube.com/watch?v=abc".to_string()),
            thumbnails: Some(vec![
                RawThumbnail {
                    url: "small".to_string(),
                    width: Some(120),
                    height: Some(90),
                },
                RawThumbnail {
                    url: "big".to_string(),
                    width: Some(1280),
                    height: Some(720),
                },
            ]),
            duration: Some(215.0),
            uploader: Some("Band".to_string()),
            channel_url: None,
            view_count: Some(9),
        };

        let item = SearchResultItem::from_raw(&entry).unwrap();
        assert_eq!(item.best_thumbnail_url.as_deref(), Some("big"));
        assert_eq!(item.channel_name.as_deref(), Some("Band"));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["url"], "https://www.youtube.com/watch?v=abc");
        assert_eq!(value["thumbnail"], "big");
        assert_eq!(value["duration"], 215.0);
        assert_eq!(value["channel"], "Band");
        assert!(value["channel_url"].is_null());
        assert_eq!(value["view_count"], 9);
    }

    #[test]
    fn test_result_item_requires_id() {
        assert!(SearchResultItem::from_raw(&RawEntry::default()).is_none());
    }
}
