//! Disruption feed from the TfL unified API.
//!
//! `GET {api_base}/{lines}/Disruption` returns a JSON array of disruption
//! objects; only their `description` strings are used. Any failure
//! (network, HTTP status, JSON) degrades to an empty list in [`FeedClient::fetch`],
//! so the display treats "fetch failed" like "nothing to report".

pub mod lines;

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::constants::{DISRUPTION_PATH, FEED_USER_AGENT};

/// Why a fetch produced no data.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed returned HTTP {0}")]
    Status(u16),
    #[error("malformed feed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the disruption endpoint.
pub struct FeedClient {
    api_base: String,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(api_base: &str, timeout: Duration) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(FEED_USER_AGENT)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Endpoint URL for a line-list path segment such as `Line/central,dlr`.
    pub fn disruption_url(&self, lines: &str) -> String {
        format!("{}/{}/{}", self.api_base, lines.trim_matches('/'), DISRUPTION_PATH)
    }

    /// Fetch raw disruption descriptions, or an error describing the failure.
    pub async fn try_fetch(&self, lines: &str) -> Result<Vec<String>, FeedError> {
        let url = self.disruption_url(lines);
        tracing::debug!(%url, "fetching disruptions");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FeedError::Status(resp.status().as_u16()));
        }
        let text = resp.text().await?;
        parse_disruptions(&text)
    }

    /// Fetch raw disruption descriptions; any failure yields an empty list.
    pub async fn fetch(&self, lines: &str) -> Vec<String> {
        match self.try_fetch(lines).await {
            Ok(descriptions) => {
                tracing::info!(count = descriptions.len(), "fetched disruptions");
                descriptions
            }
            Err(e) => {
                tracing::warn!(error = %e, "disruption fetch failed");
                Vec::new()
            }
        }
    }
}

/// Extract every string `description` from a JSON array of disruptions.
/// Entries without one are ignored.
pub fn parse_disruptions(json: &str) -> Result<Vec<String>, FeedError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    Ok(entries
        .iter()
        .filter_map(|entry| entry.get("description").and_then(Value::as_str))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_disruptions ─────────────────────────────────────────

    #[test]
    fn parses_descriptions_in_order() {
        let json = r#"[
            {"$type": "Tfl.Api.Presentation.Entities.Disruption", "category": "RealTime",
             "description": "Central Line: Severe delays.", "closureText": "severeDelays"},
            {"category": "PlannedWork", "description": "DLR: No service between Bank and Shadwell."}
        ]"#;
        assert_eq!(
            parse_disruptions(json).unwrap(),
            vec![
                "Central Line: Severe delays.".to_string(),
                "DLR: No service between Bank and Shadwell.".to_string(),
            ]
        );
    }

    #[test]
    fn skips_entries_without_description() {
        let json = r#"[{"category": "Information"}, {"description": 42}, {"description": "Jubilee Line: Minor delays"}]"#;
        assert_eq!(parse_disruptions(json).unwrap(), vec!["Jubilee Line: Minor delays".to_string()]);
    }

    #[test]
    fn empty_array_is_no_disruptions() {
        assert!(parse_disruptions("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_is_an_error() {
        assert!(matches!(parse_disruptions(r#"{"message": "oops"}"#), Err(FeedError::Json(_))));
        assert!(matches!(parse_disruptions("<html>"), Err(FeedError::Json(_))));
    }

    // ── FeedClient ────────────────────────────────────────────────

    #[test]
    fn disruption_url_joins_segments() {
        let client = FeedClient::new("https://api.tfl.gov.uk/", Duration::from_secs(1));
        assert_eq!(
            client.disruption_url("/Line/Mode/tube,dlr/"),
            "https://api.tfl.gov.uk/Line/Mode/tube,dlr/Disruption"
        );
    }

    #[tokio::test]
    async fn unreachable_feed_yields_empty_list() {
        // Port 9 on localhost: nothing listens, connection is refused quickly.
        let client = FeedClient::new("http://127.0.0.1:9", Duration::from_millis(500));
        assert!(client.fetch("Line/central").await.is_empty());
        assert!(matches!(client.try_fetch("Line/central").await, Err(FeedError::Http(_))));
    }
}
