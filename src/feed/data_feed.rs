use async_trait::async_trait;
use serde::de;
use serde_json::Value;
use thiserror::Error;

use crate::events::Event;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("{location} answered with status {status}")]
    BadStatus {
        location: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to read {location}: {source}")]
    ReadError {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Accepts a bare array of events or the exporter's
/// `{last_updated, total_events, events}` envelope.
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>, FeedError> {
    let payload: Value = serde_json::from_slice(body)?;
    let events = match payload {
        Value::Object(mut envelope) => envelope
            .remove("events")
            .ok_or_else(|| <serde_json::Error as de::Error>::missing_field("events"))?,
        other => other,
    };
    Ok(serde_json::from_value(events)?)
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventFeed: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<Event>, FeedError>;
}

/// Reads event files from `http(s)://` URLs or from the local filesystem.
pub struct DataFeed {
    client: reqwest::Client,
}

impl DataFeed {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, FeedError> {
        tracing::info!("Fetching events from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::info!("Fetch events response status: {}", status);

        if !status.is_success() {
            return Err(FeedError::BadStatus {
                location: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_local(&self, path: &str) -> Result<Vec<u8>, FeedError> {
        tracing::info!("Reading events from {}", path);

        tokio::fs::read(path)
            .await
            .map_err(|source| FeedError::ReadError {
                location: path.to_string(),
                source,
            })
    }
}

impl Default for DataFeed {
    fn default() -> Self {
        Self::new()
    }
}

fn is_remote(location: &str) -> bool {
    let lowered = location.to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}

#[async_trait]
impl EventFeed for DataFeed {
    async fn fetch(&self, location: &str) -> Result<Vec<Event>, FeedError> {
        let body = if is_remote(location) {
            self.fetch_remote(location).await?
        } else {
            self.fetch_local(location).await?
        };

        let events = decode_events(&body)?;
        tracing::info!("Decoded {} events from {}", events.len(), location);
        Ok(events)
    }
}
