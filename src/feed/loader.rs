use chrono::NaiveDateTime;
use thiserror::Error;

use crate::events::{stats::latest_scrape, Event};
use crate::feed::data_feed::{EventFeed, FeedError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not load events from {primary_location} ({primary}) nor from {fallback_location} ({fallback})")]
    Exhausted {
        primary_location: String,
        primary: FeedError,
        fallback_location: String,
        fallback: FeedError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedEvents {
    pub events: Vec<Event>,
    pub location: String,
    pub last_updated: Option<NaiveDateTime>,
}

impl LoadedEvents {
    pub fn new(events: Vec<Event>, location: impl Into<String>) -> Self {
        let last_updated = latest_scrape(&events);
        Self {
            events,
            location: location.into(),
            last_updated,
        }
    }
}

/// Tries the primary location, then the fallback exactly once.
pub struct EventLoader<F: EventFeed> {
    feed: F,
    primary: String,
    fallback: String,
}

impl<F: EventFeed> EventLoader<F> {
    pub fn new(feed: F, primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            feed,
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    pub async fn load(&self) -> Result<LoadedEvents, LoadError> {
        let primary = match self.feed.fetch(&self.primary).await {
            Ok(events) => {
                tracing::info!("Loaded {} events from {}", events.len(), self.primary);
                return Ok(LoadedEvents::new(events, self.primary.clone()));
            }
            Err(e) => e,
        };

        tracing::warn!("Primary data unavailable ({}), trying {}", primary, self.fallback);

        match self.feed.fetch(&self.fallback).await {
            Ok(events) => {
                tracing::info!("Loaded {} events from {}", events.len(), self.fallback);
                Ok(LoadedEvents::new(events, self.fallback.clone()))
            }
            Err(fallback) => {
                let err = LoadError::Exhausted {
                    primary_location: self.primary.clone(),
                    primary,
                    fallback_location: self.fallback.clone(),
                    fallback,
                };
                tracing::error!("Error loading events: {}", err);
                Err(err)
            }
        }
    }
}
