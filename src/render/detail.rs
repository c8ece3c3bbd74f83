use reqwest::Url;

use crate::events::{format::format_date_range, normalize_source, Event, SourceSlug};

pub const DETAIL_LOCATION_PLACEHOLDER: &str = "Não especificado";

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event_index: usize,
    pub title: String,
    pub when: String,
    pub location: String,
    pub source: String,
    pub slug: SourceSlug,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}

impl EventDetail {
    pub fn from_event(event_index: usize, event: &Event) -> Self {
        Self {
            event_index,
            title: event.display_title().to_string(),
            when: format_date_range(event.start(), event.end()),
            location: event
                .location()
                .unwrap_or(DETAIL_LOCATION_PLACEHOLDER)
                .to_string(),
            source: event.source().to_string(),
            slug: normalize_source(event.source()),
            tags: event.tags().to_vec(),
            url: event.url.as_deref().and_then(web_link),
            image_url: event.image_url.as_deref().and_then(web_link),
        }
    }
}

/// Keeps only absolute http(s) links; anything else would not open.
fn web_link(value: &str) -> Option<String> {
    let url = Url::parse(value.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

/// The event detail dialog. Each `show` replaces whatever was displayed.
#[derive(Debug, Clone, Default)]
pub struct DetailPanel {
    content: Option<EventDetail>,
}

impl DetailPanel {
    pub fn show(&mut self, detail: EventDetail) {
        tracing::debug!("Opening detail for '{}'", detail.title);
        self.content = Some(detail);
    }

    pub fn hide(&mut self) {
        self.content = None;
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&EventDetail> {
        self.content.as_ref()
    }
}
