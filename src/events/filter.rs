use std::fmt;
use std::str::FromStr;

use super::event::Event;
use super::source::{normalize_source, SourceSlug, UnknownSlug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFilter {
    #[default]
    All,
    Source(SourceSlug),
}

impl SourceFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            SourceFilter::All => true,
            SourceFilter::Source(slug) => normalize_source(event.source()) == *slug,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFilter::All => "all",
            SourceFilter::Source(slug) => slug.as_str(),
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFilter {
    type Err = UnknownSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(SourceFilter::All)
        } else {
            s.parse().map(SourceFilter::Source)
        }
    }
}

/// Indices into `events` of the records the filter keeps, in original order.
pub fn filtered_indices(events: &[Event], filter: &SourceFilter) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| filter.matches(event))
        .map(|(index, _)| index)
        .collect()
}

/// Stable ascending sort by start; records without a usable start go last.
pub fn sort_by_start(events: &[Event], indices: &mut [usize]) {
    indices.sort_by_key(|&index| {
        let start = events[index].start();
        (start.is_none(), start)
    });
}

/// Distinct raw source values in order of first appearance.
pub fn distinct_sources(events: &[Event]) -> Vec<&str> {
    let mut sources: Vec<&str> = Vec::new();
    for event in events {
        if !sources.contains(&event.source()) {
            sources.push(event.source());
        }
    }
    sources
}
