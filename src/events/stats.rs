use chrono::{Datelike, NaiveDateTime};

use super::event::Event;
use super::filter::distinct_sources;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub this_month: usize,
    pub sources: usize,
    pub days_until_next: Option<i64>,
}

impl Statistics {
    pub fn compute(events: &[Event], now: NaiveDateTime) -> Self {
        let this_month = events
            .iter()
            .filter_map(Event::start)
            .filter(|start| start.month() == now.month() && start.year() == now.year())
            .count();

        let days_until_next = events
            .iter()
            .filter_map(Event::start)
            .filter(|start| *start > now)
            .min()
            .map(|next| ceil_days((next - now).num_milliseconds()));

        Self {
            total: events.len(),
            this_month,
            sources: distinct_sources(events).len(),
            days_until_next,
        }
    }

    pub fn next_event_label(&self) -> String {
        match self.days_until_next {
            Some(days) => format!("{}d", days),
            None => "-".to_string(),
        }
    }
}

fn ceil_days(millis: i64) -> i64 {
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 { days + 1 } else { days }
}

/// Freshness of the data set: the newest `scraped_at` among the records.
pub fn latest_scrape(events: &[Event]) -> Option<NaiveDateTime> {
    events.iter().filter_map(Event::scraped).max()
}
