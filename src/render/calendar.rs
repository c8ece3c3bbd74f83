use chrono::{NaiveDate, NaiveDateTime};

use super::{EventBoard, RenderTarget};
use crate::events::{normalize_source, Event, SourceSlug};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub event_index: usize,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub slug: SourceSlug,
}

impl CalendarEntry {
    /// Whether the entry spans `date`. Ends before the start are ignored.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        let first = self.start.date();
        let last = self
            .end
            .map(|end| end.date())
            .filter(|end| *end >= first)
            .unwrap_or(first);
        first <= date && date <= last
    }
}

/// One entry per visible event that has a usable start date.
pub fn calendar_entries(board: &EventBoard) -> Vec<CalendarEntry> {
    board
        .visible_indices()
        .into_iter()
        .filter_map(|index| {
            let event = board.event(index)?;
            Some(CalendarEntry {
                event_index: index,
                title: event.display_title().to_string(),
                start: event.start()?,
                end: event.end(),
                slug: normalize_source(event.source()),
            })
        })
        .collect()
}

pub fn render_calendar<T>(board: &EventBoard, target: &mut T)
where
    T: RenderTarget<CalendarEntry> + ?Sized,
{
    target.set_content(calendar_entries(board));
}

/// Click handling: the full record behind a calendar entry.
pub fn entry_event<'a>(board: &'a EventBoard, entry: &CalendarEntry) -> Option<&'a Event> {
    board.event(entry.event_index)
}

/// Calendar widget state: the entries currently shown on the month grid.
#[derive(Debug, Clone, Default)]
pub struct CalendarBoard {
    entries: Vec<CalendarEntry>,
}

impl CalendarBoard {
    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<&CalendarEntry> {
        let mut entries: Vec<&CalendarEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.occurs_on(date))
            .collect();
        entries.sort_by_key(|entry| entry.start);
        entries
    }

    pub fn slugs_on(&self, date: NaiveDate) -> Vec<SourceSlug> {
        let mut slugs = Vec::new();
        for entry in self.entries_on(date) {
            if !slugs.contains(&entry.slug) {
                slugs.push(entry.slug);
            }
        }
        slugs
    }
}

impl RenderTarget<CalendarEntry> for CalendarBoard {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, item: CalendarEntry) {
        self.entries.push(item);
    }
}
