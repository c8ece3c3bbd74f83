//! Renderers turn the event board into content for a [`RenderTarget`].
//!
//! Every renderer is a plain function over [`EventBoard`]; the terminal UI
//! and the tests supply their own targets.

pub mod calendar;
pub mod detail;
pub mod filter;
pub mod list;

use crate::events::{filter::filtered_indices, Event, SourceFilter};

pub use calendar::{render_calendar, CalendarBoard, CalendarEntry};
pub use detail::{DetailPanel, EventDetail};
pub use filter::{filter_buttons, FilterButton};
pub use list::{render_list, render_load_error, ListEntry, ListItem};

/// Somewhere rendered items can be put.
pub trait RenderTarget<T> {
    fn clear(&mut self);
    fn append(&mut self, item: T);

    fn set_content(&mut self, items: Vec<T>) {
        self.clear();
        for item in items {
            self.append(item);
        }
    }
}

impl<T> RenderTarget<T> for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, item: T) {
        self.push(item);
    }
}

/// The loaded events together with the active source filter.
///
/// Events are fixed at construction; the filter is the only thing that
/// changes afterwards and only through [`EventBoard::set_filter`].
#[derive(Debug, Clone, Default)]
pub struct EventBoard {
    events: Vec<Event>,
    filter: SourceFilter,
}

impl EventBoard {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            filter: SourceFilter::All,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filter(&self) -> SourceFilter {
        self.filter
    }

    pub fn event(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        filtered_indices(&self.events, &self.filter)
    }
}
