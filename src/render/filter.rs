use super::{calendar::render_calendar, list::render_list, CalendarEntry, EventBoard, ListEntry, RenderTarget};
use crate::events::{filter::distinct_sources, normalize_source, SourceFilter};

pub const ALL_SOURCES_LABEL: &str = "Todos";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterButton {
    pub label: String,
    pub filter: SourceFilter,
    pub active: bool,
}

impl EventBoard {
    /// Switches the source filter and redraws calendar and list with it.
    pub fn set_filter<C, L>(&mut self, filter: SourceFilter, calendar: &mut C, list: &mut L)
    where
        C: RenderTarget<CalendarEntry> + ?Sized,
        L: RenderTarget<ListEntry> + ?Sized,
    {
        tracing::debug!("Source filter set to {}", filter);
        self.filter = filter;
        render_calendar(self, calendar);
        render_list(self, list);
    }
}

/// The "all" button followed by one button per distinct source value.
///
/// Exactly one button is active. When two source names share a slug the
/// first of them carries the mark; a filter with no button of its own gets
/// one appended so the active state stays visible.
pub fn filter_buttons(board: &EventBoard) -> Vec<FilterButton> {
    let mut buttons = vec![FilterButton {
        label: ALL_SOURCES_LABEL.to_string(),
        filter: SourceFilter::All,
        active: false,
    }];

    for source in distinct_sources(board.events()) {
        buttons.push(FilterButton {
            label: source.to_string(),
            filter: SourceFilter::Source(normalize_source(source)),
            active: false,
        });
    }

    let current = board.filter();
    match buttons.iter_mut().find(|button| button.filter == current) {
        Some(button) => button.active = true,
        None => buttons.push(FilterButton {
            label: current.to_string(),
            filter: current,
            active: true,
        }),
    }

    buttons
}
