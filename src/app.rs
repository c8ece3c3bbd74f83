use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::events::{Event, SourceFilter, Statistics};
use crate::feed::{LoadError, LoadedEvents};
use crate::render::{
    calendar::entry_event, filter_buttons, render_calendar, render_list, render_load_error,
    CalendarBoard, CalendarEntry, DetailPanel, EventBoard, EventDetail, FilterButton, ListEntry,
    ListItem,
};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loaded { location: String },
    Sample,
    Failed(String),
}

pub struct AppState {
    pub board: EventBoard,
    pub calendar: CalendarBoard,
    pub list: Vec<ListEntry>,
    pub detail: DetailPanel,
    pub load_status: LoadStatus,
    pub last_updated: Option<NaiveDateTime>,
    pub selected_date: NaiveDate,
    pub selected_list_index: usize,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn from_load(result: Result<LoadedEvents, LoadError>) -> Self {
        match result {
            Ok(loaded) => Self::with_events(
                loaded.events,
                LoadStatus::Loaded { location: loaded.location },
                loaded.last_updated,
            ),
            Err(e) => {
                let mut app = Self::with_events(Vec::new(), LoadStatus::Failed(e.to_string()), None);
                render_load_error(&mut app.list);
                app
            }
        }
    }

    pub fn sample(events: Vec<Event>) -> Self {
        let last_updated = crate::events::stats::latest_scrape(&events);
        Self::with_events(events, LoadStatus::Sample, last_updated)
    }

    fn with_events(
        events: Vec<Event>,
        load_status: LoadStatus,
        last_updated: Option<NaiveDateTime>,
    ) -> Self {
        let board = EventBoard::new(events);
        let mut calendar = CalendarBoard::default();
        let mut list = Vec::new();
        render_calendar(&board, &mut calendar);
        render_list(&board, &mut list);

        Self {
            board,
            calendar,
            list,
            detail: DetailPanel::default(),
            load_status,
            last_updated,
            selected_date: Local::now().date_naive(),
            selected_list_index: 0,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            status_message: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_filter(mut self, filter: SourceFilter) -> Self {
        if filter != SourceFilter::All {
            self.set_filter(filter);
        }
        self
    }

    pub fn events(&self) -> &[Event] {
        self.board.events()
    }

    /// Statistics always cover every loaded event, whatever the filter.
    pub fn statistics(&self, now: NaiveDateTime) -> Statistics {
        Statistics::compute(self.board.events(), now)
    }

    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        filter_buttons(&self.board)
    }

    /// A failed load keeps its error entry whatever filter is chosen.
    pub fn set_filter(&mut self, filter: SourceFilter) {
        self.board.set_filter(filter, &mut self.calendar, &mut self.list);
        if matches!(self.load_status, LoadStatus::Failed(_)) {
            render_load_error(&mut self.list);
        }
        self.selected_list_index = 0;
    }

    /// Steps through the filter buttons; buttons sharing a filter count once.
    pub fn cycle_filter(&mut self, forward: bool) {
        let mut filters: Vec<SourceFilter> = Vec::new();
        for button in self.filter_buttons() {
            if !filters.contains(&button.filter) {
                filters.push(button.filter);
            }
        }

        let current = self.board.filter();
        let Some(position) = filters.iter().position(|f| *f == current) else {
            return;
        };
        let len = filters.len();
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };

        if filters[next] != current {
            self.set_filter(filters[next]);
        }
    }

    pub fn list_items(&self) -> Vec<&ListItem> {
        self.list.iter().filter_map(ListEntry::item).collect()
    }

    pub fn selected_list_item(&self) -> Option<&ListItem> {
        self.list_items().get(self.selected_list_index).copied()
    }

    pub fn move_list_selection_down(&mut self) {
        let count = self.list_items().len();
        if count > 0 && self.selected_list_index < count - 1 {
            self.selected_list_index += 1;
            self.follow_selected_item();
        }
    }

    pub fn move_list_selection_up(&mut self) {
        if self.selected_list_index > 0 {
            self.selected_list_index -= 1;
            self.follow_selected_item();
        }
    }

    fn follow_selected_item(&mut self) {
        if let Some(start) = self.selected_list_item().and_then(|item| item.start) {
            self.selected_date = start.date();
        }
    }

    pub fn entries_on_selected_date(&self) -> Vec<&CalendarEntry> {
        self.calendar.entries_on(self.selected_date)
    }

    pub fn open_detail(&mut self, event_index: usize) {
        if let Some(event) = self.board.event(event_index) {
            let detail = EventDetail::from_event(event_index, event);
            self.detail.show(detail);
        }
    }

    pub fn open_selected_detail(&mut self) {
        if let Some(index) = self.selected_list_item().map(|item| item.event_index) {
            self.open_detail(index);
        }
    }

    /// Same as clicking the first calendar entry of the selected day.
    pub fn open_first_entry_on_selected_date(&mut self) {
        let index = self
            .entries_on_selected_date()
            .first()
            .and_then(|entry| entry_event(&self.board, entry).map(|_| entry.event_index));
        if let Some(index) = index {
            self.open_detail(index);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail.hide();
    }
}
