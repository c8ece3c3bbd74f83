use chrono::{Datelike, NaiveDate, Weekday};

use crate::app::AppState;
use crate::events::SourceSlug;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_selected: bool,
    pub is_today: bool,
    pub sources: Vec<SourceSlug>,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            sources: Vec::new(),
            is_current_month: true,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_sources(mut self, sources: Vec<SourceSlug>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn has_events(&self) -> bool {
        !self.sources.is_empty()
    }
}

/// Monday-first grid of the selected month, padded with neighbouring days.
pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let year = state.selected_date.year();
    let month = state.selected_date.month();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    let Some(last_day) = next_month_first.and_then(|d| d.pred_opt()) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    let days_before = first_day.weekday().num_days_from_monday() as u64;

    for i in 0..days_before {
        let prev_date = first_day.checked_sub_days(chrono::Days::new(days_before - i));
        current_week.days.push(DayCell::new(prev_date).with_current_month(false));
    }

    let mut current_date = first_day;
    while current_date <= last_day {
        let cell = DayCell::new(Some(current_date))
            .with_selected(current_date == state.selected_date)
            .with_today(current_date == today)
            .with_sources(state.calendar.slugs_on(current_date))
            .with_current_month(true);

        current_week.days.push(cell);

        if current_date.weekday() == Weekday::Sun {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
        }

        let Some(next) = current_date.succ_opt() else { break };
        current_date = next;
    }

    if !current_week.days.is_empty() {
        while current_week.days.len() < 7 {
            current_week.days.push(DayCell::new(Some(current_date)).with_current_month(false));
            let Some(next) = current_date.succ_opt() else { break };
            current_date = next;
        }
        weeks.push(current_week);
    }

    MonthLayout { year, month, weeks }
}
