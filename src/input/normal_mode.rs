use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::events::SourceFilter;

/// Keys for the main screen. Help and the detail panel handle their own keys.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => move_days(state, -1),
        KeyCode::Char('l') | KeyCode::Right => move_days(state, 1),
        KeyCode::Char('J') => move_days(state, 7),
        KeyCode::Char('K') => move_days(state, -7),
        KeyCode::Char('j') | KeyCode::Down => state.move_list_selection_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_list_selection_up(),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') => move_months(state, false),
        KeyCode::Char('}') => move_months(state, true),
        KeyCode::Char('f') | KeyCode::Tab => state.cycle_filter(true),
        KeyCode::Char('F') | KeyCode::BackTab => state.cycle_filter(false),
        KeyCode::Char('0') => state.set_filter(SourceFilter::All),
        KeyCode::Enter => state.open_selected_detail(),
        KeyCode::Char('c') => state.open_first_entry_on_selected_date(),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn move_days(state: &mut AppState, days: i64) {
    let step = Days::new(days.unsigned_abs());
    let moved = if days < 0 {
        state.selected_date.checked_sub_days(step)
    } else {
        state.selected_date.checked_add_days(step)
    };
    if let Some(new_date) = moved {
        state.selected_date = new_date;
    }
}

fn jump_to_today(state: &mut AppState) {
    state.selected_date = chrono::Local::now().date_naive();
}

fn move_to_start_of_month(state: &mut AppState) {
    if let Some(first) = state.selected_date.with_day(1) {
        state.selected_date = first;
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let last = state
        .selected_date
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt());
    if let Some(last) = last {
        state.selected_date = last;
    }
}

/// Keeps the day of month where possible, clamping to the month's end.
fn move_months(state: &mut AppState, forward: bool) {
    let moved: Option<NaiveDate> = if forward {
        state.selected_date.checked_add_months(Months::new(1))
    } else {
        state.selected_date.checked_sub_months(Months::new(1))
    };
    if let Some(new_date) = moved {
        state.selected_date = new_date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, SourceSlug};
    use crate::feed::LoadedEvents;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(title: &str, source: &str, start: &str) -> Event {
        Event {
            title: title.to_string(),
            source: Some(source.to_string()),
            start_date: Some(start.to_string()),
            ..Event::default()
        }
    }

    fn state() -> AppState {
        let mut state = AppState::from_load(Ok(LoadedEvents::new(
            vec![
                event("Hamlet", "Teatro Aveirense", "2025-01-10T21:30:00"),
                event("Jazz", "GrETUA", "2025-01-15T22:00:00"),
            ],
            "events.json",
        )));
        state.selected_date = date(2025, 1, 15);
        state
    }

    #[test]
    fn h_key_moves_to_previous_day() {
        let mut state = state();
        handle_key(KeyCode::Char('h'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 14));
    }

    #[test]
    fn l_key_moves_to_next_day() {
        let mut state = state();
        handle_key(KeyCode::Char('l'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 16));
    }

    #[test]
    fn shifted_j_and_k_move_by_week() {
        let mut state = state();
        handle_key(KeyCode::Char('J'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 22));
        handle_key(KeyCode::Char('K'), &mut state);
        handle_key(KeyCode::Char('K'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 8));
    }

    #[test]
    fn t_key_jumps_to_today() {
        let mut state = state();
        handle_key(KeyCode::Char('t'), &mut state);
        assert_eq!(state.selected_date, chrono::Local::now().date_naive());
    }

    #[test]
    fn g_and_shift_g_jump_to_month_bounds() {
        let mut state = state();
        handle_key(KeyCode::Char('g'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 1));
        handle_key(KeyCode::Char('G'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 31));
    }

    #[test]
    fn month_moves_clamp_day() {
        let mut state = state();
        state.selected_date = date(2025, 1, 31);
        handle_key(KeyCode::Char('}'), &mut state);
        assert_eq!(state.selected_date, date(2025, 2, 28));
        handle_key(KeyCode::Char('{'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 28));
    }

    #[test]
    fn f_key_cycles_filter_and_zero_resets() {
        let mut state = state();
        handle_key(KeyCode::Char('f'), &mut state);
        assert_eq!(state.board.filter(), SourceFilter::Source(SourceSlug::Teatro));
        assert_eq!(state.list_items().len(), 1);

        handle_key(KeyCode::Char('0'), &mut state);
        assert_eq!(state.board.filter(), SourceFilter::All);
        assert_eq!(state.list_items().len(), 2);
    }

    #[test]
    fn enter_opens_detail_of_selected_item() {
        let mut state = state();
        handle_key(KeyCode::Char('j'), &mut state);
        handle_key(KeyCode::Enter, &mut state);
        assert_eq!(state.detail.content().unwrap().title, "Jazz");
    }

    #[test]
    fn c_key_opens_calendar_entry_of_selected_day() {
        let mut state = state();
        handle_key(KeyCode::Char('c'), &mut state);
        assert_eq!(state.detail.content().unwrap().title, "Jazz");
    }

    #[test]
    fn question_mark_shows_help() {
        let mut state = state();
        handle_key(KeyCode::Char('?'), &mut state);
        assert!(state.show_help);
    }
}
