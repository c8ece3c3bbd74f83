use chrono::NaiveDateTime;

use super::{EventBoard, RenderTarget};
use crate::events::{filter::sort_by_start, format::format_date, normalize_source, SourceSlug};

pub const LOCATION_PLACEHOLDER: &str = "Local não especificado";
pub const NO_EVENTS_MESSAGE: &str = "Nenhum evento encontrado.";
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar eventos. Por favor, tente novamente mais tarde.";

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub event_index: usize,
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub when: String,
    pub location: String,
    pub source: String,
    pub slug: SourceSlug,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Event(ListItem),
    NoEvents,
    LoadFailed(String),
}

impl ListEntry {
    pub fn item(&self) -> Option<&ListItem> {
        match self {
            ListEntry::Event(item) => Some(item),
            _ => None,
        }
    }
}

pub fn list_entries(board: &EventBoard) -> Vec<ListEntry> {
    let mut indices = board.visible_indices();
    if indices.is_empty() {
        return vec![ListEntry::NoEvents];
    }

    sort_by_start(board.events(), &mut indices);

    indices
        .into_iter()
        .filter_map(|index| {
            let event = board.event(index)?;
            let start = event.start();
            Some(ListEntry::Event(ListItem {
                event_index: index,
                title: event.display_title().to_string(),
                start,
                when: format_date(start, true),
                location: event.location().unwrap_or(LOCATION_PLACEHOLDER).to_string(),
                source: event.source().to_string(),
                slug: normalize_source(event.source()),
                tags: event.tags().to_vec(),
            }))
        })
        .collect()
}

pub fn render_list<T>(board: &EventBoard, target: &mut T)
where
    T: RenderTarget<ListEntry> + ?Sized,
{
    target.set_content(list_entries(board));
}

pub fn render_load_error<T>(target: &mut T)
where
    T: RenderTarget<ListEntry> + ?Sized,
{
    target.set_content(vec![ListEntry::LoadFailed(LOAD_ERROR_MESSAGE.to_string())]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{format::UNTITLED, Event, SourceFilter};
    use pretty_assertions::assert_eq;

    fn event(title: &str, source: &str, start: &str) -> Event {
        Event {
            title: title.to_string(),
            source: Some(source.to_string()),
            start_date: Some(start.to_string()),
            ..Event::default()
        }
    }

    fn titles(entries: &[ListEntry]) -> Vec<&str> {
        entries
            .iter()
            .filter_map(ListEntry::item)
            .map(|item| item.title.as_str())
            .collect()
    }

    #[test]
    fn entries_are_sorted_by_start_date() {
        let board = EventBoard::new(vec![
            event("Jan 10", "Teatro Aveirense", "2025-01-10"),
            event("Jan 5", "GrETUA", "2025-01-05"),
            event("Feb 1", "Teatro Aveirense", "2025-02-01"),
        ]);

        let entries = list_entries(&board);

        assert_eq!(titles(&entries), vec!["Jan 5", "Jan 10", "Feb 1"]);
    }

    #[test]
    fn item_carries_display_fields() {
        let mut record = event("Hamlet", "Teatro Aveirense", "2025-01-10T21:30:00");
        record.location = Some("Grande Auditório".to_string());
        record.tags = Some(vec!["teatro".to_string(), "clássico".to_string()]);
        let board = EventBoard::new(vec![record]);

        let entries = list_entries(&board);
        let item = entries[0].item().unwrap();

        assert_eq!(item.when, "10 de janeiro de 2025, 21:30");
        assert_eq!(item.location, "Grande Auditório");
        assert_eq!(item.slug, SourceSlug::Teatro);
        assert_eq!(item.tags, vec!["teatro", "clássico"]);
    }

    #[test]
    fn missing_location_uses_placeholder() {
        let board = EventBoard::new(vec![event("Jazz", "GrETUA", "2025-01-05")]);
        let entries = list_entries(&board);
        assert_eq!(entries[0].item().unwrap().location, LOCATION_PLACEHOLDER);
    }

    #[test]
    fn untitled_event_is_listed_with_placeholder() {
        let board = EventBoard::new(vec![event("", "GrETUA", "2025-01-06")]);
        let entries = list_entries(&board);
        assert_eq!(entries[0].item().unwrap().title, UNTITLED);
    }

    #[test]
    fn empty_board_renders_single_placeholder() {
        let board = EventBoard::new(Vec::new());
        assert_eq!(list_entries(&board), vec![ListEntry::NoEvents]);
    }

    #[test]
    fn filter_without_matches_renders_placeholder() {
        let mut board = EventBoard::new(vec![event("Jazz", "GrETUA", "2025-01-05")]);
        let mut calendar = Vec::new();
        let mut list = Vec::new();
        board.set_filter(SourceFilter::Source(SourceSlug::Vic), &mut calendar, &mut list);

        assert_eq!(list, vec![ListEntry::NoEvents]);
    }

    #[test]
    fn load_error_replaces_content_with_one_message() {
        let mut target = vec![ListEntry::NoEvents, ListEntry::NoEvents];
        render_load_error(&mut target);
        assert_eq!(target, vec![ListEntry::LoadFailed(LOAD_ERROR_MESSAGE.to_string())]);
    }
}
