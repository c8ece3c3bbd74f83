use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use aveiro_events::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: Rect, now: NaiveDateTime) {
    let stats = app.statistics(now);

    let cards = [
        ("Total de eventos", stats.total.to_string()),
        ("Este mês", stats.this_month.to_string()),
        ("Fontes", stats.sources.to_string()),
        ("Próximo evento", stats.next_event_label()),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(Line::from(vec![
            Span::styled(value, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(label, Style::default().fg(app.theme.muted)),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(card, *column);
    }
}
