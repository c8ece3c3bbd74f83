use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use aveiro_events::{
    app::{AppState, LoadStatus},
    events::format::format_date,
};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState, now: NaiveDateTime) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[3]);

    render_header(f, app, main_chunks[0]);
    calendar_views::stats_panel::render(f, app, main_chunks[1], now);
    calendar_views::filter_bar::render(f, app, main_chunks[2]);
    calendar_views::month::render(f, app, content_chunks[0], now.date());
    calendar_views::event_list::render(f, app, content_chunks[1]);
    render_status(f, app, main_chunks[4]);

    if app.detail.is_open() {
        dialogs::event_detail::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}

fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(
        "Eventos Culturais de Aveiro",
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
    )];

    if let Some(updated) = app.last_updated {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("🕘 Atualizado: {}", format_date(Some(updated), true)),
            Style::default().fg(app.theme.muted),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, app: &AppState, area: Rect) {
    let (text, color) = match (&app.status_message, &app.load_status) {
        (Some(message), _) => (message.clone(), app.theme.status_bar),
        (None, LoadStatus::Failed(_)) => (
            "Dados indisponíveis | '?' ajuda | 'q' sair".to_string(),
            app.theme.error,
        ),
        (None, LoadStatus::Sample) => (
            format!("Dados de demonstração | {} eventos | '?' ajuda | 'q' sair", app.events().len()),
            app.theme.status_bar,
        ),
        (None, LoadStatus::Loaded { location }) => (
            format!("{} | {} eventos | '?' ajuda | 'q' sair", location, app.events().len()),
            app.theme.status_bar,
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

pub fn loading(f: &mut Frame, location: &str) {
    let area = f.size();
    let message = Paragraph::new(format!("A carregar eventos de {}...", location))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Eventos Culturais de Aveiro "));
    f.render_widget(message, area);
}
