use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use aveiro_events::{app::AppState, events::SourceFilter};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    for button in app.filter_buttons() {
        let color = match button.filter {
            SourceFilter::All => app.theme.status_bar,
            SourceFilter::Source(slug) => app.theme.source_color(slug),
        };

        let style = if button.active {
            Style::default()
                .fg(app.theme.selected_fg)
                .bg(app.theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        let marker = if button.active { "●" } else { "○" };
        spans.push(Span::styled(format!(" {} {} ", marker, button.label), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Fontes (f/F alternar, 0 todas) ")
            .border_style(Style::default().fg(app.theme.active_filter)),
    );
    f.render_widget(bar, area);
}
