use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use aveiro_events::{app::AppState, render::ListEntry};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();
    let mut selected_line = 0usize;
    let mut item_position = 0usize;

    for entry in &app.list {
        match entry {
            ListEntry::NoEvents => {
                lines.push(Line::from(Span::styled(
                    "ⓘ Nenhum evento encontrado.",
                    Style::default().fg(app.theme.muted),
                )));
            }
            ListEntry::LoadFailed(message) => {
                lines.push(Line::from(Span::styled(
                    format!("⚠ {}", message),
                    Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
                )));
            }
            ListEntry::Event(item) => {
                let is_selected = item_position == app.selected_list_index;
                if is_selected {
                    selected_line = lines.len();
                }
                item_position += 1;

                let title_style = if is_selected {
                    Style::default()
                        .bg(app.theme.selected_bg)
                        .fg(app.theme.selected_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                let cursor = if is_selected { ">" } else { " " };

                lines.push(Line::from(vec![
                    Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                    Span::styled("▌", Style::default().fg(app.theme.source_color(item.slug))),
                    Span::styled(item.title.clone(), title_style),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("   📅 "),
                    Span::styled(item.when.clone(), Style::default().fg(app.theme.today)),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("   📍 "),
                    Span::styled(item.location.clone(), Style::default().fg(app.theme.muted)),
                ]));

                let mut badges = vec![
                    Span::raw("   "),
                    Span::styled(
                        format!("[{}]", item.source),
                        Style::default().fg(app.theme.source_color(item.slug)),
                    ),
                ];
                for tag in &item.tags {
                    badges.push(Span::raw(" "));
                    badges.push(Span::styled(format!("#{}", tag), Style::default().fg(app.theme.muted)));
                }
                lines.push(Line::from(badges));
                lines.push(Line::from(""));
            }
        }
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (selected_line + 4).saturating_sub(visible);

    let title = format!(" Próximos eventos ({}) ", app.list_items().len());
    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, area);
}
