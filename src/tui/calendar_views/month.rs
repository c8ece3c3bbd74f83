use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::{Datelike, NaiveDate};
use aveiro_events::{
    app::AppState,
    events::format::month_name,
    ui::month_view,
};

const WEEKDAYS_PT: [&str; 7] = [" Seg ", " Ter ", " Qua ", " Qui ", " Sex ", " Sáb ", " Dom "];

pub fn render(f: &mut Frame, app: &AppState, area: Rect, today: NaiveDate) {
    let layout = month_view::calculate_layout(app, today);

    let month_title = format!("{} {}", capitalize(month_name(layout.month)), layout.year);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(month_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(
            WEEKDAYS_PT
                .iter()
                .map(|d| Span::styled(*d, Style::default().fg(app.theme.weekday_header)))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for day_cell in &week.days {
            let day_text = match day_cell.date {
                Some(date) => format!(" {:>2}", date.day()),
                None => "   ".to_string(),
            };

            let mut style = Style::default();
            if !day_cell.is_current_month {
                style = style.fg(app.theme.inactive_day);
            } else if day_cell.is_selected {
                style = style
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD);
            } else if day_cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            day_spans.push(Span::styled(day_text, style));

            let marker = match day_cell.sources.first() {
                Some(slug) if day_cell.is_current_month => {
                    let symbol = if day_cell.sources.len() > 1 { "+" } else { "•" };
                    Span::styled(symbol, Style::default().fg(app.theme.source_color(*slug)))
                }
                _ => Span::raw(" "),
            };
            day_spans.push(marker);
            day_spans.push(Span::raw(" "));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));

    let entries = app.entries_on_selected_date();
    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "Sem eventos neste dia",
            Style::default().fg(app.theme.muted),
        )));
    } else {
        for entry in entries {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(app.theme.source_color(entry.slug))),
                Span::styled(entry.start.format("%H:%M").to_string(), Style::default().fg(app.theme.today)),
                Span::raw(" "),
                Span::raw(entry.title.clone()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("h/l", Style::default().fg(app.theme.title)),
        Span::raw(" = Dia | "),
        Span::styled("J/K", Style::default().fg(app.theme.title)),
        Span::raw(" = Semana | "),
        Span::styled("{ }", Style::default().fg(app.theme.title)),
        Span::raw(" = Mês | "),
        Span::styled("c", Style::default().fg(app.theme.success)),
        Span::raw(" = Abrir evento do dia"),
    ]));

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Calendário "));
    f.render_widget(content, area);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
