use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use aveiro_events::{app::AppState, render::EventDetail};

pub fn build_detail_lines<'a>(detail: &'a EventDetail, app: &AppState) -> Vec<Line<'a>> {
    let heading = Style::default().fg(app.theme.help_section).add_modifier(Modifier::BOLD);
    let source_color = app.theme.source_color(detail.slug);

    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.as_str(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("📅 Data", heading)),
        Line::from(format!("   {}", detail.when)),
        Line::from(""),
        Line::from(Span::styled("📍 Local", heading)),
        Line::from(format!("   {}", detail.location)),
        Line::from(""),
        Line::from(Span::styled("🏛  Fonte", heading)),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!(" {} ", detail.source),
                Style::default().bg(source_color).fg(Color::Black),
            ),
        ]),
    ];

    if !detail.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("🏷  Categorias", heading)));
        lines.push(Line::from(format!("   {}", detail.tags.join(", "))));
    }

    if let Some(image_url) = &detail.image_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("🖼  Imagem", heading)));
        lines.push(Line::from(Span::styled(
            format!("   {}", image_url),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));
    }

    if let Some(url) = &detail.url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("🔗 Mais informações", heading)));
        lines.push(Line::from(Span::styled(
            format!("   {}", url),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "o = Abrir no browser | y = Copiar link | i = Imagem | q/Esc = Fechar",
        Style::default().fg(app.theme.muted),
    )));

    lines
}

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(detail) = app.detail.content() else {
        return;
    };

    let area = f.size();
    let panel_width = (area.width as f32 * 0.7) as u16;
    let panel_height = (area.height as f32 * 0.8) as u16;
    let x = (area.width.saturating_sub(panel_width)) / 2;
    let y = (area.height.saturating_sub(panel_height)) / 2;

    let panel_area = Rect {
        x,
        y,
        width: panel_width,
        height: panel_height,
    };

    f.render_widget(Clear, panel_area);

    let paragraph = Paragraph::new(build_detail_lines(detail, app))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Detalhes do evento ")
                .border_style(Style::default().fg(app.theme.source_color(detail.slug)))
                .style(Style::default().bg(Color::Black)),
        );

    f.render_widget(paragraph, panel_area);
}
