use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use aveiro_events::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60.min(area.width);
    let help_height = 23.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let section = Style::default().fg(app.theme.help_section);
    let help_text = vec![
        Line::from(vec![Span::styled("Aveiro Events - Ajuda", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Calendário:", section)]),
        Line::from("  h/l      - Dia anterior/seguinte"),
        Line::from("  J/K      - Semana seguinte/anterior"),
        Line::from("  { / }    - Mês anterior/seguinte"),
        Line::from("  g/G      - Primeiro/último dia do mês"),
        Line::from("  t        - Hoje"),
        Line::from("  c        - Abrir o primeiro evento do dia"),
        Line::from(""),
        Line::from(vec![Span::styled("Lista:", section)]),
        Line::from("  j/k      - Evento seguinte/anterior"),
        Line::from("  Enter    - Ver detalhes do evento"),
        Line::from(""),
        Line::from(vec![Span::styled("Filtros:", section)]),
        Line::from("  f / Tab  - Fonte seguinte"),
        Line::from("  F        - Fonte anterior"),
        Line::from("  0        - Todas as fontes"),
        Line::from(""),
        Line::from(vec![Span::styled("Detalhes:", section)]),
        Line::from("  o        - Abrir página do evento no browser"),
        Line::from("  y        - Copiar link do evento"),
        Line::from("  i        - Abrir imagem do evento"),
        Line::from("  q/Esc    - Fechar"),
        Line::from(""),
        Line::from(vec![Span::styled("Geral:", section)]),
        Line::from("  ?        - Esta ajuda"),
        Line::from("  q        - Sair"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Ajuda (j/k deslocar, q fechar) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
