use ratatui::{layout::Rect, prelude::*, widgets::*};

use crate::App;

/// Render the topic sidebar with the visible topic marked
pub fn render_nav(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let lines: Vec<Line> = state
        .content
        .topics
        .iter()
        .map(|topic| {
            let is_visible = state.content.visible_topic.as_deref() == Some(topic.id.as_str());
            if is_visible {
                Line::from(Span::styled(
                    format!("▸ {}", topic.title),
                    Style::default()
                        .bg(theme.selected_bg)
                        .fg(theme.selected_fg)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", topic.title),
                    Style::default().fg(theme.text_primary),
                ))
            }
        })
        .collect();

    let nav = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Topics ")
            .title_style(Style::default().fg(theme.accent_primary))
            .border_style(Style::default().fg(theme.text_muted)),
    );
    f.render_widget(nav, area);
}
