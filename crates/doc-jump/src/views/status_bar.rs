use ratatui::{layout::Rect, prelude::*, widgets::*};

use crate::App;

/// Render the bottom key-hint bar
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.store.state().theme;

    let hint = |key: &str| {
        Span::styled(
            key.to_string(),
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |text: &str| Span::styled(text.to_string(), Style::default().fg(theme.text_muted));

    let line = Line::from(vec![
        hint("↑/↓"),
        label(" select  "),
        hint("Enter"),
        label(" jump  "),
        hint("Esc"),
        label(" close  "),
        hint("Tab"),
        label(" next topic  "),
        hint("Ctrl+U"),
        label(" clear  "),
        hint("Ctrl+C"),
        label(" quit"),
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(theme.bg_panel));
    f.render_widget(bar, area);
}
