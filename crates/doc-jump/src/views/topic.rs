use ratatui::{layout::Rect, prelude::*, widgets::*};

use crate::App;

/// Render the content pane: the welcome view, or the single visible topic
/// with its expandable sub-topics
pub fn render_topic(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted));

    let Some(topic) = state
        .content
        .visible_topic
        .as_deref()
        .and_then(|id| state.content.topic_by_id(id))
    else {
        render_welcome(f, area, app, block);
        return;
    };

    let highlight = state.content.highlight.as_deref();
    let highlight_style = Style::default()
        .bg(theme.highlight_bg)
        .fg(theme.highlight_fg);

    let mut lines: Vec<Line> = Vec::new();

    let title_style = if highlight == Some(topic.id.as_str()) {
        highlight_style.add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.accent_primary)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(topic.title.clone(), title_style)));
    lines.push(Line::default());

    for body_line in topic.body.lines() {
        lines.push(Line::from(Span::styled(
            body_line.to_string(),
            Style::default().fg(theme.text_primary),
        )));
    }

    for sub in &topic.sub {
        let expanded = state.content.expanded.contains(&sub.id);
        let header_style = if highlight == Some(sub.id.as_str()) {
            highlight_style.add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD)
        };

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("{} {}", if expanded { "▾" } else { "▸" }, sub.title),
            header_style,
        )));

        if expanded {
            for body_line in sub.body.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", body_line),
                    Style::default().fg(theme.text_primary),
                )));
            }
        }
    }

    let content = Paragraph::new(lines)
        .block(block.title(format!(" {} ", topic.title)))
        .wrap(Wrap { trim: false })
        .scroll((state.content.scroll_offset, 0));
    f.render_widget(content, area);
}

fn render_welcome(f: &mut Frame, area: Rect, app: &App, block: Block) {
    let theme = &app.store.state().theme;

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Welcome",
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Type in the search box above to find a topic, then press Enter to jump.",
            Style::default().fg(theme.text_primary),
        )),
        Line::from(Span::styled(
            "Tab and Shift+Tab cycle through topics directly.",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let welcome = Paragraph::new(lines)
        .block(block.title(" Handbook "))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(welcome, area);
}
