use doc_jump_search::EntryKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::*,
};

use crate::App;

/// Areas drawn this frame, fed back into state for mouse hit tests
pub struct SearchBarAreas {
    pub input: Rect,
    pub dropdown: Option<Rect>,
}

/// Render the search input, the meta line beneath it, and (when open)
/// the suggestion dropdown overlaying the content below
pub fn render_search_bar(f: &mut Frame, area: Rect, app: &App) -> SearchBarAreas {
    let state = app.store.state();
    let theme = &state.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Meta line
        ])
        .split(area);

    let input = Paragraph::new(state.search.query.as_str())
        .style(Style::default().fg(theme.text_primary))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .title_style(Style::default().fg(theme.accent_primary))
                .border_style(Style::default().fg(if state.search.is_open() {
                    theme.accent_primary
                } else {
                    theme.text_muted
                })),
        );
    f.render_widget(input, chunks[0]);

    // Place the terminal cursor at the end of the query text
    let inner = chunks[0].inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    let cursor_x = inner.x + cursor_offset(&state.search.query, inner.width);
    f.set_cursor_position((cursor_x, inner.y));

    let meta = Paragraph::new(state.search.status.as_deref().unwrap_or(""))
        .style(Style::default().fg(theme.status_info));
    f.render_widget(meta, chunks[1]);

    let dropdown = state
        .search
        .dropdown
        .as_ref()
        .map(|d| render_dropdown(f, chunks[0], app, d));

    SearchBarAreas {
        input: chunks[0],
        dropdown,
    }
}

/// Column offset of the cursor after the query text, clamped to the
/// input width. Counts characters, not bytes.
fn cursor_offset(query: &str, width: u16) -> u16 {
    (query.chars().count() as u16).min(width.saturating_sub(1))
}

/// Render the dropdown as an overlay anchored under the input box
fn render_dropdown(
    f: &mut Frame,
    input_area: Rect,
    app: &App,
    dropdown: &crate::state::DropdownState,
) -> Rect {
    let theme = &app.store.state().theme;
    let frame_area = f.area();

    // Two lines per candidate (label + meta), at least one line for the
    // empty message, clamped to the space below the input
    let content_height = if dropdown.candidates.is_empty() {
        1
    } else {
        (dropdown.candidates.len() * 2) as u16
    };
    let below = frame_area
        .height
        .saturating_sub(input_area.y + input_area.height);
    let height = (content_height + 2).min(below);

    let area = Rect {
        x: input_area.x,
        y: input_area.y + input_area.height,
        width: input_area.width,
        height,
    };

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_panel));
    f.render_widget(block, area);

    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });

    if dropdown.candidates.is_empty() {
        let empty = Paragraph::new("No matches")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return area;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(dropdown.candidates.len() * 2);
    for (i, candidate) in dropdown.candidates.iter().enumerate() {
        let is_active = dropdown.active == Some(i);
        let row_style = if is_active {
            Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
        } else {
            Style::default().bg(theme.bg_panel).fg(theme.text_primary)
        };

        let marker = match candidate.entry.kind {
            EntryKind::Topic => "▪ ",
            EntryKind::SubTopic => "  › ",
        };
        lines.push(Line::from(vec![
            Span::styled(marker, row_style),
            Span::styled(
                candidate.entry.label.clone(),
                row_style.add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", candidate.entry.meta),
            if is_active {
                row_style
            } else {
                row_style.fg(theme.text_muted)
            },
        )));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(theme.bg_panel));
    f.render_widget(list, inner);

    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset_counts_chars_not_bytes() {
        // "sécurité" is 8 chars but 10 bytes
        assert_eq!(cursor_offset("sécurité", 40), 8);
        assert_eq!(cursor_offset("", 40), 0);
    }

    #[test]
    fn test_cursor_offset_clamps_to_input_width() {
        assert_eq!(cursor_offset("a very long query text", 10), 9);
        assert_eq!(cursor_offset("abc", 0), 0);
    }
}
