use gamehub_core::view::GenreListView;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::{App, Focus};

/// Render the genre pane: the list itself and the preview image URL of the
/// genre under the cursor.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    let result = app.genres.result();
    let view = app.genre_list().render(&result);

    let border_style = if app.focus == Focus::Genres {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Genres");

    match &view {
        GenreListView::Hidden => frame.render_widget(block, chunks[0]),
        GenreListView::Loading => {
            let loading = Paragraph::new("Loading\u{2026}")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(loading, chunks[0]);
        }
        GenreListView::Entries(entries) => {
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| {
                    let style = if entry.emphasized {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(entry.label.to_string()).style(style)
                })
                .collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White));

            let mut state = ListState::default();
            if !entries.is_empty() {
                state.select(Some(app.genre_cursor.min(entries.len() - 1)));
            }
            frame.render_stateful_widget(list, chunks[0], &mut state);
        }
    }

    let image = view
        .entries()
        .get(app.genre_cursor)
        .map(|entry| entry.image_url.clone())
        .unwrap_or_default();
    let preview = Paragraph::new(image)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Image"));
    frame.render_widget(preview, chunks[1]);
}
