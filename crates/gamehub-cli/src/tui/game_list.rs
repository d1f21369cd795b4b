use gamehub_core::crop_image_url;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use super::{App, Focus};

/// Render the game pane for the current genre and sort order.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let genre = app
        .selection
        .selected_genre()
        .map(|g| app.aliases.display_name(&g.name))
        .unwrap_or("All genres");
    let border_style = if app.focus == Focus::Games {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let result = app.games.result();

    if let Some(error) = &result.error {
        let message = Paragraph::new(format!("Could not load games: {}", error))
            .style(Style::default().fg(Color::Red))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(genre),
            );
        frame.render_widget(message, area);
        return;
    }

    let Some(page) = result.data else {
        let loading = Paragraph::new("Loading games\u{2026}")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(genre),
            );
        frame.render_widget(loading, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let header = Row::new(vec![
        Cell::from("Game").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Platforms"),
        Cell::from("Released"),
        Cell::from("Score"),
        Cell::from("Rating"),
    ])
    .height(1);

    let rows: Vec<Row> = page
        .results
        .iter()
        .map(|game| {
            Row::new(vec![
                Cell::from(game.name.clone()),
                Cell::from(game.platform_names().collect::<Vec<_>>().join(", ")),
                Cell::from(game.released.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(
                    game.metacritic
                        .map_or_else(|| "-".to_string(), |score| score.to_string()),
                ),
                Cell::from(format!("{:.2}", game.rating)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Length(11),
            Constraint::Length(6),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("{} [{}]", genre, page.count)),
    );

    let mut state = TableState::default();
    if !page.results.is_empty() {
        state.select(Some(app.game_cursor.min(page.results.len() - 1)));
    }
    frame.render_stateful_widget(table, chunks[0], &mut state);

    let image = page
        .results
        .get(app.game_cursor)
        .map(|game| crop_image_url(game.background_image.as_deref()))
        .unwrap_or_default();
    let preview = Paragraph::new(image)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Image"));
    frame.render_widget(preview, chunks[1]);
}
