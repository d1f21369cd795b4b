use gamehub_core::view::SortMenu;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use super::App;

/// Render the title bar with the sort menu button.
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let menu = SortMenu::new(app.sort_catalog, app.selection.sort_order());
    let title = Paragraph::new(format!(
        "gamehub    {} \u{25be}    ({})",
        menu.title(),
        app.queries.source_name()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// Render the open sort menu as a popup over the game pane.
pub fn render_popup(frame: &mut Frame, app: &App, cursor: usize) {
    let menu = SortMenu::new(app.sort_catalog, app.selection.sort_order());
    let entries = menu.entries();

    let height = entries.len() as u16 + 2;
    let area = popup_area(frame.area(), 28, height);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.active { "\u{2022} " } else { "  " };
            ListItem::new(format!("{}{}", marker, entry.option.label))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Order by"))
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White));

    let mut state = ListState::default();
    state.select(Some(cursor));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_area_centred() {
        let area = popup_area(Rect::new(0, 0, 100, 40), 28, 8);
        assert_eq!(area, Rect::new(36, 16, 28, 8));
    }

    #[test]
    fn test_popup_area_clamped() {
        let area = popup_area(Rect::new(0, 0, 20, 5), 28, 8);
        assert_eq!(area, Rect::new(0, 0, 20, 5));
    }
}
