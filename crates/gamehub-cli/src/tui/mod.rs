use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gamehub_core::view::{BrowseSelection, GenreList, SortMenu};
use gamehub_core::{CropSize, DisplayAliases, SortCatalog};
use gamehub_query::{CatalogQueries, Config, GameSubscription, GenreSubscription};
use ratatui::prelude::*;
use tokio::runtime::Handle;

pub mod game_list;
pub mod genre_list;
pub mod sort_menu;

/// How long to wait for input before redrawing, so finished loads show up.
const TICK: Duration = Duration::from_millis(100);

/// Preview size requested for genre images in the side pane.
pub const GENRE_THUMBNAIL: CropSize = CropSize::new(300, 200);

/// Which pane receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Genres,
    Games,
}

/// Application state for the browser.
#[derive(Debug)]
pub struct App {
    pub queries: CatalogQueries,
    pub aliases: DisplayAliases,
    pub sort_catalog: SortCatalog,
    pub selection: BrowseSelection,
    pub genres: GenreSubscription,
    pub games: GameSubscription,
    pub focus: Focus,
    pub genre_cursor: usize,
    pub game_cursor: usize,
    /// Cursor of the sort menu while it is open.
    pub sort_menu: Option<usize>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, runtime: Handle) -> Self {
        let queries = CatalogQueries::from_config(config, runtime);
        let aliases = DisplayAliases::genres().extended(config.genre_aliases.clone());
        Self::with_queries(queries, aliases)
    }

    pub fn with_queries(queries: CatalogQueries, aliases: DisplayAliases) -> Self {
        let selection = BrowseSelection::new();
        let genres = queries.genres();
        let games = queries.games(selection.game_query());
        Self {
            queries,
            aliases,
            sort_catalog: SortCatalog::standard(),
            selection,
            genres,
            games,
            focus: Focus::Genres,
            genre_cursor: 0,
            game_cursor: 0,
            sort_menu: None,
            should_quit: false,
        }
    }

    /// The genre list as drawn in the side pane.
    pub fn genre_list(&self) -> GenreList<'_> {
        GenreList::new(&self.aliases, self.selection.selected_genre_id())
            .with_thumbnail(GENRE_THUMBNAIL)
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.sort_menu.is_some() {
            self.handle_sort_menu_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Genres => Focus::Games,
                    Focus::Games => Focus::Genres,
                };
            }
            KeyCode::Char('o') => {
                let menu = SortMenu::new(self.sort_catalog, self.selection.sort_order());
                self.sort_menu = Some(menu.initial_cursor());
            }
            KeyCode::Char('a') => {
                self.selection.clear_genre();
                self.reload_games();
            }
            KeyCode::Char('r') => {
                self.queries.refresh_genres();
                self.genres = self.queries.genres();
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Enter if self.focus == Focus::Genres => self.select_genre_at_cursor(),
            _ => {}
        }
    }

    fn handle_sort_menu_key(&mut self, key: KeyCode) {
        let Some(cursor) = self.sort_menu else {
            return;
        };
        let count = self.sort_catalog.options().len();

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('o') => self.sort_menu = None,
            KeyCode::Char('j') | KeyCode::Down => {
                self.sort_menu = Some((cursor + 1).min(count.saturating_sub(1)));
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.sort_menu = Some(cursor.saturating_sub(1));
            }
            KeyCode::Enter => {
                let active = self.selection.sort_order().to_string();
                let selection = &mut self.selection;
                SortMenu::new(self.sort_catalog, &active)
                    .select(cursor, |value| selection.set_sort_order(value));
                self.sort_menu = None;
                self.reload_games();
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, count) = match self.focus {
            Focus::Genres => {
                let result = self.genres.result();
                let count = self.genre_list().render(&result).entries().len();
                (&mut self.genre_cursor, count)
            }
            Focus::Games => (
                &mut self.game_cursor,
                self.games.result().data.map_or(0, |page| page.results.len()),
            ),
        };
        if count == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(count - 1);
    }

    fn select_genre_at_cursor(&mut self) {
        let result = self.genres.result();
        let selected = {
            let list = GenreList::new(&self.aliases, self.selection.selected_genre_id());
            let view = list.render(&result);
            let selection = &mut self.selection;
            view.entries()
                .get(self.genre_cursor)
                .map(|entry| entry.select(|genre| selection.select_genre(genre)))
                .is_some()
        };
        if selected {
            self.reload_games();
        }
    }

    /// Re-subscribe the game list to the current selection. The previous
    /// subscription is dropped, cancelling its load if nothing else uses it.
    fn reload_games(&mut self) {
        self.games = self.queries.games(self.selection.game_query());
        self.game_cursor = 0;
    }
}

/// Render the whole browser.
fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Genres and games
            Constraint::Length(3), // Help bar
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    sort_menu::render_title(frame, app, chunks[0]);
    genre_list::render(frame, app, body[0]);
    game_list::render(frame, app, body[1]);
    render_help(frame, app, chunks[2]);

    if let Some(cursor) = app.sort_menu {
        sort_menu::render_popup(frame, app, cursor);
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    use ratatui::widgets::{Block, Borders, Paragraph};

    let text = if app.sort_menu.is_some() {
        "  \u{2191}/k Up  \u{2193}/j Down  Enter Apply  Esc Close  q Quit"
    } else {
        "  \u{2191}/k Up  \u{2193}/j Down  Enter Filter  a All  o Order by  Tab Pane  r Reload  q Quit"
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

/// Run the browser.
///
/// Sets up the terminal, runs the main event loop, and restores the terminal
/// on exit (including on error).
pub fn run_tui(config: &Config, runtime: Handle) -> Result<()> {
    let app = App::new(config, runtime);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop, capturing any error so we can restore the terminal
    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
