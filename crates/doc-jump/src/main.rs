use anyhow::{Context, Result};
use doc_jump_search::build_index;
use log::debug;
use ratatui::{
    crossterm::{
        self,
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
            KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
        },
    },
    layout::Rect,
    prelude::*,
};
use serde::{Deserialize, Serialize};
use std::{
    io::BufReader,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tokio::sync::mpsc;

use crate::actions::Action;
use crate::config::Config;
use crate::effect::execute_effect;
use crate::state::*;
use crate::store::Store;
use crate::task::{Debouncer, HighlightTimer};

mod actions;
mod config;
mod content;
mod effect;
mod reducer;
mod state;
mod store;
mod task;
mod theme;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Channel back into the main loop, used by the timer tasks
    pub action_tx: mpsc::UnboundedSender<Action>,
    // Debounced query evaluation
    pub debouncer: Debouncer,
    // Clears the jump highlight after its configured duration
    pub highlight_timer: HighlightTimer,
}

/// Session state restored on the next start
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
struct PersistedState {
    visible_topic: Option<String>,
}

/// Rendered areas shared with the event reader task for mouse hit tests
#[derive(Debug, Default, Clone, Copy)]
struct MouseAreas {
    input: Option<Rect>,
    dropdown: Option<Rect>,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        shutdown().unwrap();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        std::io::stderr(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(
        std::io::stderr(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

/// Dispatch an action, execute the returned effects, and feed follow-up
/// actions back through the store
fn update(app: &mut App, msg: Action) -> Result<()> {
    let effects = app.store.dispatch(msg);

    for effect in effects {
        let follow_up_actions = execute_effect(app, effect)?;

        for action in follow_up_actions {
            let nested_effects = app.store.dispatch(action);
            for nested_effect in nested_effects {
                for nested_action in execute_effect(app, nested_effect)? {
                    let _ = app.action_tx.send(nested_action);
                }
            }
        }
    }

    Ok(())
}

fn start_event_handler(
    tx: mpsc::UnboundedSender<Action>,
    areas: Arc<Mutex<MouseAreas>>,
) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);

    tokio::spawn(async move {
        loop {
            let action = if crossterm::event::poll(tick_rate).unwrap_or(false) {
                let areas = *areas.lock().unwrap();
                handle_events(&areas).unwrap_or(Action::None)
            } else {
                Action::None
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

fn handle_events(areas: &MouseAreas) -> Result<Action> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key),
        Event::Mouse(mouse) => handle_mouse_event(mouse, areas),
        _ => Action::None,
    })
}

fn handle_key_event(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('u') => Action::ClearQuery,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::CancelSearch,
        KeyCode::Enter => Action::Commit,
        KeyCode::Down => Action::SelectNext,
        KeyCode::Up => Action::SelectPrev,
        KeyCode::Tab => Action::SelectNextTopic,
        KeyCode::BackTab => Action::SelectPrevTopic,
        KeyCode::PageDown => Action::ScrollContentDown,
        KeyCode::PageUp => Action::ScrollContentUp,
        KeyCode::Backspace => Action::QueryBackspace,
        KeyCode::Char(c) => Action::QueryInput(c),
        _ => Action::None,
    }
}

fn handle_mouse_event(mouse: MouseEvent, areas: &MouseAreas) -> Action {
    match mouse.kind {
        MouseEventKind::Moved => match dropdown_row_at(mouse, areas) {
            Some(index) => Action::HoverCandidate(index),
            None => Action::None,
        },
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = dropdown_row_at(mouse, areas) {
                Action::CommitCandidate(index)
            } else if contains(areas.input, mouse.column, mouse.row) {
                Action::None
            } else {
                // Clicking anywhere else closes the dropdown
                Action::CancelSearch
            }
        }
        MouseEventKind::ScrollDown => Action::ScrollContentDown,
        MouseEventKind::ScrollUp => Action::ScrollContentUp,
        _ => Action::None,
    }
}

/// Map a mouse position to a dropdown candidate index (two rows per
/// candidate, inside the borders)
fn dropdown_row_at(mouse: MouseEvent, areas: &MouseAreas) -> Option<usize> {
    let area = areas.dropdown?;
    if !contains(Some(area), mouse.column, mouse.row) {
        return None;
    }
    let inner_top = area.y + 1;
    if mouse.row < inner_top || mouse.row >= area.y + area.height.saturating_sub(1) {
        return None;
    }
    Some(((mouse.row - inner_top) / 2) as usize)
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| {
        x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height
    })
}

async fn run(mut app: App, mut action_rx: mpsc::UnboundedReceiver<Action>) -> Result<()> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let areas_shared = Arc::new(Mutex::new(MouseAreas::default()));
    let event_task = start_event_handler(app.action_tx.clone(), areas_shared.clone());

    loop {
        // Sync rendered areas for the event reader's mouse hit tests
        {
            let state = app.store.state();
            *areas_shared.lock().unwrap() = MouseAreas {
                input: state.ui.input_area,
                dropdown: state.ui.dropdown_area,
            };
        }

        t.draw(|f| {
            ui(f, &mut app);
        })?;

        let maybe_action = tokio::time::timeout(std::time::Duration::from_millis(100), async {
            action_rx.recv().await
        })
        .await;

        match maybe_action {
            Ok(Some(action)) => update(&mut app, action)?,
            Ok(None) => break, // Channel closed
            Err(_) => {}       // Timeout - just redraw
        }

        if app.store.state().ui.should_quit {
            let persisted = PersistedState {
                visible_topic: app.store.state().content.visible_topic.clone(),
            };
            if let Err(err) = store_persisted_state(&persisted) {
                debug!("Failed to persist session: {}", err);
            }
            break;
        }
    }

    event_task.abort();

    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    use ratatui::layout::{Constraint, Direction, Layout};

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Search input + meta line
            Constraint::Min(0),    // Nav + content
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(chunks[1]);

    views::nav::render_nav(f, main[0], app);
    views::topic::render_topic(f, main[1], app);
    views::status_bar::render_status_bar(f, chunks[2], app);

    // Search bar renders last so the dropdown overlays the content
    let areas = views::search_bar::render_search_bar(f, chunks[0], app);

    if app.store.state().ui.input_area != Some(areas.input) {
        app.store.dispatch(Action::UpdateInputArea(Some(areas.input)));
    }
    if app.store.state().ui.dropdown_area != areas.dropdown {
        app.store.dispatch(Action::UpdateDropdownArea(areas.dropdown));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let app = App::new(action_tx)?;

    initialize_panic_handler();
    startup()?;
    let result = run(app, action_rx).await;
    shutdown()?;
    result
}

/// Log to the file named by DOC_JUMP_LOG; without it, only errors reach
/// stderr (anything louder would scribble over the TUI)
fn init_logger() {
    if let Ok(path) = std::env::var("DOC_JUMP_LOG")
        && let Ok(file) = std::fs::File::create(&path)
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
        return;
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
}

impl App {
    fn new(action_tx: mpsc::UnboundedSender<Action>) -> Result<App> {
        let config = Config::load();

        let topics = content::load_handbook(Path::new(&config.handbook_path))
            .with_context(|| format!("failed to load handbook from {}", config.handbook_path))?;
        let entries = build_index(&content::to_sources(&topics));

        // Restore the previously visible topic if it still exists
        let visible_topic = load_persisted_state()
            .ok()
            .and_then(|p| p.visible_topic)
            .filter(|id| topics.iter().any(|t| &t.id == id));

        let initial_state = AppState {
            search: SearchState {
                entries,
                ..SearchState::default()
            },
            content: ContentState {
                topics,
                visible_topic,
                ..ContentState::default()
            },
            config,
            ..AppState::default()
        };

        Ok(App {
            store: Store::new(initial_state),
            debouncer: Debouncer::new(action_tx.clone()),
            highlight_timer: HighlightTimer::new(action_tx.clone()),
            action_tx,
        })
    }
}

fn session_file_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".doc-jump-session.json"))
}

fn store_persisted_state(state: &PersistedState) -> Result<()> {
    let file = std::fs::File::create(session_file_path()?)?;
    serde_json::to_writer_pretty(file, state).context("Failed to write persisted state to file")?;

    debug!("Stored persisted state: {:?}", state);

    Ok(())
}

fn load_persisted_state() -> Result<PersistedState> {
    let file = std::fs::File::open(session_file_path()?)?;
    let reader = BufReader::new(file);
    let state: PersistedState =
        serde_json::from_reader(reader).context("Failed to parse persisted state from file")?;

    debug!("Loaded persisted state: {:?}", state);

    Ok(state)
}
