use std::collections::HashSet;

use doc_jump_search::{Candidate, Entry};
use ratatui::layout::Rect;

use crate::{config::Config, content::Topic, theme::Theme};

/// Root application state following Redux pattern
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub ui: UiState,
    pub search: SearchState,
    pub content: ContentState,
    pub config: Config,
    pub theme: Theme,
}

/// UI-specific state (quit flag, rendered areas for mouse hit tests)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub should_quit: bool,
    /// Where the dropdown was last drawn (None while closed)
    pub dropdown_area: Option<Rect>,
    /// Where the search input was last drawn
    pub input_area: Option<Rect>,
}

/// Search box and dropdown state
///
/// `dropdown: None` is the machine's Closed state; `Some` is Open,
/// parameterized by its candidates and active cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current input text, verbatim (normalization happens in the scorer)
    pub query: String,
    pub dropdown: Option<DropdownState>,
    /// Meta line under the input ("Suggestions for ...", "Jumped to ...")
    pub status: Option<String>,
    /// Read-only entry index, built once at startup
    pub entries: Vec<Entry>,
}

/// Open dropdown: ranked candidates plus the active cursor
///
/// `active: None` means the list is shown with no row focused (the query
/// produced no matches, or nothing has been selected yet). When `Some`,
/// the index is always in bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
    pub candidates: Vec<Candidate>,
    pub active: Option<usize>,
}

impl SearchState {
    pub fn is_open(&self) -> bool {
        self.dropdown.is_some()
    }
}

/// Content pane state: the loaded handbook plus what is currently revealed
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    pub topics: Vec<Topic>,
    /// Id of the single visible topic; None shows the welcome view
    pub visible_topic: Option<String>,
    /// Ids of currently expanded sub-topics
    pub expanded: HashSet<String>,
    /// Sub-topic or topic id carrying the transient jump highlight
    pub highlight: Option<String>,
    pub scroll_offset: u16,
}

impl ContentState {
    /// Index of the visible topic in document order, if any
    pub fn visible_topic_index(&self) -> Option<usize> {
        let id = self.visible_topic.as_deref()?;
        self.topics.iter().position(|t| t.id == id)
    }

    pub fn topic_by_id(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == id)
    }
}
