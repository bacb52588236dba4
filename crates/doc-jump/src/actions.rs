use doc_jump_search::Entry;

/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Search input
    QueryInput(char),
    QueryBackspace,
    ClearQuery,

    /// Debounce timer fired for this query text
    EvaluateQuery(String),

    // Dropdown navigation
    SelectNext,
    SelectPrev,
    HoverCandidate(usize),

    /// Accept the active candidate (Enter)
    Commit,
    /// Accept a specific candidate (mouse click on the dropdown)
    CommitCandidate(usize),
    /// Close the dropdown and clear the meta line (Esc / click outside)
    CancelSearch,

    // Navigation
    NavigateToEntry(Entry),
    ClearHighlight,
    SelectNextTopic,
    SelectPrevTopic,
    ScrollContentDown,
    ScrollContentUp,

    // Viewport bookkeeping (updated during rendering, for mouse hit tests)
    UpdateDropdownArea(Option<ratatui::layout::Rect>),
    UpdateInputArea(Option<ratatui::layout::Rect>),

    Quit,
    None,
}
