use doc_jump_search::find_matches;
use log::debug;

use crate::{
    actions::Action,
    effect::Effect,
    state::{AppState, ContentState, DropdownState, SearchState, UiState},
};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns (new state, effects to perform)
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    let (ui_state, ui_effects) = ui_reducer(state.ui, action);
    state.ui = ui_state;
    effects.extend(ui_effects);

    let (search_state, search_effects) = search_reducer(state.search, action);
    state.search = search_state;
    effects.extend(search_effects);

    let (content_state, content_effects) = content_reducer(state.content, action);
    state.content = content_state;
    effects.extend(content_effects);

    (state, effects)
}

/// UI state reducer - quit flag and render-area bookkeeping
fn ui_reducer(mut state: UiState, action: &Action) -> (UiState, Vec<Effect>) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::UpdateDropdownArea(area) => {
            state.dropdown_area = *area;
        }
        Action::UpdateInputArea(area) => {
            state.input_area = *area;
        }
        _ => {}
    }

    (state, vec![])
}

/// Search sub-reducer: the dropdown selection state machine
///
/// Closed is `dropdown: None`, Open is `Some(DropdownState)`. All
/// transitions are driven by discrete input events; the only deferred work
/// is the debounced query evaluation, which comes back as
/// `Action::EvaluateQuery`.
fn search_reducer(mut state: SearchState, action: &Action) -> (SearchState, Vec<Effect>) {
    let mut effects = vec![];

    match action {
        Action::QueryInput(ch) => {
            state.query.push(*ch);
            effects.extend(on_query_changed(&mut state));
        }
        Action::QueryBackspace => {
            state.query.pop();
            effects.extend(on_query_changed(&mut state));
        }
        Action::ClearQuery => {
            state.query.clear();
            effects.extend(on_query_changed(&mut state));
        }

        Action::EvaluateQuery(query) => {
            // A stale evaluation (its text superseded by further keystrokes)
            // is discarded wholesale, never partially applied
            if *query != state.query {
                debug!("Dropping stale evaluation for {:?}", query);
                return (state, effects);
            }
            open_with_matches(&mut state);
        }

        Action::SelectNext => match &mut state.dropdown {
            // From Closed, ArrowDown evaluates the current query right away
            None => {
                if !state.query.trim().is_empty() {
                    open_with_matches(&mut state);
                    // Opening on ArrowDown requires at least one candidate
                    if state
                        .dropdown
                        .as_ref()
                        .is_some_and(|d| d.candidates.is_empty())
                    {
                        state.dropdown = None;
                    }
                }
            }
            Some(dropdown) => {
                if !dropdown.candidates.is_empty() {
                    let last = dropdown.candidates.len() - 1;
                    // No wraparound: floors at the last index
                    dropdown.active = Some(dropdown.active.map_or(0, |i| (i + 1).min(last)));
                }
            }
        },

        Action::SelectPrev => {
            // Only acts when open; floors at 0, never back to none-active
            if let Some(dropdown) = &mut state.dropdown
                && !dropdown.candidates.is_empty()
            {
                dropdown.active = Some(dropdown.active.map_or(0, |i| i.saturating_sub(1)));
            }
        }

        Action::HoverCandidate(index) => {
            if let Some(dropdown) = &mut state.dropdown
                && *index < dropdown.candidates.len()
            {
                dropdown.active = Some(*index);
            }
        }

        Action::Commit => {
            effects.extend(commit_candidate(&mut state, None));
        }
        Action::CommitCandidate(index) => {
            effects.extend(commit_candidate(&mut state, Some(*index)));
        }

        Action::CancelSearch => {
            state.dropdown = None;
            state.status = None;
            effects.push(Effect::CancelPendingMatch);
        }

        _ => {}
    }

    (state, effects)
}

/// QueryChanged transition: empty text closes the dropdown, anything else
/// (re)arms the debounce timer
fn on_query_changed(state: &mut SearchState) -> Vec<Effect> {
    if state.query.trim().is_empty() {
        state.dropdown = None;
        state.status = None;
        return vec![Effect::CancelPendingMatch];
    }

    vec![Effect::ScheduleMatch {
        query: state.query.clone(),
    }]
}

/// Run the matcher for the current query and enter the Open state
fn open_with_matches(state: &mut SearchState) {
    let query = state.query.trim().to_string();
    let candidates = find_matches(&state.entries, &query);

    state.status = Some(if candidates.is_empty() {
        format!("No matches for: \"{}\"", query)
    } else {
        format!("Suggestions for: \"{}\" (press Enter to jump)", query)
    });

    let active = if candidates.is_empty() { None } else { Some(0) };
    state.dropdown = Some(DropdownState { candidates, active });
}

/// Commit transition: accept the active candidate (or an explicit index
/// for mouse clicks) and close the dropdown
fn commit_candidate(state: &mut SearchState, index: Option<usize>) -> Vec<Effect> {
    let Some(dropdown) = &state.dropdown else {
        return vec![];
    };
    if dropdown.candidates.is_empty() {
        return vec![];
    }

    // None-active commits the top candidate
    let idx = index
        .or(dropdown.active)
        .unwrap_or(0)
        .min(dropdown.candidates.len() - 1);
    let entry = dropdown.candidates[idx].entry.clone();

    state.dropdown = None;
    state.status = Some(format!("Jumped to: {}", entry.label));

    vec![
        Effect::DispatchAction(Action::NavigateToEntry(entry)),
        Effect::CancelPendingMatch,
    ]
}

/// Content sub-reducer: the navigator and topic pane
///
/// At most one topic is visible at a time; revealing one hides the welcome
/// view and every other topic. Ids that no longer resolve are a silent
/// no-op.
fn content_reducer(mut state: ContentState, action: &Action) -> (ContentState, Vec<Effect>) {
    let mut effects = vec![];

    match action {
        Action::NavigateToEntry(entry) => {
            if state.topic_by_id(&entry.container_id).is_none() {
                debug!("Stale navigation target {:?}, ignoring", entry.container_id);
                return (state, effects);
            }

            state.visible_topic = Some(entry.container_id.clone());
            state.scroll_offset = 0;

            if entry.target_id == entry.container_id {
                state.highlight = Some(entry.container_id.clone());
                effects.push(Effect::ScheduleHighlightClear);
            } else {
                let sub_exists = state
                    .topic_by_id(&entry.container_id)
                    .is_some_and(|t| t.sub.iter().any(|s| s.id == entry.target_id));
                if sub_exists {
                    state.expanded.insert(entry.target_id.clone());
                    state.highlight = Some(entry.target_id.clone());
                    effects.push(Effect::ScheduleHighlightClear);
                } else {
                    debug!("Stale sub-topic target {:?}, revealing topic only", entry.target_id);
                }
            }
        }

        Action::ClearHighlight => {
            state.highlight = None;
        }

        Action::SelectNextTopic => {
            if !state.topics.is_empty() {
                let next = state
                    .visible_topic_index()
                    .map_or(0, |i| (i + 1) % state.topics.len());
                state.visible_topic = Some(state.topics[next].id.clone());
                state.scroll_offset = 0;
            }
        }
        Action::SelectPrevTopic => {
            if !state.topics.is_empty() {
                let len = state.topics.len();
                let prev = state.visible_topic_index().map_or(0, |i| (i + len - 1) % len);
                state.visible_topic = Some(state.topics[prev].id.clone());
                state.scroll_offset = 0;
            }
        }

        Action::ScrollContentDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
        }
        Action::ScrollContentUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }

        _ => {}
    }

    (state, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SubTopic, Topic};
    use doc_jump_search::build_index;

    fn fixture_topics() -> Vec<Topic> {
        vec![
            Topic {
                id: "induction".into(),
                title: "Safety Induction".into(),
                tags: None,
                body: "Day one briefing.".into(),
                sub: vec![SubTopic {
                    id: "induction-ppe".into(),
                    title: "PPE Requirements".into(),
                    keywords: Some("gloves".into()),
                    body: "Gloves and goggles.".into(),
                }],
            },
            Topic {
                id: "machines".into(),
                title: "Machine Safety".into(),
                tags: None,
                body: "Guarding and lockout.".into(),
                sub: vec![],
            },
            Topic {
                id: "onboarding".into(),
                title: "Onboarding Checklist".into(),
                tags: None,
                body: "Badge, desk, and booking the safety induction.".into(),
                sub: vec![],
            },
        ]
    }

    fn fixture_state() -> AppState {
        let topics = fixture_topics();
        let entries = build_index(&crate::content::to_sources(&topics));
        AppState {
            search: SearchState {
                entries,
                ..SearchState::default()
            },
            content: ContentState {
                topics,
                ..ContentState::default()
            },
            ..AppState::default()
        }
    }

    fn open_with(state: AppState, query: &str) -> AppState {
        let mut state = state;
        state.search.query = query.to_string();
        let (state, _) = reduce(state, &Action::EvaluateQuery(query.to_string()));
        state
    }

    fn navigation_targets(effects: &[Effect]) -> Vec<String> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::DispatchAction(Action::NavigateToEntry(entry)) => {
                    Some(entry.target_id.clone())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_query_input_schedules_debounced_match() {
        let state = fixture_state();
        let (state, effects) = reduce(state, &Action::QueryInput('s'));
        assert_eq!(
            effects,
            vec![Effect::ScheduleMatch {
                query: "s".to_string()
            }]
        );
        // Nothing evaluated until the timer fires
        assert!(state.search.dropdown.is_none());
    }

    #[test]
    fn test_empty_query_closes_dropdown() {
        let state = open_with(fixture_state(), "safety");
        let mut state = state;
        state.search.query = "s".to_string();
        let (state, effects) = reduce(state, &Action::QueryBackspace);
        assert!(state.search.dropdown.is_none());
        assert!(state.search.status.is_none());
        assert_eq!(effects, vec![Effect::CancelPendingMatch]);
    }

    #[test]
    fn test_evaluate_opens_with_first_candidate_active() {
        let state = open_with(fixture_state(), "safety");
        let dropdown = state.search.dropdown.as_ref().unwrap();
        assert!(!dropdown.candidates.is_empty());
        assert_eq!(dropdown.active, Some(0));
        assert!(
            state
                .search
                .status
                .as_deref()
                .unwrap()
                .starts_with("Suggestions for:")
        );
    }

    #[test]
    fn test_evaluate_with_no_matches_opens_empty() {
        let state = open_with(fixture_state(), "zzzzzz");
        let dropdown = state.search.dropdown.as_ref().unwrap();
        assert!(dropdown.candidates.is_empty());
        assert_eq!(dropdown.active, None);
        assert_eq!(state.search.status.as_deref(), Some("No matches for: \"zzzzzz\""));
    }

    #[test]
    fn test_stale_evaluation_is_discarded() {
        let mut state = fixture_state();
        state.search.query = "machine".to_string();
        let (state, _) = reduce(state, &Action::EvaluateQuery("mach".to_string()));
        assert!(state.search.dropdown.is_none());
    }

    #[test]
    fn test_arrow_down_from_closed_opens_at_zero() {
        let mut state = fixture_state();
        state.search.query = "safety".to_string();
        let (state, _) = reduce(state, &Action::SelectNext);
        let dropdown = state.search.dropdown.as_ref().unwrap();
        assert_eq!(dropdown.active, Some(0));
    }

    #[test]
    fn test_arrow_down_from_closed_without_matches_stays_closed() {
        let mut state = fixture_state();
        state.search.query = "zzzzzz".to_string();
        let (state, _) = reduce(state, &Action::SelectNext);
        assert!(state.search.dropdown.is_none());
    }

    #[test]
    fn test_arrow_down_floors_at_last_index() {
        let mut state = open_with(fixture_state(), "safety");
        let len = state.search.dropdown.as_ref().unwrap().candidates.len();
        assert!(len >= 3);
        state.search.dropdown.as_mut().unwrap().active = Some(len - 1);

        let (state, _) = reduce(state, &Action::SelectNext);
        assert_eq!(
            state.search.dropdown.as_ref().unwrap().active,
            Some(len - 1)
        );
    }

    #[test]
    fn test_arrow_up_floors_at_zero() {
        let state = open_with(fixture_state(), "safety");
        let (state, _) = reduce(state, &Action::SelectPrev);
        assert_eq!(state.search.dropdown.as_ref().unwrap().active, Some(0));
    }

    #[test]
    fn test_arrow_up_when_closed_is_noop() {
        let state = fixture_state();
        let (state, effects) = reduce(state, &Action::SelectPrev);
        assert!(state.search.dropdown.is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_hover_moves_active_without_side_effects() {
        let state = open_with(fixture_state(), "safety");
        let (state, effects) = reduce(state, &Action::HoverCandidate(1));
        assert_eq!(state.search.dropdown.as_ref().unwrap().active, Some(1));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_hover_out_of_bounds_is_ignored() {
        let state = open_with(fixture_state(), "safety");
        let (state, _) = reduce(state, &Action::HoverCandidate(99));
        assert_eq!(state.search.dropdown.as_ref().unwrap().active, Some(0));
    }

    #[test]
    fn test_commit_navigates_to_active_candidate() {
        let mut state = open_with(fixture_state(), "safety");
        state.search.dropdown.as_mut().unwrap().active = Some(1);
        let expected = state.search.dropdown.as_ref().unwrap().candidates[1]
            .entry
            .target_id
            .clone();

        let (state, effects) = reduce(state, &Action::Commit);
        assert!(state.search.dropdown.is_none());
        assert_eq!(navigation_targets(&effects), vec![expected]);
        assert!(
            state
                .search
                .status
                .as_deref()
                .unwrap()
                .starts_with("Jumped to:")
        );
    }

    #[test]
    fn test_commit_with_no_active_selects_first() {
        let mut state = open_with(fixture_state(), "safety");
        state.search.dropdown.as_mut().unwrap().active = None;
        let expected = state.search.dropdown.as_ref().unwrap().candidates[0]
            .entry
            .target_id
            .clone();

        let (_, effects) = reduce(state, &Action::Commit);
        assert_eq!(navigation_targets(&effects), vec![expected]);
    }

    #[test]
    fn test_commit_when_closed_is_noop() {
        let mut state = fixture_state();
        state.search.query = "safety".to_string();
        let (state, effects) = reduce(state, &Action::Commit);
        assert!(state.search.dropdown.is_none());
        assert!(navigation_targets(&effects).is_empty());
    }

    #[test]
    fn test_commit_with_empty_candidates_is_noop() {
        let state = open_with(fixture_state(), "zzzzzz");
        let (state, effects) = reduce(state, &Action::Commit);
        assert!(state.search.dropdown.is_some());
        assert!(navigation_targets(&effects).is_empty());
    }

    #[test]
    fn test_cancel_closes_without_navigating() {
        let state = open_with(fixture_state(), "safety");
        let (state, effects) = reduce(state, &Action::CancelSearch);
        assert!(state.search.dropdown.is_none());
        assert!(state.search.status.is_none());
        assert!(navigation_targets(&effects).is_empty());
    }

    #[test]
    fn test_click_commits_clicked_candidate() {
        let state = open_with(fixture_state(), "safety");
        let expected = state.search.dropdown.as_ref().unwrap().candidates[1]
            .entry
            .target_id
            .clone();

        let (state, effects) = reduce(state, &Action::CommitCandidate(1));
        assert!(state.search.dropdown.is_none());
        assert_eq!(navigation_targets(&effects), vec![expected]);
    }

    #[test]
    fn test_navigate_reveals_single_topic_and_highlights_sub() {
        let state = fixture_state();
        let entry = state
            .search
            .entries
            .iter()
            .find(|e| e.target_id == "induction-ppe")
            .cloned()
            .unwrap();

        let (state, effects) = reduce(state, &Action::NavigateToEntry(entry));
        assert_eq!(state.content.visible_topic.as_deref(), Some("induction"));
        assert!(state.content.expanded.contains("induction-ppe"));
        assert_eq!(state.content.highlight.as_deref(), Some("induction-ppe"));
        assert!(effects.contains(&Effect::ScheduleHighlightClear));
    }

    #[test]
    fn test_navigate_to_topic_highlights_topic() {
        let state = fixture_state();
        let entry = state
            .search
            .entries
            .iter()
            .find(|e| e.target_id == "machines")
            .cloned()
            .unwrap();

        let (state, effects) = reduce(state, &Action::NavigateToEntry(entry));
        assert_eq!(state.content.visible_topic.as_deref(), Some("machines"));
        assert_eq!(state.content.highlight.as_deref(), Some("machines"));
        assert!(effects.contains(&Effect::ScheduleHighlightClear));
    }

    #[test]
    fn test_navigate_with_stale_container_is_noop() {
        let state = fixture_state();
        let mut entry = state.search.entries[0].clone();
        entry.container_id = "deleted-topic".to_string();
        entry.target_id = "deleted-topic".to_string();

        let (state, effects) = reduce(state, &Action::NavigateToEntry(entry));
        assert!(state.content.visible_topic.is_none());
        assert!(!effects.contains(&Effect::ScheduleHighlightClear));
    }

    #[test]
    fn test_navigate_with_stale_sub_reveals_topic_only() {
        let state = fixture_state();
        let mut entry = state
            .search
            .entries
            .iter()
            .find(|e| e.target_id == "induction-ppe")
            .cloned()
            .unwrap();
        entry.target_id = "induction-gone".to_string();

        let (state, effects) = reduce(state, &Action::NavigateToEntry(entry));
        assert_eq!(state.content.visible_topic.as_deref(), Some("induction"));
        assert!(state.content.highlight.is_none());
        assert!(!effects.contains(&Effect::ScheduleHighlightClear));
    }

    #[test]
    fn test_clear_highlight() {
        let mut state = fixture_state();
        state.content.highlight = Some("induction".into());
        let (state, _) = reduce(state, &Action::ClearHighlight);
        assert!(state.content.highlight.is_none());
    }

    #[test]
    fn test_topic_cycling_wraps() {
        let state = fixture_state();
        let (state, _) = reduce(state, &Action::SelectNextTopic);
        assert_eq!(state.content.visible_topic.as_deref(), Some("induction"));

        let (state, _) = reduce(state, &Action::SelectPrevTopic);
        assert_eq!(state.content.visible_topic.as_deref(), Some("onboarding"));
    }
}
