//! Searchable entry model and content-tree input records

/// Kind of indexed content unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Top-level topic (shown one-at-a-time in the main view)
    Topic,
    /// Nested, collapsible sub-topic inside a topic
    SubTopic,
}

/// One indexed, searchable unit of content
///
/// Immutable once built. `target_id` always identifies the topic itself or
/// one of its sub-topics, so it is a descendant of (or equal to)
/// `container_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,

    /// Display title of the topic or sub-topic
    pub label: String,

    /// Short descriptive string shown next to the label
    /// ("Topic" or "Inside: <parent title>")
    pub meta: String,

    /// Id of the owning top-level topic
    pub container_id: String,

    /// Id of the exact unit to reveal on commit
    pub target_id: String,

    /// Label + tags/keywords + full body text; matched against, never shown
    pub search_text: String,
}

/// An entry paired with its relevance score for the current query
///
/// Ephemeral: recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub entry: Entry,
    pub score: f64,
}

/// A top-level content unit as supplied by the host, already filtered for
/// visibility. Missing optional attributes degrade to empty strings during
/// indexing.
#[derive(Debug, Clone, Default)]
pub struct TopicSource {
    pub id: Option<String>,
    pub title: String,
    pub tags: Option<String>,
    pub body: String,
    pub sub: Vec<SubTopicSource>,
}

/// A nested sub-unit of a topic
#[derive(Debug, Clone, Default)]
pub struct SubTopicSource {
    pub id: Option<String>,
    pub title: String,
    pub keywords: Option<String>,
    pub body: String,
}
