//! Search core for the doc-jump handbook viewer
//!
//! This crate provides the pure, UI-independent half of the search-jump
//! feature:
//! - Text normalization and tokenization
//! - Index construction over a visibility-filtered content tree
//! - Weighted relevance scoring against a free-text query
//! - Threshold filtering, ranking and truncation of candidates
//!
//! All functions are total over their documented input domain: empty
//! strings, empty corpora and missing optional attributes produce empty
//! results rather than errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use doc_jump_search::{TopicSource, build_index, find_matches};
//!
//! let topics = vec![TopicSource {
//!     id: Some("safety".into()),
//!     title: "Safety Induction".into(),
//!     tags: None,
//!     body: "Mandatory safety briefing for all new staff".into(),
//!     sub: vec![],
//! }];
//!
//! let entries = build_index(&topics);
//! let matches = find_matches(&entries, "safety");
//! assert_eq!(matches[0].entry.label, "Safety Induction");
//! ```

mod entry;
mod index;
mod matcher;
mod score;
mod text;

pub use entry::{Candidate, Entry, EntryKind, SubTopicSource, TopicSource};
pub use index::{build_index, fallback_sub_id, fallback_topic_id};
pub use matcher::{MAX_RESULTS, SCORE_THRESHOLD, find_matches};
pub use score::score;
pub use text::{normalize, tokenize};
