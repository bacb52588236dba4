//! Handbook loading: TOML content file -> topic tree -> search index input
//!
//! The handbook file is the externally-supplied, already visibility-filtered
//! content tree. Missing ids get the same positional fallback the indexer
//! uses, so committed targets stay valid across re-indexing.

use std::path::Path;

use doc_jump_search::{SubTopicSource, TopicSource, fallback_sub_id, fallback_topic_id};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read handbook file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse handbook file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// One top-level handbook topic with resolved id
#[derive(Debug, Clone, Default)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub tags: Option<String>,
    pub body: String,
    pub sub: Vec<SubTopic>,
}

/// One nested sub-topic with resolved id
#[derive(Debug, Clone, Default)]
pub struct SubTopic {
    pub id: String,
    pub title: String,
    pub keywords: Option<String>,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct HandbookDoc {
    #[serde(default, rename = "topic")]
    topics: Vec<TopicDoc>,
}

#[derive(Debug, Deserialize)]
struct TopicDoc {
    id: Option<String>,
    title: String,
    tags: Option<String>,
    #[serde(default)]
    body: String,
    #[serde(default)]
    sub: Vec<SubTopicDoc>,
}

#[derive(Debug, Deserialize)]
struct SubTopicDoc {
    id: Option<String>,
    title: String,
    keywords: Option<String>,
    #[serde(default)]
    body: String,
}

/// Load the handbook from a TOML file
pub fn load_handbook(path: &Path) -> Result<Vec<Topic>, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let topics = parse_handbook(&raw).map_err(|source| ContentError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    debug!("Loaded {} topics from {}", topics.len(), path.display());

    Ok(topics)
}

/// Parse handbook TOML, assigning positional fallback ids to units
/// that lack one
fn parse_handbook(raw: &str) -> Result<Vec<Topic>, toml::de::Error> {
    let doc: HandbookDoc = toml::from_str(raw)?;

    let topics = doc
        .topics
        .into_iter()
        .enumerate()
        .map(|(i, t)| {
            let id = t.id.unwrap_or_else(|| fallback_topic_id(i));
            let sub = t
                .sub
                .into_iter()
                .enumerate()
                .map(|(j, s)| SubTopic {
                    id: s.id.unwrap_or_else(|| fallback_sub_id(&id, j)),
                    title: s.title,
                    keywords: s.keywords,
                    body: s.body,
                })
                .collect();
            Topic {
                id,
                title: t.title,
                tags: t.tags,
                body: t.body,
                sub,
            }
        })
        .collect();

    Ok(topics)
}

/// Convert loaded topics into the indexer's input records
pub fn to_sources(topics: &[Topic]) -> Vec<TopicSource> {
    topics
        .iter()
        .map(|t| TopicSource {
            id: Some(t.id.clone()),
            title: t.title.clone(),
            tags: t.tags.clone(),
            body: t.body.clone(),
            sub: t
                .sub
                .iter()
                .map(|s| SubTopicSource {
                    id: Some(s.id.clone()),
                    title: s.title.clone(),
                    keywords: s.keywords.clone(),
                    body: s.body.clone(),
                })
                .collect(),
        })
        .collect()
}
