//! Index construction: flatten the content tree into searchable entries

use log::debug;

use crate::entry::{Entry, EntryKind, SubTopicSource, TopicSource};

/// Positional fallback id for a topic that has none of its own.
///
/// Derived only from the position, so repeated indexing of the same tree
/// assigns the same id and previously committed targets stay valid.
pub fn fallback_topic_id(position: usize) -> String {
    format!("topic-{}", position)
}

/// Positional fallback id for a sub-topic that has none of its own.
pub fn fallback_sub_id(container_id: &str, position: usize) -> String {
    format!("{}-sub-{}", container_id, position)
}

/// Flatten a visibility-filtered content tree into the ordered entry list.
///
/// Pure function of its input: topics appear in input order, each topic's
/// sub-topics immediately after it in input order. Units without an id get
/// a stable positional fallback; missing tag/keyword strings are treated as
/// empty.
pub fn build_index(topics: &[TopicSource]) -> Vec<Entry> {
    let mut entries = Vec::new();

    for (i, topic) in topics.iter().enumerate() {
        let topic_id = topic
            .id
            .clone()
            .unwrap_or_else(|| fallback_topic_id(i));

        entries.push(Entry {
            kind: EntryKind::Topic,
            label: topic.title.clone(),
            meta: "Topic".to_string(),
            container_id: topic_id.clone(),
            target_id: topic_id.clone(),
            search_text: search_text(&topic.title, topic.tags.as_deref(), &topic.body),
        });

        for (j, sub) in topic.sub.iter().enumerate() {
            let sub_id = sub
                .id
                .clone()
                .unwrap_or_else(|| fallback_sub_id(&topic_id, j));

            entries.push(Entry {
                kind: EntryKind::SubTopic,
                label: sub.title.clone(),
                meta: format!("Inside: {}", topic.title),
                container_id: topic_id.clone(),
                target_id: sub_id,
                search_text: sub_search_text(sub),
            });
        }
    }

    debug!(
        "Indexed {} entries from {} topics",
        entries.len(),
        topics.len()
    );

    entries
}

fn search_text(title: &str, tags: Option<&str>, body: &str) -> String {
    format!("{} {} {}", title, tags.unwrap_or(""), body)
}

fn sub_search_text(sub: &SubTopicSource) -> String {
    search_text(&sub.title, sub.keywords.as_deref(), &sub.body)
}
