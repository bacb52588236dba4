//! Candidate ranking: score every entry, filter, sort, truncate

use log::debug;

use crate::entry::{Candidate, Entry};
use crate::score::score;
use crate::text::tokenize;

/// Minimum score for a candidate to be shown. Empirical noise floor that
/// keeps single stray characters from weakly matching everything.
pub const SCORE_THRESHOLD: f64 = 0.18;

/// Maximum number of candidates returned for one query
pub const MAX_RESULTS: usize = 8;

/// Rank `entries` against `query`.
///
/// Candidates scoring above [`SCORE_THRESHOLD`] are sorted by score
/// descending and truncated to [`MAX_RESULTS`]. The sort is stable, so
/// ties keep the original entry order and results are reproducible for
/// identical input. An empty or whitespace-only query returns an empty
/// vector without scoring anything.
pub fn find_matches(entries: &[Entry], query: &str) -> Vec<Candidate> {
    if tokenize(query).is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = entries
        .iter()
        .map(|e| Candidate {
            entry: e.clone(),
            score: score(query, e),
        })
        .filter(|c| c.score > SCORE_THRESHOLD)
        .collect();

    // Stable sort keeps document order for equal scores
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_RESULTS);

    debug!("Query {:?} matched {} candidates", query, candidates.len());

    candidates
}
