// src/domain/article/membership.rs
//! Topic membership over the denormalized `articles.health_topics` column.
//!
//! A token names a topic when, trimmed, it parses as that integer. The SQL
//! filter in `infrastructure::repositories::query` encodes the same rule, so
//! `"05"` or a tab-padded `"5"` is topic 5 in listings and in counts alike.

use crate::domain::topic::TopicId;
use std::collections::{HashMap, HashSet};

/// Topic ids parsed from a comma separated field. Tokens that are not
/// integers (legacy free-text names, stray punctuation) are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIdList(Vec<TopicId>);

impl TopicIdList {
    pub fn parse(raw: &str) -> Self {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter_map(|token| token.parse::<i64>().ok())
            .map(TopicId)
            .collect();
        Self(ids)
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.0.contains(&id)
    }

    /// Whether any of `ids` is listed.
    pub fn intersects(&self, ids: &[TopicId]) -> bool {
        ids.iter().any(|id| self.contains(*id))
    }
}

/// Whether the raw field lists `token` exactly, after trimming. Used for
/// catalogs derived from legacy free-text rows.
pub fn has_token(raw: &str, token: &str) -> bool {
    raw.split(',').any(|candidate| candidate.trim() == token)
}

/// Single pass over article topic fields counting articles per requested
/// topic. Topics with no article stay at zero; an article counts once per
/// topic even when the id is repeated in its field.
pub fn count_by_topic<'a, I>(fields: I, topics: &[TopicId]) -> HashMap<TopicId, u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<TopicId, u64> = topics.iter().map(|id| (*id, 0)).collect();
    for field in fields {
        let listed = TopicIdList::parse(field);
        if !listed.intersects(topics) {
            continue;
        }
        for (id, count) in counts.iter_mut() {
            if listed.contains(*id) {
                *count += 1;
            }
        }
    }
    counts
}

/// Distinct trimmed tokens in first-seen order, ids and legacy names alike.
pub fn distinct_tokens<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for field in fields {
        for token in field.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if seen.insert(token.to_string()) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}
