use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lookup::is_numeric_token;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicId(pub i64);

impl TopicId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("topic id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TopicId> for i64 {
    fn from(value: TopicId) -> Self {
        value.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A topic reference as supplied by a client: already an id, or a name/slug
/// that still has to be looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicSelector {
    Id(TopicId),
    Name(String),
}

impl TopicSelector {
    /// Returns `None` for blank tokens and for numeric tokens that cannot be a
    /// valid id (zero or out of range).
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        if is_numeric_token(token) {
            return token
                .parse::<i64>()
                .ok()
                .and_then(|id| TopicId::new(id).ok())
                .map(Self::Id);
        }
        Some(Self::Name(token.to_string()))
    }

    /// Splits a comma separated list, skipping blanks.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',').filter_map(Self::parse).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_token_is_an_id() {
        assert_eq!(
            TopicSelector::parse("42"),
            Some(TopicSelector::Id(TopicId(42)))
        );
    }

    #[test]
    fn text_token_is_a_name() {
        assert_eq!(
            TopicSelector::parse(" Sleep "),
            Some(TopicSelector::Name("Sleep".into()))
        );
    }

    #[test]
    fn zero_and_blank_are_dropped() {
        assert_eq!(TopicSelector::parse("0"), None);
        assert_eq!(TopicSelector::parse("   "), None);
    }

    #[test]
    fn mixed_list() {
        let parsed = TopicSelector::parse_list("5, sleep,,12");
        assert_eq!(
            parsed,
            vec![
                TopicSelector::Id(TopicId(5)),
                TopicSelector::Name("sleep".into()),
                TopicSelector::Id(TopicId(12)),
            ]
        );
    }
}
