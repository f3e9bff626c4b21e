// src/domain/lookup.rs

/// True for a non-empty string made only of ASCII digits.
pub fn is_numeric_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Path segment addressing an entity either by numeric id or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    Id(i64),
    Slug(String),
}

impl EntityKey {
    /// All-digit segments are ids. Digits that overflow `i64` can never match
    /// a row, so they are kept as a slug and simply miss.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if is_numeric_token(raw) {
            if let Ok(id) = raw.parse::<i64>() {
                return Self::Id(id);
            }
        }
        Self::Slug(raw.to_string())
    }
}
