// src/infrastructure/repositories/query.rs
//! SQL assembly for article listings. Client values are always bound; the only
//! text spliced into the statement comes from fixed allow-listed identifiers.

use crate::domain::article::{ArticleCriteria, SortSpec, TopicScope};
use crate::domain::pagination::PageRequest;
use crate::domain::topic::TopicId;
use sqlx::{MySql, QueryBuilder};

pub const ARTICLE_COLUMNS: &str = "id, writer_id, title, slug, short_description, description, \
     health_topics, article_ratings, status, image, approval_date, created_at, updated_at";

/// Regular expression for one exact comma separated token equal to `id`.
/// Surrounding whitespace, a leading `+` and leading zeros are allowed, the
/// same tokens `TopicIdList::parse` reads as that integer.
pub fn topic_token_pattern(id: TopicId) -> String {
    format!("(^|,)[[:space:]]*[+]?0*{}[[:space:]]*(,|$)", id.0)
}

/// Escapes LIKE wildcards and wraps the lower-cased term for a substring match.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn apply_conditions(builder: &mut QueryBuilder<'static, MySql>, criteria: &ArticleCriteria) {
    builder.push(" WHERE status = ");
    builder.push_bind(criteria.status.code());

    if let Some(term) = criteria.search.as_deref() {
        let pattern = like_pattern(term);
        builder.push(" AND (LOWER(title) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR LOWER(short_description) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR LOWER(description) LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    match &criteria.topics {
        TopicScope::All => {}
        TopicScope::AnyOf(ids) => {
            builder.push(" AND (");
            for (index, id) in ids.iter().enumerate() {
                if index > 0 {
                    builder.push(" OR ");
                }
                builder.push("health_topics REGEXP ");
                builder.push_bind(topic_token_pattern(*id));
            }
            builder.push(")");
        }
        TopicScope::Unmatched => {
            builder.push(" AND 1 = 0");
        }
    }
}

fn apply_ordering(builder: &mut QueryBuilder<'static, MySql>, sort: SortSpec) {
    let direction = sort.direction.keyword();
    builder.push(format!(
        " ORDER BY {} {direction}, id {direction}",
        sort.column.column()
    ));
}

fn apply_pagination(builder: &mut QueryBuilder<'static, MySql>, page: PageRequest) {
    builder.push(" LIMIT ");
    builder.push_bind(page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
}

/// The page query: filters, ordering and `LIMIT ? OFFSET ?`.
pub fn select_page(criteria: &ArticleCriteria) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
    apply_conditions(&mut builder, criteria);
    apply_ordering(&mut builder, criteria.sort);
    apply_pagination(&mut builder, criteria.page);
    builder
}

/// Total matching rows, with exactly the WHERE clause of `select_page`.
pub fn count_matching(criteria: &ArticleCriteria) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles");
    apply_conditions(&mut builder, criteria);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleStatus, SortColumn, SortDirection};

    fn criteria(search: Option<&str>, topics: TopicScope) -> ArticleCriteria {
        ArticleCriteria {
            status: ArticleStatus::Approved,
            search: search.map(ToString::to_string),
            topics,
            sort: SortSpec::default(),
            page: PageRequest::new(2, 2).unwrap(),
        }
    }

    fn where_clause(sql: &str) -> &str {
        let start = sql.find(" WHERE ").unwrap();
        let end = sql.find(" ORDER BY ").unwrap_or(sql.len());
        &sql[start..end]
    }

    #[test]
    fn status_only() {
        let built = select_page(&criteria(None, TopicScope::All));
        assert_eq!(
            built.sql(),
            format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles WHERE status = ? \
                 ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
            )
        );
    }

    #[test]
    fn search_covers_three_columns() {
        let built = select_page(&criteria(Some("Sleep"), TopicScope::All));
        assert!(built.sql().contains(
            " AND (LOWER(title) LIKE ? OR LOWER(short_description) LIKE ? OR LOWER(description) LIKE ?)"
        ));
    }

    #[test]
    fn topics_are_ored_with_exact_token_matching() {
        let scope = TopicScope::AnyOf(vec![TopicId(5), TopicId(10)]);
        let built = select_page(&criteria(None, scope));
        let sql = built.sql();
        assert!(sql.contains(" AND (health_topics REGEXP ? OR health_topics REGEXP ?)"));
        assert!(!sql.contains("health_topics LIKE"));
    }

    #[test]
    fn token_pattern_anchors_on_commas() {
        assert_eq!(
            topic_token_pattern(TopicId(5)),
            "(^|,)[[:space:]]*[+]?0*5[[:space:]]*(,|$)"
        );
    }

    #[test]
    fn unmatched_topics_match_nothing() {
        let built = count_matching(&criteria(None, TopicScope::Unmatched));
        assert_eq!(
            built.sql(),
            "SELECT COUNT(*) FROM articles WHERE status = ? AND 1 = 0"
        );
    }

    #[test]
    fn count_reuses_the_where_clause() {
        let c = criteria(
            Some("diet"),
            TopicScope::AnyOf(vec![TopicId(3)]),
        );
        let page = select_page(&c);
        let count = count_matching(&c);
        assert_eq!(where_clause(page.sql()), where_clause(count.sql()));
        assert!(!count.sql().contains("LIMIT"));
    }

    #[test]
    fn ordering_uses_allow_listed_column() {
        let mut c = criteria(None, TopicScope::All);
        c.sort = SortSpec {
            column: SortColumn::Rating,
            direction: SortDirection::Asc,
        };
        assert!(select_page(&c)
            .sql()
            .contains(" ORDER BY article_ratings ASC, id ASC LIMIT ? OFFSET ?"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Vitamin"), "%vitamin%");
        assert_eq!(like_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
