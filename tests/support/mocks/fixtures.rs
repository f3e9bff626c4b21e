// tests/support/mocks/fixtures.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use medinlife_api::domain::article::{Article, ArticleId, ArticleSlug, ArticleStatus};
use medinlife_api::domain::topic::{HealthTopic, TopicId};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

/// Approved article created `id` days after `fixed_now`, so ids sort the
/// same way as creation time.
pub fn article(id: i64, title: &str, topics: Option<&str>) -> Article {
    let created_at = fixed_now() + Duration::days(id);
    Article {
        id: ArticleId(id),
        writer_id: Some(7),
        title: title.to_string(),
        slug: ArticleSlug::new(slug::slugify(title)).unwrap(),
        short_description: Some(format!("Summary of {title}")),
        description: Some(format!("<p>{title}</p>")),
        health_topics: topics.map(ToString::to_string),
        article_ratings: Some(format!("{}.0", id % 5)),
        status: ArticleStatus::Approved,
        image: None,
        approval_date: Some(created_at),
        created_at,
        updated_at: created_at,
    }
}

pub fn topic(id: i64, title: &str) -> HealthTopic {
    HealthTopic {
        id: TopicId(id),
        title: title.to_string(),
        slug: slug::slugify(title),
        body: Some(format!("All about {title}")),
        image: None,
        status: Some(1),
        is_major_health_event: false,
        created_by: Some(1),
        updated_by: None,
        created_at: fixed_now() + Duration::hours(id),
        updated_at: fixed_now() + Duration::hours(id),
    }
}
