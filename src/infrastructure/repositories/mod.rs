// src/infrastructure/repositories/mod.rs
mod error;
mod mysql_article;
mod mysql_topic;
pub mod query;

pub(crate) use error::map_sqlx;
pub use mysql_article::MySqlArticleReadRepository;
pub use mysql_topic::MySqlHealthTopicReadRepository;
