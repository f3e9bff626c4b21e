// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod fixtures;
pub mod topic_repos;

pub use article_repos::{FailingArticleRead, InMemoryArticleRead};
pub use fixtures::{article, fixed_now, topic};
pub use topic_repos::{FailingTopicRead, InMemoryTopicRead};
