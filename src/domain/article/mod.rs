pub mod entity;
pub mod filter;
pub mod membership;
pub mod repository;
pub mod value_objects;

pub use entity::Article;
pub use filter::{ArticleCriteria, ArticleFilter, SortColumn, SortDirection, SortSpec, TopicScope};
pub use membership::TopicIdList;
pub use repository::ArticleReadRepository;
pub use value_objects::{ArticleId, ArticleSlug, ArticleStatus};
