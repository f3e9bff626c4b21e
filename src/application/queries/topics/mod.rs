mod catalog;
mod get;
mod list;
mod service;

pub use catalog::TopicCatalogQuery;
pub use get::GetHealthTopicQuery;
pub use list::ListHealthTopicsQuery;
pub use service::HealthTopicQueryService;
