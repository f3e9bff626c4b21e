mod filter;
mod get;
mod list;
mod service;

pub use filter::ListArticlesQuery;
pub use get::GetArticleQuery;
pub use service::ArticleQueryService;
