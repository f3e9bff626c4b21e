pub mod articles;
pub mod pagination;
pub mod topics;

pub use articles::ArticleDto;
pub use pagination::{Listing, OffsetPaginationDto, PaginationDto};
pub use topics::{HealthTopicDto, TopicSummaryDto};
