pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{HealthTopic, HealthTopicFilter};
pub use repository::{FallbackTopicSource, HealthTopicReadRepository};
pub use services::TopicIdentifierService;
pub use value_objects::{TopicId, TopicSelector};
