pub mod article;
pub mod errors;
pub mod lookup;
pub mod pagination;
pub mod topic;
