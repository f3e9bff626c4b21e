pub mod database;
pub mod fallback;
pub mod repositories;
