// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod debug;
pub mod health_topics;
pub mod topics;
