pub mod app;
pub mod app_state;
pub mod articles;
pub mod cache;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod inference;
pub mod summarizer;
pub mod translation;
