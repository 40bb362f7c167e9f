pub mod app;
mod api;
mod components;
mod pages;
mod types;

pub use api::{detail_message, ApiClient, DEFAULT_API_BASE};
pub use types::{format_created_at, Announcement, Content};
