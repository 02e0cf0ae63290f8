/// Blog Service Library
///
/// Server-rendered blog front end backed by a hosted headless document store.
/// Posts and authors are authored externally in the CMS; this service reads
/// them, assembles page payloads, and accepts public comment submissions
/// which it writes back as unapproved documents pending moderation.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for pages and the comment API
/// - `models`: Data structures for posts, authors, comments, rich-content blocks
/// - `services`: Business logic layer
/// - `cms`: Document store access layer (query + mutation client)
/// - `render`: Pluggable rich-content block renderers
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod cms;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
