/// HTTP handlers for blog endpoints
///
/// This module contains handlers for:
/// - Pages: home listing and post-by-slug page payloads
/// - Comments: the public comment submission endpoint
pub mod comments;
pub mod pages;

// Re-export handler functions at module level
pub use comments::submit_comment;
pub use pages::{home, list_slugs, post_page};
