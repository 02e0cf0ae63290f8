/// Business logic layer for blog-service
///
/// This module provides high-level operations:
/// - Post service: listing, by-slug retrieval, slug enumeration
/// - Comment service: public comment submission
pub mod comments;
pub mod posts;

// Re-export commonly used services
pub use comments::{CommentService, NewComment};
pub use posts::PostService;
