/// Document store access layer
///
/// This module provides:
/// - `client`: low-level query/mutation client for the hosted store API
/// - `posts`: typed post queries (listing, by-slug, slug enumeration)
/// - `comments`: comment creation mutations
pub mod client;
pub mod comments;
pub mod posts;

pub use client::CmsClient;
