/// Post service - read operations against the document store
use crate::cms::{self, CmsClient};
use crate::error::{AppError, Result};
use crate::models::{Post, PostSummary};

#[derive(Clone)]
pub struct PostService {
    client: CmsClient,
}

impl PostService {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// List all posts in the order the store returns them
    pub async fn list(&self) -> Result<Vec<PostSummary>> {
        cms::posts::list_posts(&self.client).await
    }

    /// Get a post by slug, with body and approved comments
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        cms::posts::get_post_by_slug(&self.client, slug).await
    }

    /// Get a post by slug, failing with `NotFound` for page handlers
    pub async fn require_by_slug(&self, slug: &str) -> Result<Post> {
        self.get_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("no post with slug '{}'", slug)))
    }

    /// Slugs of all posts, for precomputing which pages exist
    pub async fn slugs(&self) -> Result<Vec<String>> {
        cms::posts::list_slugs(&self.client).await
    }
}
