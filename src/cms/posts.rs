use serde_json::json;

use crate::cms::CmsClient;
use crate::error::Result;
use crate::models::{Post, PostSummary};

/// Listing projection: every post document with its author dereferenced.
/// No ordering is imposed; store order is accepted as-is.
const LIST_POSTS_QUERY: &str = r#"*[_type == "post"]{
  _id,
  title,
  description,
  slug,
  mainImage,
  publishedAt,
  author -> { name, image }
}"#;

/// Full post by exact slug match, including body and the reference-back
/// join that pulls in approved comments only.
const POST_BY_SLUG_QUERY: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  title,
  description,
  slug,
  mainImage,
  publishedAt,
  body,
  author -> { name, image },
  "comments": *[_type == "comment" && post._ref == ^._id && approved == true]
}"#;

/// Slug strings for every post, used to precompute which pages exist
const SLUGS_QUERY: &str = r#"*[_type == "post"].slug.current"#;

/// Fetch all posts in listing form
pub async fn list_posts(client: &CmsClient) -> Result<Vec<PostSummary>> {
    client.query(LIST_POSTS_QUERY, &[]).await
}

/// Fetch a single post by slug; `None` when no document matches
pub async fn get_post_by_slug(client: &CmsClient, slug: &str) -> Result<Option<Post>> {
    client
        .query(POST_BY_SLUG_QUERY, &[("slug", json!(slug))])
        .await
}

/// Fetch the slugs of all posts
pub async fn list_slugs(client: &CmsClient) -> Result<Vec<String>> {
    client.query(SLUGS_QUERY, &[]).await
}
