/// Page assembly handlers
///
/// Each route gathers the store queries its page needs and hands the result
/// to the UI layer as a JSON payload; visual rendering is owned by the UI.
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::Result;
use crate::models::{truncate_description, Post, PostSummary};
use crate::render::RendererRegistry;
use crate::services::PostService;

/// Home page payload: every post in card form
#[derive(Serialize)]
pub struct HomePage {
    pub posts: Vec<PostSummary>,
}

/// Post page payload: the full post plus its body rendered to HTML
/// fragments by the pluggable block renderers
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub post: Post,
    pub body_html: String,
}

/// Home page: all posts, descriptions truncated for card display
pub async fn home(posts: web::Data<PostService>) -> Result<HttpResponse> {
    let mut summaries = posts.list().await?;
    for summary in &mut summaries {
        if let Some(description) = &summary.description {
            summary.description = Some(truncate_description(description));
        }
    }

    Ok(HttpResponse::Ok().json(HomePage { posts: summaries }))
}

/// Post page: full post with approved comments; 404 for unknown slugs
pub async fn post_page(
    posts: web::Data<PostService>,
    registry: web::Data<RendererRegistry>,
    slug: web::Path<String>,
) -> Result<HttpResponse> {
    let post = posts.require_by_slug(&slug).await?;
    let body_html = registry.render_body(&post.body);

    Ok(HttpResponse::Ok().json(PostPage { post, body_html }))
}

/// All post slugs, for precomputing which post pages exist
pub async fn list_slugs(posts: web::Data<PostService>) -> Result<HttpResponse> {
    let slugs = posts.slugs().await?;
    Ok(HttpResponse::Ok().json(slugs))
}
