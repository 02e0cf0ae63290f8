/// Comment handlers - HTTP endpoint for comment submission
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::Result;
use crate::services::{CommentService, NewComment};

/// Request body for submitting a comment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCommentRequest {
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
}

/// Create a new unapproved comment on a post.
///
/// On failure the client gets the error response and may simply resubmit;
/// nothing is persisted locally.
pub async fn submit_comment(
    comments: web::Data<CommentService>,
    req: web::Json<SubmitCommentRequest>,
) -> Result<HttpResponse> {
    let created = comments
        .submit(&NewComment {
            post_id: req.post_id.clone(),
            name: req.name.clone(),
            email: req.email.clone(),
            comment: req.comment.clone(),
        })
        .await?;

    Ok(HttpResponse::Created().json(created))
}
