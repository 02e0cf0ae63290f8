/// Comment service - public comment submission
use crate::cms::{self, CmsClient};
use crate::error::{AppError, Result};
use crate::models::Comment;

/// A submitted comment, prior to creation in the store
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
}

#[derive(Clone)]
pub struct CommentService {
    client: CmsClient,
}

impl CommentService {
    pub fn new(client: CmsClient) -> Self {
        Self { client }
    }

    /// Submit a comment for moderation.
    ///
    /// Fields must be present but are otherwise treated as opaque strings;
    /// the created document is always unapproved.
    pub async fn submit(&self, new_comment: &NewComment) -> Result<Comment> {
        validate(new_comment)?;

        cms::comments::create_comment(
            &self.client,
            &new_comment.post_id,
            &new_comment.name,
            &new_comment.email,
            &new_comment.comment,
        )
        .await
    }
}

fn validate(new_comment: &NewComment) -> Result<()> {
    for (field, value) in [
        ("postId", &new_comment.post_id),
        ("name", &new_comment.name),
        ("email", &new_comment.email),
        ("comment", &new_comment.comment),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} must not be empty", field)));
        }
    }
    Ok(())
}
