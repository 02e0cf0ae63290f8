use serde_json::json;

use crate::cms::CmsClient;
use crate::error::{AppError, Result};
use crate::models::Comment;

/// Create a new comment document referencing `post_id`.
///
/// The comment is always written with `approved: false`; visibility is
/// granted out-of-band by a moderator in the CMS. The name, email, and
/// comment fields are opaque strings as far as the store is concerned.
pub async fn create_comment(
    client: &CmsClient,
    post_id: &str,
    name: &str,
    email: &str,
    comment: &str,
) -> Result<Comment> {
    let mutation = json!({
        "create": {
            "_type": "comment",
            "post": {
                "_type": "reference",
                "_ref": post_id,
            },
            "name": name,
            "email": email,
            "comment": comment,
            "approved": false,
        }
    });

    let response = client.mutate(vec![mutation]).await?;

    let document = response
        .results
        .into_iter()
        .next()
        .and_then(|r| r.document)
        .ok_or_else(|| {
            AppError::Cms("mutation response contained no created document".to_string())
        })?;

    serde_json::from_value(document)
        .map_err(|e| AppError::Cms(format!("created comment decode failed: {}", e)))
}
