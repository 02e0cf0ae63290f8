// Domain models for blog-service
//
// These mirror the document store's wire shapes: documents carry `_id` and
// `_type`, slugs are wrapped objects, and cross-document links are
// `{_type: "reference", _ref}` objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A link to another document or asset in the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub r#ref: String,
    #[serde(rename = "_type", default = "reference_type")]
    pub kind: String,
}

fn reference_type() -> String {
    "reference".to_string()
}

impl Reference {
    pub fn to_document(id: &str) -> Self {
        Self {
            r#ref: id.to_string(),
            kind: reference_type(),
        }
    }
}

/// URL-safe unique identifier for a post, wrapped per the store's slug shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slug {
    pub current: String,
}

/// An image field: a reference into the store's asset pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub asset: Reference,
}

/// Post author, dereferenced into the post projection at query time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub image: Option<Image>,
}

/// Listing projection of a post, without body or comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub slug: Slug,
    #[serde(rename = "mainImage")]
    pub main_image: Option<Image>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<Author>,
}

/// Full post, including rich-content body and approved comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub slug: Slug,
    #[serde(rename = "mainImage")]
    pub main_image: Option<Image>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    pub author: Option<Author>,
    #[serde(default)]
    pub body: Vec<Block>,
    /// Approved comments, joined in by the by-slug query
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Reader comment on a post
///
/// Created by the public submission form with `approved: false`; a human
/// operator flips the flag in the CMS before the comment becomes visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub post: Reference,
    pub name: String,
    pub email: String,
    pub comment: String,
    #[serde(default)]
    pub approved: bool,
}

/// One rich-content block from a post body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(rename = "listItem", default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(rename = "markDefs", default)]
    pub mark_defs: Vec<MarkDef>,
}

/// Inline text run within a block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

/// Mark definition referenced by span marks (links, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

/// Maximum description length shown on post cards, in characters.
///
/// The reference behavior compared against 30 but sliced to 60; we pin the
/// threshold to 30 on both sides.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 30;

/// Shorten a post description for listing cards.
///
/// Input up to [`DESCRIPTION_PREVIEW_CHARS`] characters is returned
/// unchanged; longer input is cut at that many characters and suffixed with
/// `...`. Counts characters, not bytes, so multibyte text never splits.
pub fn truncate_description(description: &str) -> String {
    let mut chars = description.char_indices();
    match chars.nth(DESCRIPTION_PREVIEW_CHARS) {
        None => description.to_string(),
        Some((idx, _)) => format!("{}...", &description[..idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncate_keeps_short_descriptions() {
        assert_eq!(truncate_description(""), "");
        assert_eq!(truncate_description("short"), "short");
        let exactly_30 = "a".repeat(30);
        assert_eq!(truncate_description(&exactly_30), exactly_30);
    }

    #[test]
    fn truncate_cuts_long_descriptions_at_threshold() {
        let long = "a".repeat(31);
        let out = truncate_description(&long);
        assert_eq!(out, format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let long = "é".repeat(40);
        let out = truncate_description(&long);
        assert_eq!(out, format!("{}...", "é".repeat(30)));
    }

    #[test]
    fn post_deserializes_from_store_shape() {
        let post: Post = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Hello",
            "description": "First post",
            "slug": {"_type": "slug", "current": "hello"},
            "mainImage": {"asset": {"_type": "reference", "_ref": "image-abc"}},
            "publishedAt": "2023-05-01T12:00:00Z",
            "author": {"name": "Ada", "image": null},
            "body": [
                {"_type": "block", "style": "normal", "children": [
                    {"_type": "span", "text": "hi", "marks": []}
                ], "markDefs": []}
            ],
            "comments": [
                {"_id": "c1", "post": {"_type": "reference", "_ref": "p1"},
                 "name": "A", "email": "a@x.com", "comment": "hi", "approved": true}
            ]
        }))
        .unwrap();

        assert_eq!(post.slug.current, "hello");
        assert_eq!(post.comments.len(), 1);
        assert!(post.comments[0].approved);
        assert_eq!(post.body[0].children[0].text, "hi");
    }

    #[test]
    fn comment_approved_defaults_to_false() {
        let comment: Comment = serde_json::from_value(json!({
            "_id": "c2",
            "post": {"_ref": "p1"},
            "name": "B",
            "email": "b@x.com",
            "comment": "pending"
        }))
        .unwrap();

        assert!(!comment.approved);
        assert_eq!(comment.post.kind, "reference");
    }
}
