/// Pluggable renderers for rich-content post bodies
///
/// A post body is a list of typed blocks. Which HTML a block becomes is
/// looked up in a [`RendererRegistry`] keyed by the block's style (or its
/// `_type` for non-text blocks), so callers can swap individual renderers
/// without touching dispatch. Layout and styling fidelity is owned by the
/// UI layer; these produce plain fragments.
use std::collections::HashMap;

use crate::models::Block;

/// Renders one block to an HTML fragment
pub trait BlockRenderer: Send + Sync {
    fn render(&self, block: &Block) -> String;
}

impl<F> BlockRenderer for F
where
    F: Fn(&Block) -> String + Send + Sync,
{
    fn render(&self, block: &Block) -> String {
        self(block)
    }
}

/// Block renderer dispatch table
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn BlockRenderer>>,
    fallback: Box<dyn BlockRenderer>,
}

impl RendererRegistry {
    /// Registry with the stock renderer set: paragraphs, `h1`-`h3`
    /// headings, blockquotes, and list items
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            renderers: HashMap::new(),
            fallback: Box::new(|block: &Block| element("p", block)),
        };

        registry.register("normal", |block: &Block| element("p", block));
        registry.register("h1", |block: &Block| element("h1", block));
        registry.register("h2", |block: &Block| element("h2", block));
        registry.register("h3", |block: &Block| element("h3", block));
        registry.register("blockquote", |block: &Block| element("blockquote", block));

        registry
    }

    /// Register or replace the renderer for a style/type key
    pub fn register<R>(&mut self, key: &str, renderer: R)
    where
        R: BlockRenderer + 'static,
    {
        self.renderers.insert(key.to_string(), Box::new(renderer));
    }

    /// Render a single block, falling back to the paragraph renderer for
    /// unknown styles
    pub fn render_block(&self, block: &Block) -> String {
        if block.list_item.is_some() {
            return format!("<li>{}</li>", render_children(block));
        }

        let key = block
            .style
            .as_deref()
            .unwrap_or(block.kind.as_str())
            .to_string();

        match self.renderers.get(&key) {
            Some(renderer) => renderer.render(block),
            None => self.fallback.render(block),
        }
    }

    /// Render a whole body to concatenated fragments
    pub fn render_body(&self, blocks: &[Block]) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn element(tag: &str, block: &Block) -> String {
    format!("<{tag}>{}</{tag}>", render_children(block))
}

/// Render the inline spans of a block, applying marks
fn render_children(block: &Block) -> String {
    block
        .children
        .iter()
        .map(|span| {
            let mut html = escape_html(&span.text);
            for mark in &span.marks {
                html = apply_mark(block, mark, html);
            }
            html
        })
        .collect()
}

fn apply_mark(block: &Block, mark: &str, inner: String) -> String {
    match mark {
        "strong" => format!("<strong>{}</strong>", inner),
        "em" => format!("<em>{}</em>", inner),
        "code" => format!("<code>{}</code>", inner),
        // Other marks are keys into the block's mark definitions
        _ => match block.mark_defs.iter().find(|def| def.key == mark) {
            Some(def) if def.kind == "link" => {
                let href = def.href.as_deref().unwrap_or("#");
                format!(r#"<a href="{}">{}</a>"#, escape_html(href), inner)
            }
            _ => inner,
        },
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MarkDef, Span};

    fn block(style: Option<&str>, text: &str) -> Block {
        Block {
            kind: "block".to_string(),
            style: style.map(|s| s.to_string()),
            list_item: None,
            children: vec![Span {
                kind: "span".to_string(),
                text: text.to_string(),
                marks: vec![],
            }],
            mark_defs: vec![],
        }
    }

    #[test]
    fn renders_headings_and_paragraphs() {
        let registry = RendererRegistry::with_defaults();
        assert_eq!(registry.render_block(&block(Some("h1"), "Title")), "<h1>Title</h1>");
        assert_eq!(registry.render_block(&block(Some("normal"), "Body")), "<p>Body</p>");
    }

    #[test]
    fn unknown_style_falls_back_to_paragraph() {
        let registry = RendererRegistry::with_defaults();
        assert_eq!(registry.render_block(&block(Some("h7"), "x")), "<p>x</p>");
    }

    #[test]
    fn list_items_render_as_li() {
        let registry = RendererRegistry::with_defaults();
        let mut b = block(Some("normal"), "item");
        b.list_item = Some("bullet".to_string());
        assert_eq!(registry.render_block(&b), "<li>item</li>");
    }

    #[test]
    fn link_marks_resolve_through_mark_defs() {
        let registry = RendererRegistry::with_defaults();
        let mut b = block(Some("normal"), "here");
        b.children[0].marks = vec!["l1".to_string()];
        b.mark_defs = vec![MarkDef {
            key: "l1".to_string(),
            kind: "link".to_string(),
            href: Some("https://example.com".to_string()),
        }];
        assert_eq!(
            registry.render_block(&b),
            r#"<p><a href="https://example.com">here</a></p>"#
        );
    }

    #[test]
    fn text_is_html_escaped() {
        let registry = RendererRegistry::with_defaults();
        assert_eq!(
            registry.render_block(&block(Some("normal"), "a <b> & c")),
            "<p>a &lt;b&gt; &amp; c</p>"
        );
    }

    #[test]
    fn custom_renderers_replace_defaults() {
        let mut registry = RendererRegistry::with_defaults();
        registry.register("h1", |block: &Block| {
            format!("<h1 class=\"post-title\">{}</h1>", render_children(block))
        });
        assert_eq!(
            registry.render_block(&block(Some("h1"), "T")),
            "<h1 class=\"post-title\">T</h1>"
        );
    }
}
