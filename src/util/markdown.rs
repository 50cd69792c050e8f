//! Markdown rendering for assistant replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assistant text is untrusted model output. Raw inline/block HTML
//! events are dropped before rendering, so only markup produced by the
//! renderer itself reaches the DOM. Links are rewritten to open in a
//! new browsing context with non-opener/non-referrer attributes and a
//! fixed 🔗 marker; a link without a URL degrades to its display text.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

/// Render one message's markdown to display-ready HTML.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut bare_link = false;
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        // Safety: drop raw HTML from model output before rendering.
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { dest_url, title, .. }) => {
            if dest_url.is_empty() {
                bare_link = true;
                return None;
            }
            let anchor = format!(
                "<a href=\"{}\" title=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">🔗 ",
                escape_attribute(&dest_url),
                escape_attribute(&title),
            );
            Some(Event::Html(anchor.into()))
        }
        Event::End(TagEnd::Link) => {
            if bare_link {
                bare_link = false;
                return None;
            }
            Some(Event::Html("</a>".into()))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Escape a string for use inside a double-quoted HTML attribute.
fn escape_attribute(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
