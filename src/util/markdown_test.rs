use super::*;

// =============================================================
// Basic rendering
// =============================================================

#[test]
fn renders_paragraph_and_emphasis() {
    let out = render_markdown_html("I built **6** projects");
    assert!(out.contains("<p>"));
    assert!(out.contains("<strong>6</strong>"));
}

#[test]
fn renders_lists() {
    let out = render_markdown_html("- inspireAI\n- TimeForge\n");
    assert!(out.contains("<ul>"));
    assert!(out.contains("<li>inspireAI</li>"));
}

// =============================================================
// Link rewriting
// =============================================================

#[test]
fn links_open_in_new_tab_with_marker() {
    let out = render_markdown_html("[my repos](https://github.com/sarrabousnina)");
    assert!(out.contains(r#"href="https://github.com/sarrabousnina""#));
    assert!(out.contains(r#"target="_blank""#));
    assert!(out.contains(r#"rel="noopener noreferrer""#));
    assert!(out.contains("🔗 my repos</a>"));
}

#[test]
fn link_title_is_preserved() {
    let out = render_markdown_html(r#"[repo](https://example.com "the title")"#);
    assert!(out.contains(r#"title="the title""#));
}

#[test]
fn bare_link_falls_back_to_display_text() {
    let out = render_markdown_html("[just text]()");
    assert!(!out.contains("<a"));
    assert!(out.contains("just text"));
}

#[test]
fn attribute_values_are_escaped() {
    let out = render_markdown_html(r#"[x](https://example.com/?a=1&b="2")"#);
    assert!(out.contains("&amp;"));
    assert!(!out.contains(r#"b="2""#));
}

// =============================================================
// Sanitization
// =============================================================

#[test]
fn raw_block_html_is_dropped() {
    let out = render_markdown_html("<script>alert(1)</script>\n\nhello");
    assert!(!out.contains("<script>"));
    assert!(out.contains("hello"));
}

#[test]
fn raw_inline_html_is_dropped() {
    let out = render_markdown_html("hello <img src=x onerror=alert(1)> world");
    assert!(!out.contains("<img"));
    assert!(out.contains("hello"));
    assert!(out.contains("world"));
}
