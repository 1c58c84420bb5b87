//! Markdown rendering for assistant replies

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Render Markdown to HTML. Raw HTML in the source is emitted as escaped text
/// and `javascript:`/`data:` link targets are dropped.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_unsafe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn is_unsafe_url(url: &str) -> bool {
    let scheme = url.trim_start().to_ascii_lowercase();
    scheme.starts_with("javascript:") || scheme.starts_with("data:") || scheme.starts_with("vbscript:")
}
