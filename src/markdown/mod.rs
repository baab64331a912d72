use pulldown_cmark::{html, Options, Parser};

/// Renders Markdown to an HTML fragment. Inline HTML is passed through as-is.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
