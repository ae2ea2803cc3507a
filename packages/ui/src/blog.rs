//! Markdown rendering for blog post bodies.

use pulldown_cmark::{html, Options, Parser};

/// How many posts the home page teaser shows.
pub const HOME_TEASER_POSTS: usize = 3;

/// Render a Markdown post body to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_lists() {
        let html = render_markdown("Intro.\n\n## O que avaliar\n\n- Onde procurar cuidadores\n");
        assert!(html.contains("<p>Intro.</p>"));
        assert!(html.contains("<h2>O que avaliar</h2>"));
        assert!(html.contains("<li>Onde procurar cuidadores</li>"));
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(render_markdown(""), "");
    }
}
