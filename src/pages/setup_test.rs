use super::*;

#[test]
fn render_markdown_html_renders_headings_and_lists() {
    let rendered = render_markdown_html("## Requirements\n\n- docker\n- terraform\n");
    assert!(rendered.contains("<h2>Requirements</h2>"));
    assert!(rendered.contains("<li>docker</li>"));
}

#[test]
fn render_markdown_html_renders_code_blocks() {
    let rendered = render_markdown_html("```\ndocker compose up\n```\n");
    assert!(rendered.contains("<pre><code>docker compose up"));
}

#[test]
fn render_markdown_html_strips_raw_html() {
    let rendered = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!rendered.contains("<script>"));
    assert!(rendered.contains("before"));
}
