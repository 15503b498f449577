use blogcraft_preview::{PassKind, PreviewClasses, PreviewOptions, PreviewRenderer, render_preview};
use pretty_assertions::assert_eq;

#[test]
fn test_bold_then_italic() {
    let html = render_preview("**bold** and *italic*");
    assert_eq!(html.as_str(), "<strong>bold</strong> and <em>italic</em>");
}

#[test]
fn test_heading_and_independent_list_items() {
    let html = render_preview("# Title\n- item1\n- item2");
    assert_eq!(
        html.as_str(),
        "<h1>Title</h1><br /><li>item1</li><br /><li>item2</li>"
    );
    assert!(!html.as_str().contains("<ul"));
    assert_eq!(html.as_str().matches("<li>").count(), 2);
}

#[test]
fn test_heading_levels_and_quote() {
    let html = render_preview("## Sub\n> quoted");
    assert_eq!(
        html.as_str(),
        "<h2>Sub</h2><br /><blockquote>quoted</blockquote>"
    );
}

#[test]
fn test_plain_text_only_gains_line_breaks() {
    let body = "just some words\nand another line\n\nend";
    let html = render_preview(body);
    assert_eq!(html.as_str(), body.replace('\n', "<br />"));
}

#[test]
fn test_malformed_markers_fall_through() {
    assert_eq!(render_preview("**unclosed").as_str(), "**unclosed");
    assert_eq!(render_preview("[no link").as_str(), "[no link");
    assert_eq!(render_preview("[text](").as_str(), "[text](");
}

#[test]
fn test_link_and_image() {
    assert_eq!(
        render_preview("see [docs](https://example.com)").as_str(),
        "see <a href=\"https://example.com\">docs</a>"
    );
    assert_eq!(
        render_preview("\n![cat.png](data:image/png;base64,AAAA)\n").as_str(),
        "<br /><img src=\"data:image/png;base64,AAAA\" alt=\"cat.png\" /><br />"
    );
}

#[test]
fn test_video_reference_renders_as_link() {
    assert_eq!(
        render_preview("[video](https://youtu.be/x)").as_str(),
        "<a href=\"https://youtu.be/x\">video</a>"
    );
}

#[test]
fn test_empty_emphasis_pairs_stay_mostly_literal() {
    // Four asterisks contain no bold content; the italic pass then pairs the first and third.
    assert_eq!(render_preview("****").as_str(), "<em>*</em>*");
    assert_eq!(render_preview("**").as_str(), "**");
}

#[test]
fn test_heading_with_link_inside() {
    assert_eq!(
        render_preview("# [text](url)").as_str(),
        "<h1><a href=\"url\">text</a></h1>"
    );
}

#[test]
fn test_raw_html_passes_through_by_default() {
    assert_eq!(
        render_preview("<b>hi</b> & bye").as_str(),
        "<b>hi</b> & bye"
    );
}

#[test]
fn test_escaping_pass_when_enabled() {
    let renderer =
        PreviewRenderer::new(PreviewOptions::default().with_escape_html(true)).unwrap();

    assert_eq!(
        renderer.render("<script>x</script> & **b**").as_str(),
        "&lt;script&gt;x&lt;/script&gt; &amp; <strong>b</strong>"
    );
    // Quote markers still work once `>` has become `&gt;`.
    assert_eq!(
        renderer.render("> said").as_str(),
        "<blockquote>said</blockquote>"
    );
}

#[test]
fn test_tailwind_classes() {
    let renderer = PreviewRenderer::new(
        PreviewOptions::default().with_classes(PreviewClasses::tailwind()),
    )
    .unwrap();

    assert_eq!(
        renderer.render("# Hello").as_str(),
        "<h1 class=\"text-4xl font-bold mt-8 mb-4\">Hello</h1>"
    );
    assert_eq!(
        renderer.render("- a").as_str(),
        "<li class=\"ml-6\">a</li>"
    );
}

#[test]
fn test_pass_order_is_fixed() {
    let renderer = PreviewRenderer::default();
    let kinds: Vec<PassKind> = renderer.passes().iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, PassKind::ORDER.to_vec());
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: PreviewOptions = serde_json::from_str(r#"{ "escape_html": true }"#).unwrap();
    assert!(options.escape_html);
    assert_eq!(options.classes, PreviewClasses::default());
}

#[test]
fn test_crlf_bodies_keep_carriage_returns_outside_elements() {
    assert_eq!(
        render_preview("# Title\r\nx").as_str(),
        "<h1>Title</h1>\r<br />x"
    );
    assert_eq!(
        render_preview("- one\r\n> two\r\n").as_str(),
        "<li>one</li>\r<br /><blockquote>two</blockquote>\r<br />"
    );
    // Emphasis does not span a carriage return.
    assert_eq!(render_preview("**a\rb**").as_str(), "**a\rb**");
}
