use blogcraft_core::{
    BlockPrefix, EMOJI_PALETTE, Emphasis, Format, LINK_PLACEHOLDER, Selection, apply_format,
    insert_at_cursor, insert_emoji, insert_image_reference, insert_video_reference,
    prefix_selection, wrap_as_link, wrap_selection,
};
use pretty_assertions::assert_eq;

#[test]
fn test_wrap_selection_bold_and_italic() {
    assert_eq!(
        wrap_selection("hello world", Selection::new(6, 11), Emphasis::Bold),
        "hello **world**"
    );
    assert_eq!(
        wrap_selection("hello world", Selection::new(0, 5), Emphasis::Italic),
        "*hello* world"
    );
}

#[test]
fn test_collapsed_selection_produces_empty_markers() {
    assert_eq!(
        wrap_selection("ab", Selection::caret(1), Emphasis::Bold),
        "a****b"
    );
    assert_eq!(prefix_selection("", Selection::caret(0), BlockPrefix::H1), "# ");
    assert_eq!(wrap_as_link("", Selection::caret(0)), "[](url)");
}

#[test]
fn test_prefix_selection_kinds() {
    let body = "intro text";
    let sel = Selection::new(6, 10);
    assert_eq!(prefix_selection(body, sel, BlockPrefix::H1), "intro # text");
    assert_eq!(prefix_selection(body, sel, BlockPrefix::H2), "intro ## text");
    assert_eq!(prefix_selection(body, sel, BlockPrefix::List), "intro \n- text");
    assert_eq!(prefix_selection(body, sel, BlockPrefix::Quote), "intro \n> text");
}

#[test]
fn test_link_uses_literal_placeholder() {
    assert_eq!(LINK_PLACEHOLDER, "url");
    assert_eq!(
        wrap_as_link("read the docs", Selection::new(9, 13)),
        "read the [docs](url)"
    );
}

#[test]
fn test_apply_format_dispatches_like_the_dedicated_functions() {
    let body = "one two three";
    let sel = Selection::new(4, 7);

    assert_eq!(
        apply_format(body, sel, Format::Bold),
        wrap_selection(body, sel, Emphasis::Bold)
    );
    assert_eq!(
        apply_format(body, sel, Format::Quote),
        prefix_selection(body, sel, BlockPrefix::Quote)
    );
    assert_eq!(apply_format(body, sel, Format::Link), wrap_as_link(body, sel));
}

#[test]
fn test_apply_with_caret_reports_offset_after_markup() {
    let edit = Format::Bold.apply_with_caret("hello world", Selection::new(6, 11));
    assert_eq!(edit.text, "hello **world**");
    assert_eq!(edit.caret, 15);

    let edit = Format::Link.apply_with_caret("x", Selection::caret(1));
    assert_eq!(edit.text, "x[](url)");
    assert_eq!(edit.caret, 8);
}

#[test]
fn test_insertions_at_caret() {
    assert_eq!(insert_at_cursor("ac", 1, "b"), "abc");
    assert_eq!(
        insert_image_reference("ab", 1, "cat.png", "data:image/png;base64,AA"),
        "a\n![cat.png](data:image/png;base64,AA)\nb"
    );
    assert_eq!(
        insert_video_reference("", 0, "https://youtu.be/abc"),
        "\n[video](https://youtu.be/abc)\n"
    );
}

#[test]
fn test_malformed_uri_is_kept_verbatim() {
    assert_eq!(
        insert_video_reference("", 0, "not a url )("),
        "\n[video](not a url )()\n"
    );
}

#[test]
fn test_offsets_are_characters_not_bytes() {
    // Both "é" and the emoji are multi-byte.
    let body = "café 👍 time";
    assert_eq!(
        wrap_selection(body, Selection::new(5, 6), Emphasis::Italic),
        "café *👍* time"
    );
    assert_eq!(insert_emoji("日本", 1, EMOJI_PALETTE[0]), "日😊本");
}

#[test]
fn test_out_of_range_and_reversed_selections_are_repaired() {
    assert_eq!(
        wrap_selection("abc", Selection::new(1, 99), Emphasis::Bold),
        "a**bc**"
    );
    assert_eq!(
        wrap_selection("abc", Selection::new(2, 0), Emphasis::Bold),
        "**ab**c"
    );
    assert_eq!(insert_at_cursor("abc", 10, "!"), "abc!");
}

#[test]
fn test_emoji_palette() {
    assert_eq!(EMOJI_PALETTE.len(), 15);
    assert!(EMOJI_PALETTE.contains(&"🚀"));
}

#[test]
fn test_browser_selection_offsets_convert_to_chars() {
    // The emoji is two UTF-16 units but one char.
    let body = "👍 great post";
    let selection = Selection::from_utf16(body, 3, 8);
    assert_eq!(selection, Selection::new(2, 7));
    assert_eq!(
        wrap_selection(body, selection, Emphasis::Bold),
        "👍 **great** post"
    );
    assert_eq!(selection.to_utf16(body), (3, 8));
}
