use super::unescape;

#[test]
fn test_known_escapes() {
    assert_eq!(unescape(r"a\nb"), "a\nb");
    assert_eq!(unescape(r"\tx"), "\tx");
    assert_eq!(unescape(r#"say \"hi\""#), "say \"hi\"");
    assert_eq!(unescape(r"c:\\dir"), "c:\\dir");
}

#[test]
fn test_unknown_escape_kept() {
    assert_eq!(unescape(r"\q"), "\\q");
    assert_eq!(unescape(r"end\"), "end\\");
}

#[test]
fn test_plain_text_untouched() {
    assert_eq!(unescape("Magandang araw"), "Magandang araw");
}
