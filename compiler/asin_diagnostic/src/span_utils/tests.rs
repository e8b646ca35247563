use super::*;
use pretty_assertions::assert_eq;

const SOURCE: &str = "x = 1;\r\nkapag (x) {\n    ilimbag(\"ñ\", y);\n}";

#[test]
fn test_line_from_offset() {
    let table = LineOffsetTable::build(SOURCE);
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(8), 2);
    assert_eq!(table.line_from_offset(20), 3);
}

#[test]
fn test_column_counts_chars() {
    let table = LineOffsetTable::build(SOURCE);
    let y_offset = u32::try_from(SOURCE.find("y)").unwrap_or(0)).unwrap_or(0);
    // "    ilimbag("ñ", " is 17 characters but 18 bytes
    assert_eq!(table.offset_to_line_col(SOURCE, y_offset), (3, 18));
}

#[test]
fn test_line_text_strips_terminators() {
    let table = LineOffsetTable::build(SOURCE);
    assert_eq!(table.line_text(SOURCE, 1), Some("x = 1;"));
    assert_eq!(table.line_text(SOURCE, 4), Some("}"));
    assert_eq!(table.line_text(SOURCE, 0), None);
    assert_eq!(table.line_text(SOURCE, 9), None);
}

#[test]
fn test_source_location_of_span() {
    let source = "a = 1;\nb = a +* 2;";
    let loc = SourceLocation::of_span(source, Span::new(14, 15));
    assert_eq!(
        loc,
        SourceLocation {
            line: 2,
            column: 8,
            line_text: "b = a +* 2;".to_string(),
        }
    );
}

#[test]
fn test_offset_at_end_of_source() {
    let source = "x = ";
    let loc = SourceLocation::of_span(source, Span::point(4));
    assert_eq!((loc.line, loc.column), (1, 5));
}
