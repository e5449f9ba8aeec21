use crate::line_map::{LineMap, Position};

#[test]
fn test_line_map_simple() {
    let source = "let a = 1\nlet b = 2\n";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(10, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
    assert_eq!(map.offset_to_position(14, source), Position::new(1, 4));
}

#[test]
fn test_line_map_crlf() {
    let source = "a\r\nb\rc";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(2, source), Position::new(0, 2));
    assert_eq!(map.offset_to_position(3, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(5, source), Position::new(2, 0));
}

#[test]
fn test_position_display_is_one_based() {
    assert_eq!(Position::new(0, 0).to_string(), "1:1");
    assert_eq!(Position::new(2, 7).to_string(), "3:8");
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab";
    let map = LineMap::build(source);
    assert_eq!(map.offset_to_position(40, source), Position::new(0, 2));
}
