use super::*;

#[test]
fn test_codes_render() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E6004.as_str(), "E6004");
}

#[test]
fn test_class_names() {
    assert_eq!(ErrorCode::E1001.class_name(), "SyntaxError");
    assert_eq!(ErrorCode::E1002.class_name(), "SyntaxError");
    assert_eq!(ErrorCode::E6005.class_name(), "InexistentFileError");
}

#[test]
fn test_runtime_phase() {
    assert!(ErrorCode::E6002.is_runtime());
    assert!(!ErrorCode::E1001.is_runtime());
    assert!(!ErrorCode::E0001.is_runtime());
}
