use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_float_display() {
    let cases = [
        (2.0, "2.0"),
        (2.5, "2.5"),
        (-0.0, "-0.0"),
        (0.1 + 0.2, "0.30000000000000004"),
        (1e15, "1000000000000000.0"),
        (1e16, "1e+16"),
        (1.5e-7, "1.5e-07"),
        (0.0001, "0.0001"),
        (f64::INFINITY, "inf"),
        (f64::NEG_INFINITY, "-inf"),
        (f64::NAN, "nan"),
    ];
    for (x, expected) in cases {
        assert_eq!(format_float(x), expected, "{x:?}");
    }
}

#[test]
fn test_scalar_display() {
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(Value::str("raw text").to_string(), "raw text");
    assert_eq!(Value::Bool(true).to_string(), "Totoo");
    assert_eq!(Value::Bool(false).to_string(), "Huwad");
    assert_eq!(Value::Void.to_string(), "Wala");
}

#[test]
fn test_array_display_quotes_nested_strings() {
    let inner = Value::array(vec![Value::str("b"), Value::Bool(false)]);
    let outer = Value::array(vec![Value::Int(1), Value::Float(2.0), Value::str("a"), inner]);
    assert_eq!(outer.to_string(), "[1, 2.0, \"a\", [\"b\", Huwad]]");
    assert_eq!(Value::array(vec![]).to_string(), "[]");
}

#[test]
fn test_self_containing_array_display_terminates() {
    let items = ArrayRef::new(vec![Value::Int(1)]);
    items.borrow_mut().push(Value::Array(items.clone()));
    assert_eq!(Value::Array(items).to_string(), "[1, [...]]");
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Float(1.0).type_name(), "float");
    assert_eq!(Value::str("").type_name(), "str");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::array(vec![]).type_name(), "list");
    assert_eq!(Value::Void.type_name(), "void");
}

#[test]
fn test_truthiness() {
    for falsy in [
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::str(""),
        Value::array(vec![]),
        Value::Void,
    ] {
        assert!(!falsy.is_truthy(), "{falsy:?}");
    }
    for truthy in [
        Value::Bool(true),
        Value::Int(-1),
        Value::Float(0.5),
        Value::str("0"),
        Value::array(vec![Value::Bool(false)]),
    ] {
        assert!(truthy.is_truthy(), "{truthy:?}");
    }
}

#[test]
fn test_arrays_share_storage() {
    let a = ArrayRef::new(vec![Value::Int(1)]);
    let b = a.clone();
    b.borrow_mut().push(Value::Int(2));
    assert_eq!(a.len(), 2);
    assert!(a.ptr_eq(&b));
    assert!(!a.ptr_eq(&ArrayRef::new(a.to_vec())));
}

#[test]
fn test_resolve_index() {
    let items = ArrayRef::new(vec![Value::Int(10), Value::Int(20), Value::Int(30)]);
    assert_eq!(items.resolve_index(&Value::Int(0)), Ok(0));
    assert_eq!(items.resolve_index(&Value::Int(2)), Ok(2));
    assert_eq!(items.resolve_index(&Value::Int(-1)), Ok(2));
    assert_eq!(items.resolve_index(&Value::Int(-3)), Ok(0));
    assert!(items.resolve_index(&Value::Int(3)).is_err());
    assert!(items.resolve_index(&Value::Int(-4)).is_err());
    assert!(items.resolve_index(&Value::Int(i64::MIN)).is_err());
}

#[test]
fn test_get_and_set() {
    let items = ArrayRef::new(vec![Value::Int(10), Value::Int(20)]);
    assert_eq!(items.get(&Value::Int(-1)), Ok(Value::Int(20)));
    items.set(&Value::Int(0), Value::str("x")).ok();
    assert_eq!(items.to_vec(), vec![Value::str("x"), Value::Int(20)]);
}

#[test]
fn test_file_mode_parse() {
    for mode in ["r", "r+", "w", "w+", "a", "a+"] {
        assert_eq!(FileMode::parse(mode).map(FileMode::as_str), Some(mode));
    }
    assert_eq!(FileMode::parse("rw"), None);
    assert_eq!(FileMode::parse(""), None);

    let read = FileMode::parse("r");
    assert_eq!(read.map(FileMode::is_writable), Some(false));
    let append = FileMode::parse("a");
    assert_eq!(append.map(FileMode::is_readable), Some(false));
    let update = FileMode::parse("w+");
    assert_eq!(update.map(FileMode::is_readable), Some(true));
}
