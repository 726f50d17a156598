use super::*;
use std::collections::BTreeMap;

#[test]
fn separator_width() {
    let s = separator(5);
    assert_eq!(s.chars().count(), 5);
    assert!(s.chars().all(|c| c == '\u{2500}'));
}

#[test]
fn separator_zero() {
    assert_eq!(separator(0), "");
}

#[test]
fn write_json_is_pretty_and_newline_terminated() {
    let mut value = BTreeMap::new();
    value.insert("b", 2);
    value.insert("a", 1);
    let mut buf = Vec::new();
    write_json(&mut buf, &value).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "{\n  \"a\": 1,\n  \"b\": 2\n}\n");
}
