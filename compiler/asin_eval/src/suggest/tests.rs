use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_edit_distance() {
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("abc", ""), 3);
    assert_eq!(edit_distance("", "abc"), 3);
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("haba", "haba"), 0);
    assert_eq!(edit_distance("hab", "haba"), 1);
    assert_eq!(edit_distance("ñino", "nino"), 1);
}

#[test]
fn test_closest_within_tolerance() {
    let names = ["bilang", "lutang", "titik", "haba"];
    assert_eq!(closest("bilng", names), Some("bilang"));
    assert_eq!(closest("habaa", names), Some("haba"));
    assert_eq!(closest("wala_dito", names), None);
}

#[test]
fn test_short_names_get_no_suggestion() {
    assert_eq!(closest("x", ["y", "xs"]), None);
    assert_eq!(closest("ab", ["abc"]), None);
}

#[test]
fn test_exact_match_is_not_suggested() {
    assert_eq!(closest("total", ["total"]), None);
}

#[test]
fn test_ties_break_lexicographically() {
    assert_eq!(closest("cat", ["cbt", "cab"]), Some("cab"));
    assert_eq!(closest("cat", ["cab", "cbt"]), Some("cab"));
}

#[test]
fn test_did_you_mean_text() {
    assert_eq!(
        did_you_mean("totl", ["total", "count"]),
        Some("did you mean `total`?".to_owned())
    );
}
