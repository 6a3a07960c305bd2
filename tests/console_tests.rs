use seabattle::{parse_coord, Coord};

#[test]
fn parses_one_based_pair() {
    assert_eq!(parse_coord("1 3"), Some(Coord::new(0, 2)));
    assert_eq!(parse_coord("6 6"), Some(Coord::new(5, 5)));
}

#[test]
fn tolerates_surrounding_whitespace() {
    assert_eq!(parse_coord("  2   5  "), Some(Coord::new(1, 4)));
}

#[test]
fn rejects_wrong_token_count() {
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("4"), None);
    assert_eq!(parse_coord("1 2 3"), None);
}

#[test]
fn rejects_non_positive_and_garbage() {
    assert_eq!(parse_coord("0 2"), None);
    assert_eq!(parse_coord("-1 2"), None);
    assert_eq!(parse_coord("a b"), None);
    assert_eq!(parse_coord("1,2"), None);
}
