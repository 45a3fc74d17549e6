use super::*;

fn tokens_of(spec: &FilterSpec) -> Vec<Vec<&str>> {
    spec.entries()
        .iter()
        .map(|entry| entry.tokens().iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn test_single_table_with_columns() {
    let spec = parse("t1;c1;c2").unwrap();
    assert_eq!(tokens_of(&spec), vec![vec!["t1", "c1", "c2"]]);
    assert_eq!(spec.entries()[0].raw(), "t1;c1;c2");
}

#[test]
fn test_all_token_separators() {
    let spec = parse("db1.t1,c1;c2").unwrap();
    assert_eq!(tokens_of(&spec), vec![vec!["db1", "t1", "c1", "c2"]]);
}

#[test]
fn test_multiple_entries() {
    let spec = parse("db1.t1.*|t2;c1|ten.db.t3.c1").unwrap();
    assert_eq!(
        tokens_of(&spec),
        vec![
            vec!["db1", "t1", "*"],
            vec!["t2", "c1"],
            vec!["ten", "db", "t3", "c1"],
        ]
    );
    assert_eq!(spec.table_count(), 3);
}

#[test]
fn test_trailing_empty_tokens_dropped() {
    let spec = parse("t1;c1;;").unwrap();
    assert_eq!(tokens_of(&spec), vec![vec!["t1", "c1"]]);
}

#[test]
fn test_leading_and_interior_empty_tokens_kept() {
    let spec = parse(";t1;;c1").unwrap();
    assert_eq!(tokens_of(&spec), vec![vec!["", "t1", "", "c1"]]);
}

#[test]
fn test_trailing_empty_entries_dropped() {
    let spec = parse("a|b||").unwrap();
    assert_eq!(tokens_of(&spec), vec![vec!["a"], vec!["b"]]);
}

#[test]
fn test_interior_empty_entry_kept_without_tokens() {
    let spec = parse("a||b").unwrap();
    assert_eq!(spec.entries().len(), 3);
    assert!(spec.entries()[1].is_empty());
    assert_eq!(spec.table_count(), 2);
}

#[test]
fn test_separator_only_entry_has_no_tokens() {
    let spec = parse(";;").unwrap();
    assert_eq!(spec.entries().len(), 1);
    assert_eq!(spec.entries()[0].raw(), ";;");
    assert!(spec.entries()[0].is_empty());
}

#[test]
fn test_empty_input_is_one_empty_entry() {
    let spec = parse("").unwrap();
    assert_eq!(spec.entries().len(), 1);
    assert_eq!(spec.entries()[0].raw(), "");
    assert!(spec.entries()[0].is_empty());
}

#[test]
fn test_separators_only_have_no_entries() {
    assert!(parse("|").unwrap().is_empty());
    assert!(parse("||").unwrap().is_empty());
}

#[test]
fn test_whitespace_is_preserved() {
    let spec = parse(" db . t1 ; * ").unwrap();
    assert_eq!(tokens_of(&spec), vec![vec![" db ", " t1 ", " * "]]);
}
