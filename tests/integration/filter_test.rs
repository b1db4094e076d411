use check_cmk_services::core::filter::{FilterSet, FilterSpec};
use check_cmk_services::core::pattern::{Pattern, PatternKind};

fn filters(spec: FilterSpec) -> FilterSet {
    FilterSet::from_spec(&spec).unwrap()
}

#[test]
fn test_wildcard_trailing_space_is_significant() {
    let pattern = Pattern::parse("Filesystem *").unwrap().unwrap();
    assert_eq!(pattern.kind(), PatternKind::Wildcard);
    assert!(pattern.matches("Filesystem /var"));
    assert!(!pattern.matches("Filesystem"));
    assert!(!pattern.matches("filesystem /var"));
}

#[test]
fn test_anchored_regex() {
    let pattern = Pattern::parse("/^CPU [0-9]+$/").unwrap().unwrap();
    assert!(pattern.matches("CPU 1"));
    assert!(!pattern.matches("CPU"));
    assert!(!pattern.matches("CPU one"));
}

#[test]
fn test_matching_is_repeatable() {
    let pattern = Pattern::parse("/load/").unwrap().unwrap();
    for _ in 0..3 {
        assert!(pattern.matches("CPU load"));
        assert!(!pattern.matches("Memory"));
    }
}

#[test]
fn test_vacuous_inclusion() {
    let set = filters(FilterSpec {
        exclude_name: Some("SSH".into()),
        ..Default::default()
    });
    for (title, output) in [("SSH", ""), ("Load", "high"), ("", ""), ("Disk /", "&")] {
        assert!(set.is_included(title, output));
    }
}

#[test]
fn test_include_and_exclude_both_matching_drops() {
    let set = filters(FilterSpec {
        include_name: Some("/^Interface/".into()),
        exclude_name: Some("Interface 2".into()),
        ..Default::default()
    });
    assert!(set.is_included("Interface 2", ""));
    assert!(set.is_excluded("Interface 2", ""));
    assert!(set.is_included("Interface 1", ""));
    assert!(!set.is_excluded("Interface 1", ""));
}

#[test]
fn test_mixed_pattern_kinds_in_one_list() {
    let set = filters(FilterSpec {
        include_name: Some("SSH, Filesystem *, /^CPU/".into()),
        ..Default::default()
    });
    assert!(set.is_included("SSH", ""));
    assert!(set.is_included("Filesystem /home", ""));
    assert!(set.is_included("CPU utilization", ""));
    assert!(!set.is_included("Memory", ""));
}

#[test]
fn test_invalid_regex_in_list_is_rejected() {
    let result = FilterSet::from_spec(&FilterSpec {
        include_output: Some("ok,/(unclosed/".into()),
        ..Default::default()
    });
    assert!(result.is_err());
}
