//! Property-based tests for path validation and list parsing.
//!
//! Note: The normalize module already has quick property tests for
//! idempotence. This module runs many more cases over the whole pipeline.

use super::list::parse_repo_paths;
use super::normalize::normalize;
use super::types::{InvalidPathKind, Verdict};
use super::validate::{ensure_repo_relative, validate};
use crate::error::Error;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,10}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
        1 => "[a-z]{0,3}[*?\\[\\]][a-z]{0,3}",
        1 => "[A-Za-z]:[a-z]{0,4}",
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![4 => Just(""), 1 => Just("/"), 1 => Just("//"), 1 => Just("./")],
        prop::collection::vec(segment_strategy(), 1..8),
        prop_oneof![Just("/"), Just("\\")],
    )
        .prop_map(|(lead, parts, sep)| format!("{lead}{}", parts.join(sep)))
}

fn plain_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,10}", 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every accepted path satisfies the output invariant
    #[test]
    fn accepted_paths_are_safe(raw in raw_path_strategy()) {
        if let Ok(path) = ensure_repo_relative(&raw) {
            let s = path.as_str();
            prop_assert!(!s.is_empty());
            prop_assert!(!s.starts_with('/'));
            prop_assert!(!s.contains('\\'));
            prop_assert!(s != ".." && !s.starts_with("../"));
            prop_assert!(!s.split('/').any(|seg| seg == ".."));
            prop_assert!(!s.contains(&['*', '?', '[', ']'][..]));
            let bytes = s.as_bytes();
            prop_assert!(!(bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'));
            prop_assert_eq!(normalize(s), s);
        }
    }

    // Validation of a normalized path agrees with the one-step helper
    #[test]
    fn validate_matches_ensure(raw in raw_path_strategy()) {
        let verdict = validate(&normalize(&raw));
        prop_assert_eq!(verdict.into_result(), ensure_repo_relative(&raw));
    }

    // Rooted inputs are always rejected as not relative
    #[test]
    fn rooted_paths_rejected(path in plain_path_strategy(), lead in prop_oneof![Just("/"), Just("//"), Just("\\\\")]) {
        let raw = format!("{lead}{path}");
        prop_assert_eq!(ensure_repo_relative(&raw), Err(InvalidPathKind::NotRelative));
    }

    // Prefixing a plain path with more `..` than it has segments escapes
    #[test]
    fn climbing_out_escapes(path in plain_path_strategy(), extra in 1..4usize) {
        let depth = path.split('/').count();
        let raw = format!("{path}/{}", vec![".."; depth + extra].join("/"));
        prop_assert_eq!(ensure_repo_relative(&raw), Err(InvalidPathKind::Escapes));
    }

    // Plain relative paths are accepted unchanged
    #[test]
    fn plain_paths_accepted(path in plain_path_strategy()) {
        prop_assert!(matches!(validate(&path), Verdict::Valid(ref p) if p.as_str() == path));
    }

    // List parsing keeps first occurrences in order and never duplicates
    #[test]
    fn list_dedup_preserves_first_occurrence(paths in prop::collection::vec(plain_path_strategy(), 1..12)) {
        let raw = paths.join("\n");
        let parsed = parse_repo_paths("PATHS", &raw).unwrap();

        let mut expected: Vec<&str> = Vec::new();
        for p in &paths {
            if !expected.contains(&p.as_str()) {
                expected.push(p);
            }
        }
        let got: Vec<&str> = parsed.iter().map(|p| p.as_str()).collect();
        prop_assert_eq!(got, expected);
    }

    // An invalid line aborts the parse and is attributed to its own line number
    #[test]
    fn list_fail_fast_attribution(
        before in prop::collection::vec(plain_path_strategy(), 0..5),
        after in prop::collection::vec(plain_path_strategy(), 0..5),
    ) {
        let mut lines = before.clone();
        lines.push("../escape".to_string());
        lines.extend(after);
        let err = parse_repo_paths("PATHS", &lines.join("\n")).unwrap_err();
        match err {
            Error::InvalidPathEntry { line, kind, .. } => {
                prop_assert_eq!(line, before.len() + 1);
                prop_assert_eq!(kind, InvalidPathKind::Escapes);
            }
            other => prop_assert!(false, "unexpected error {other:?}"),
        }
    }
}
