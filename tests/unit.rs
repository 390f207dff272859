//! Unit tests for core msgpatch types.
use msgpatch::error::{NameKind, ReferenceSite};
use msgpatch::prelude::*;
use msgpatch::spec::SectionKeyword;

#[test]
fn test_section_keyword_lookup() {
    assert_eq!(SectionKeyword::from_word("OUTPUT"), Some(SectionKeyword::Output));
    assert_eq!(SectionKeyword::from_word("output"), None);
    assert_eq!(format!("{}", SectionKeyword::Constants), "CONSTANTS");
}

#[test]
fn test_node_kind_outlets() {
    assert_eq!(NodeKind::object("t", ["b", "b"]).outlet_count(), Some(2));
    assert_eq!(NodeKind::message(["x"]).outlet_count(), Some(1));
    assert_eq!(NodeKind::bare("outlet").outlet_count(), Some(0));
    assert_eq!(NodeKind::message(["x"]).class(), None);
}

#[test]
fn test_error_display() {
    let err = BuildError::UnresolvedReference {
        name: "foo".to_string(),
        site: ReferenceSite::SecondaryArgs {
            equation: "bar".to_string(),
        },
    };
    assert!(err.to_string().contains("'foo'"));
    assert!(err.to_string().contains("secondary arguments of equation 'bar'"));

    let spec_err = SpecError::DuplicateName {
        kind: NameKind::Slot,
        name: "a".to_string(),
    };
    assert_eq!(spec_err.to_string(), "Duplicate slot name 'a'");

    let reused = SpecError::SlotNameReused {
        kind: NameKind::Equation,
        name: "a".to_string(),
    };
    assert_eq!(
        reused.to_string(),
        "The equation name 'a' is already used by a slot"
    );

    let syntax = SyntaxError {
        line: 2,
        column: 7,
        offset: 12,
        found: "'SLOTS'".to_string(),
        expected: "word".to_string(),
    };
    assert_eq!(
        syntax.to_string(),
        "syntax error at line 2, column 7: expected word, found 'SLOTS'"
    );

    let wrapped: CompileError = syntax.into();
    assert!(wrapped.to_string().starts_with("syntax error at line 2"));
}

#[test]
fn test_spec_serializes_to_json() {
    let spec = Compiler::default()
        .parse("NAME m SLOTS a EQUATIONS y = lexicon(a; a') OUTPUT y")
        .unwrap();
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["name"], "m");
    assert_eq!(json["slots"][0], "a");
    assert_eq!(json["equations"][0]["secondary_args"][0]["quoted"], true);
    assert_eq!(json["constants"].as_array().map(Vec::len), Some(0));
}
