// crates/hinclude-core/tests/failures/mod.rs
use super::common::*;
use hinclude_core::{preprocess, IncludeError, SourceLocation};
use pretty_assertions::assert_eq;

#[test]
fn test_worked_example_leaves_truncated_output() {
    let fx = Fixture::sources_tree();
    let input = fx.path("sources/a.cpp");
    let output = fx.path("sources/a.in");

    let result = fx.preprocessor(SEARCH_DIRS).process(&input, &output);
    match result {
        Err(IncludeError::UnresolvedInclude { name, location }) => {
            assert_eq!(name, "dummy.txt");
            assert_eq!(location, SourceLocation::new(&input, 8));
        }
        other => panic!("expected UnresolvedInclude, got {:?}", other),
    }
    assert_eq!(fx.read("sources/a.in"), A_CPP_SPLICED);
}

#[test]
fn test_preprocess_reports_boolean() {
    let fx = Fixture::sources_tree();
    let dirs = [fx.path("sources/include1"), fx.path("sources/include2")];
    let input = fx.path("sources/a.cpp");
    let output = fx.path("sources/a.in");

    assert!(!preprocess(&input, &output, &dirs));
    assert_eq!(fx.read("sources/a.in"), A_CPP_SPLICED);

    fx.write("sources/include1/dummy.txt", "");
    assert!(preprocess(&input, &output, &dirs));
    assert_eq!(fx.read("sources/a.in"), format!("{A_CPP_SPLICED}}}\n"));
}

#[test]
fn test_nested_failure_reports_deepest_directive() {
    let fx = Fixture::new();
    let input = fx.write("a.c", "a1\n#include \"b.h\"\na2\n");
    let b = fx.write("b.h", "b1\nb2\n#include <nope.h>\nb3\n");
    let output = fx.path("out.c");

    let err = fx.preprocessor(&[]).process(&input, &output).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("unknown include file nope.h at file {} at line 3", b.display())
    );
    assert_eq!(fx.read("out.c"), "a1\nb1\nb2\n");
}

#[test]
fn test_output_is_truncated_first() {
    let fx = Fixture::new();
    let input = fx.write("a.c", "new\n#include \"missing.h\"\n");
    fx.write("out.c", "old content that is much longer\n");
    let output = fx.path("out.c");

    assert!(fx.preprocessor(&[]).process(&input, &output).is_err());
    assert_eq!(fx.read("out.c"), "new\n");
}

#[test]
fn test_unreadable_input_creates_no_output() {
    let fx = Fixture::new();
    let input = fx.path("does_not_exist.c");
    let output = fx.path("out.c");

    match fx.preprocessor(&[]).process(&input, &output) {
        Err(IncludeError::UnreadableInput { path, .. }) => assert_eq!(path, input),
        other => panic!("expected UnreadableInput, got {:?}", other),
    }
    assert!(!exists(&output));
}

#[test]
fn test_directory_as_input_is_unreadable() {
    let fx = Fixture::new();
    let input = fx.mkdir("src");
    let output = fx.path("out.c");
    let result = fx.preprocessor(&[]).process(&input, &output);
    assert!(matches!(result, Err(IncludeError::UnreadableInput { .. })));
    assert!(!exists(&output));
}

#[test]
fn test_unwritable_output() {
    let fx = Fixture::new();
    let input = fx.write("a.c", "a\n");
    let output = fx.path("no/such/dir/out.c");

    match fx.preprocessor(&[]).process(&input, &output) {
        Err(IncludeError::UnwritableOutput { path, .. }) => assert_eq!(path, output),
        other => panic!("expected UnwritableOutput, got {:?}", other),
    }
}

#[test]
fn test_include_resolving_to_directory() {
    let fx = Fixture::new();
    let input = fx.write("a.c", "a\n#include \"sub\"\n");
    fx.mkdir("sub");

    let mut out = Vec::new();
    let err = fx.preprocessor(&[]).expand_to(&input, &mut out).unwrap_err();
    match &err {
        IncludeError::UnreadableInclude { name, location, .. } => {
            assert_eq!(name, "sub");
            assert_eq!(location.line, 2);
        }
        other => panic!("expected UnreadableInclude, got {:?}", other),
    }
    assert!(err.to_string().starts_with("unknown include file sub at file "));
    assert_eq!(out, b"a\n");
}

#[test]
fn test_self_include_is_cyclic() {
    let fx = Fixture::new();
    let input = fx.write("loop.h", "top\n#include \"loop.h\"\n");

    let mut out = Vec::new();
    match fx.preprocessor(&[]).expand_to(&input, &mut out) {
        Err(IncludeError::CyclicInclude { name, location }) => {
            assert_eq!(name, "loop.h");
            assert_eq!(location, SourceLocation::new(&input, 2));
        }
        other => panic!("expected CyclicInclude, got {:?}", other),
    }
    assert_eq!(out, b"top\n");
}

#[test]
fn test_indirect_cycle_through_search_path() {
    let fx = Fixture::new();
    let input = fx.write("main.c", "#include <a.h>\n");
    fx.write("inc/a.h", "a\n#include \"b.h\"\n");
    let b = fx.write("inc/b.h", "b\n#include <a.h>\n");

    let mut out = Vec::new();
    let err = fx.preprocessor(&["inc"]).expand_to(&input, &mut out).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("cyclic include of a.h at file {} at line 2", b.display())
    );
    assert_eq!(out, b"a\nb\n");
}

#[test]
fn test_error_location_accessor() {
    let fx = Fixture::new();
    let input = fx.write("a.c", "#include <x.h>\n");
    let err = fx.preprocessor(&[]).expand_to_string(&input).unwrap_err();
    assert_eq!(err.location(), Some(&SourceLocation::new(&input, 1)));

    let err = fx
        .preprocessor(&[])
        .expand_to_string(&fx.path("missing.c"))
        .unwrap_err();
    assert_eq!(err.location(), None);
}
