use arbor_json::{ErrorCode, MAX_NESTING_DEPTH, parse, validate};

fn nested_arrays(depth: usize) -> String {
    let mut s = String::with_capacity(depth * 2 + 1);
    for _ in 0..depth {
        s.push('[');
    }
    s.push('1');
    for _ in 0..depth {
        s.push(']');
    }
    s
}

fn nested_objects(depth: usize) -> String {
    let mut s = String::new();
    for _ in 0..depth {
        s.push_str("{\"k\":");
    }
    s.push('1');
    for _ in 0..depth {
        s.push('}');
    }
    s
}

#[test]
fn depth_at_the_bound_parses() {
    assert!(parse(&nested_arrays(MAX_NESTING_DEPTH)).is_ok());
    assert!(parse(&nested_objects(MAX_NESTING_DEPTH)).is_ok());
    assert!(validate(&nested_arrays(MAX_NESTING_DEPTH)).is_ok());
    assert!(validate(&nested_objects(MAX_NESTING_DEPTH)).is_ok());
}

#[test]
fn depth_past_the_bound_fails_cleanly() {
    for input in [
        nested_arrays(MAX_NESTING_DEPTH + 1),
        nested_objects(MAX_NESTING_DEPTH + 1),
    ] {
        let err = parse(&input).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::MaxNestingExceeded));
        let err = validate(&input).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::MaxNestingExceeded));
    }
}

#[test]
fn mixed_container_nesting_counts_both_kinds() {
    // alternate object/array nesting: 16 of each reaches the bound exactly
    let mut s = String::new();
    for _ in 0..16 {
        s.push_str("{\"k\":[");
    }
    s.push_str("null");
    for _ in 0..16 {
        s.push_str("]}");
    }
    assert!(parse(&s).is_ok());

    let mut deeper = String::new();
    for _ in 0..17 {
        deeper.push_str("{\"k\":[");
    }
    deeper.push_str("null");
    for _ in 0..17 {
        deeper.push_str("]}");
    }
    assert_eq!(
        parse(&deeper).unwrap_err().code(),
        Some(ErrorCode::MaxNestingExceeded)
    );
}

#[test]
fn depth_resets_between_siblings() {
    // deep siblings under one root: leaving a container frees its level
    let branch = nested_arrays(MAX_NESTING_DEPTH - 1);
    let doc = format!("[{branch},{branch}]");
    assert!(parse(&doc).is_ok());
    assert!(validate(&doc).is_ok());
}

#[test]
fn wide_flat_documents_are_not_depth_limited() {
    let mut s = String::from("[");
    for i in 0..10_000 {
        if i > 0 {
            s.push(',');
        }
        s.push('1');
    }
    s.push(']');
    assert!(parse(&s).is_ok());
}
