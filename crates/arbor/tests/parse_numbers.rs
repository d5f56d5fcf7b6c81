use arbor_json::{ErrorCode, Value, parse};

fn number(input: &str) -> f64 {
    match parse(input).unwrap() {
        Value::Number(n) => n,
        other => panic!("expected number, got {other:?}"),
    }
}

#[test]
fn integers_and_fractions() {
    assert_eq!(number("0"), 0.0);
    assert_eq!(number("-0"), 0.0);
    assert_eq!(number("42"), 42.0);
    assert_eq!(number("-17"), -17.0);
    assert_eq!(number("0.5"), 0.5);
    assert_eq!(number("-3.25"), -3.25);
}

#[test]
fn exponents() {
    assert_eq!(number("1e2"), 100.0);
    assert_eq!(number("1E2"), 100.0);
    assert_eq!(number("1e+2"), 100.0);
    assert_eq!(number("25e-2"), 0.25);
    assert_eq!(number("1.5e3"), 1500.0);
    assert_eq!(number("0e0"), 0.0);
}

#[test]
fn leading_zeros_are_rejected() {
    assert_eq!(parse("01").unwrap_err().code(), Some(ErrorCode::InvalidNumber));
    assert_eq!(parse("01.5").unwrap_err().code(), Some(ErrorCode::InvalidNumber));
    assert_eq!(parse("-01").unwrap_err().code(), Some(ErrorCode::InvalidNumber));
    // a single zero, with or without fraction, stays legal
    assert!(parse("0").is_ok());
    assert!(parse("0.5").is_ok());
    assert!(parse("-0").is_ok());
    assert!(parse("0e1").is_ok());
}

#[test]
fn incomplete_numbers_are_rejected() {
    for input in ["-", "1.", ".5", "1e", "1e+", "2.e1", "+1"] {
        let err = parse(input).unwrap_err();
        assert!(
            matches!(
                err.code(),
                Some(ErrorCode::InvalidNumber | ErrorCode::InvalidValue)
            ),
            "input {input:?} gave {err:?}"
        );
    }
}

#[test]
fn overflowing_literals_report_infinity() {
    let err = parse("1e999").unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::InvalidNumberInfinity));
    let err = parse("-1e999").unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::InvalidNumberInfinity));
}

#[test]
fn underflowing_literals_collapse_to_zero() {
    assert_eq!(number("1e-999"), 0.0);
}

#[test]
fn numbers_inside_containers() {
    let doc = parse("[0.25, -12, 3e2]").unwrap();
    assert_eq!(doc.get_index(0), Some(&Value::Number(0.25)));
    assert_eq!(doc.get_index(1), Some(&Value::Number(-12.0)));
    assert_eq!(doc.get_index(2), Some(&Value::Number(300.0)));
}
