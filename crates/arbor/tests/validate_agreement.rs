//! The validator must accept exactly what the parser accepts.

use arbor_json::{is_valid, parse, validate};

const CASES: &[&str] = &[
    // valid
    "null",
    "true",
    "false",
    "0",
    "-0",
    "0.5",
    "12e3",
    "-1.25E-2",
    "\"\"",
    "\"plain\"",
    r#""esc \" \\ \/ \b \f \n \r \t""#,
    r#""Aé😀""#,
    "[]",
    "[1,2,3]",
    "[[[[1]]]]",
    r#"{"a":1}"#,
    r#"{"a":{"b":[true,null]}}"#,
    "  [ 1 , 2 ]  ",
    r#"{"dup":1,"dup":2}"#,
    // invalid
    "",
    "   ",
    "nul",
    "truth",
    "01",
    "01.5",
    "-",
    "1.",
    "1e",
    "1e+",
    "+1",
    ".5",
    "1e999",
    "-1e999",
    "\"unterminated",
    "\"bad\\q\"",
    r#""\u12g4""#,
    r#""\uDE00""#,
    r#""\uD83D""#,
    "\"ctrl\u{1}\"",
    "[1,2,]",
    r#"{"a":1,}"#,
    "[1 2]",
    r#"{"a" 1}"#,
    r#"{a:1}"#,
    r#"{"a":}"#,
    "[,1]",
    "{",
    "[",
    "]",
    "}",
    ",",
    "null extra",
    "[1],",
    "{} {}",
];

#[test]
fn validator_and_parser_agree_on_every_case() {
    for case in CASES {
        let parsed = parse(case).is_ok();
        let validated = validate(case).is_ok();
        assert_eq!(parsed, validated, "disagreement on {case:?}");
        assert_eq!(is_valid(case), parsed, "is_valid disagrees on {case:?}");
    }
}

#[test]
fn diagnostics_match_between_walks() {
    for case in CASES {
        let (Err(p), Err(v)) = (parse(case), validate(case)) else {
            continue;
        };
        let (pd, vd) = (p.diagnostic().unwrap(), v.diagnostic().unwrap());
        assert_eq!(pd.code, vd.code, "code mismatch on {case:?}");
        assert_eq!(
            (pd.line, pd.column),
            (vd.line, vd.column),
            "position mismatch on {case:?}"
        );
        assert_eq!(pd.message, vd.message, "message mismatch on {case:?}");
    }
}

#[test]
fn nesting_bound_matches() {
    let deep_ok = "[".repeat(32) + &"]".repeat(32);
    let deep_err = "[".repeat(33) + &"]".repeat(33);
    assert!(parse(&deep_ok).is_ok() && validate(&deep_ok).is_ok());
    assert!(parse(&deep_err).is_err() && validate(&deep_err).is_err());
}
