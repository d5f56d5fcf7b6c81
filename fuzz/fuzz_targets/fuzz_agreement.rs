#![no_main]

use libfuzzer_sys::fuzz_target;

// The recognizer accepts a string iff the parser does.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let parsed = arbor_json::parse(text);
    let validated = arbor_json::validate(text);
    assert_eq!(parsed.is_ok(), validated.is_ok());
    if let (Err(p), Err(v)) = (parsed, validated) {
        let (pd, vd) = (p.diagnostic().unwrap(), v.diagnostic().unwrap());
        assert_eq!(pd.code, vd.code);
        assert_eq!((pd.line, pd.column), (vd.line, vd.column));
    }
});
