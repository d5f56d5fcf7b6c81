#![no_main]

use libfuzzer_sys::fuzz_target;

// Parsing arbitrary text must never panic, and anything that parses must
// survive a compact format/reparse loop unchanged.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = arbor_json::parse(text) else {
        return;
    };
    let compact = arbor_json::format(&value, &arbor_json::FormatConfig::compact())
        .expect("parsed trees never contain non-finite numbers");
    let reparsed = arbor_json::parse(&compact).expect("compact output must reparse");
    assert_eq!(value, reparsed);
});
