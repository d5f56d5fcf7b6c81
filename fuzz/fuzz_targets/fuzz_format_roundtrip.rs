#![no_main]

use arbitrary::Arbitrary;
use arbor_json::{FormatConfig, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Node {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

// Depth stays well under the parser's nesting bound so round trips cannot
// fail on the way back in.
const MAX_BUILD_DEPTH: usize = 8;

fn build(node: &Node, depth: usize) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Number(n) if n.is_finite() => Value::Number(*n),
        Node::Number(_) => Value::Number(0.0),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => {
            if depth >= MAX_BUILD_DEPTH {
                return Value::array();
            }
            Value::Array(items.iter().map(|n| build(n, depth + 1)).collect())
        }
        Node::Object(entries) => {
            if depth >= MAX_BUILD_DEPTH {
                return Value::object();
            }
            let mut obj = Value::object();
            for (key, node) in entries {
                let _ = obj.insert(key.clone(), build(node, depth + 1));
            }
            obj
        }
    }
}

fuzz_target!(|root: Node| {
    let value = build(&root, 0);
    for config in [
        FormatConfig::default(),
        FormatConfig::compact(),
        FormatConfig::pretty(),
    ] {
        let text = arbor_json::format(&value, &config).expect("tree has only finite numbers");
        arbor_json::parse(&text).expect("formatted output must reparse");
    }
    // compact is lossless, so the loop must reproduce the tree exactly
    let compact = arbor_json::format(&value, &FormatConfig::compact()).unwrap();
    assert_eq!(arbor_json::parse(&compact).unwrap(), value);
});
