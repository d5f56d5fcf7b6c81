use crate::encode::{primitives, writer::Writer};
use crate::error::Result;
use crate::options::{FormatConfig, NonFinitePolicy};
use crate::value::Value;

pub(crate) fn write_value(
    value: &Value,
    w: &mut Writer<'_>,
    config: &FormatConfig,
    level: usize,
) -> Result<()> {
    match value {
        Value::Null => {
            w.push_str("null");
            Ok(())
        }
        Value::Bool(b) => {
            w.push_str(primitives::render_bool(*b));
            Ok(())
        }
        Value::Number(n) => {
            if !n.is_finite() && config.non_finite == NonFinitePolicy::Skip {
                // containers filter skipped numbers out, so this is the root
                w.push_str("null");
                return Ok(());
            }
            let rendered = primitives::render_number(*n, config)?;
            w.push_str(&rendered);
            Ok(())
        }
        Value::String(s) => {
            w.push_escaped(s);
            Ok(())
        }
        Value::Array(items) => write_array(items, w, config, level),
        Value::Object(entries) => write_object(entries, w, config, level),
    }
}

/// Whether a child survives the non-finite policy. Under the error policy
/// everything is kept and the number renderer raises the failure.
fn keep(value: &Value, config: &FormatConfig) -> bool {
    match value {
        Value::Number(n) if !n.is_finite() => config.non_finite == NonFinitePolicy::Error,
        _ => true,
    }
}

fn write_array(
    items: &[Value],
    w: &mut Writer<'_>,
    config: &FormatConfig,
    level: usize,
) -> Result<()> {
    let visible: Vec<&Value> = items.iter().filter(|v| keep(v, config)).collect();
    if visible.is_empty() {
        w.push_str("[]");
        return Ok(());
    }

    if config.inline_simple_arrays && visible.iter().all(|v| v.is_primitive()) {
        let inline = render_inline_array(&visible, config)?;
        if config.max_inline_length == 0 || inline.len() <= config.max_inline_length {
            w.push_str(&inline);
            return Ok(());
        }
    }

    w.push_str("[");
    w.newline();
    for (i, item) in visible.iter().enumerate() {
        w.indent(level + 1);
        write_value(item, w, config, level + 1)?;
        if i + 1 < visible.len() {
            w.push_str(",");
        }
        w.newline();
    }
    w.indent(level);
    w.push_str("]");
    Ok(())
}

/// Single-line rendering of an all-primitive array.
fn render_inline_array(items: &[&Value], config: &FormatConfig) -> Result<String> {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
            for _ in 0..config.spaces_after_comma {
                out.push(' ');
            }
        }
        let mut scratch = Writer::new(config);
        write_value(item, &mut scratch, config, 0)?;
        out.push_str(&scratch.into_string());
    }
    out.push(']');
    Ok(out)
}

fn write_object(
    entries: &[(String, Value)],
    w: &mut Writer<'_>,
    config: &FormatConfig,
    level: usize,
) -> Result<()> {
    let mut visible: Vec<&(String, Value)> =
        entries.iter().filter(|(_, v)| keep(v, config)).collect();
    if visible.is_empty() {
        w.push_str("{}");
        return Ok(());
    }
    if config.sort_keys {
        visible.sort_by(|a, b| a.0.as_str().cmp(b.0.as_str()));
    }

    w.push_str("{");
    w.newline();
    for (i, (key, value)) in visible.iter().enumerate() {
        w.indent(level + 1);
        w.push_escaped(key);
        w.push_str(":");
        w.spaces(config.spaces_after_colon);
        write_value(value, w, config, level + 1)?;
        if i + 1 < visible.len() {
            w.push_str(",");
        }
        w.newline();
    }
    w.indent(level);
    w.push_str("}");
    Ok(())
}
