//! File and stream helpers: read fully, then hand off to the core
//! operations; writes go through a sibling temp file and an atomic rename.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::options::FormatConfig;
use crate::value::Value;

/// Controls for [`write_file_with`].
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Buffer size for the underlying writer.
    pub buffer_size: usize,
    /// Suffix appended to the destination name for the temporary file.
    pub temp_suffix: String,
    /// Flush file contents to disk before the rename.
    pub sync_on_close: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            temp_suffix: String::from(".tmp"),
            sync_on_close: true,
        }
    }
}

/// Reads the full stream and parses it as one JSON document.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    crate::decode::parser::parse(&buf)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let buf = fs::read_to_string(path)?;
    crate::decode::parser::parse(&buf)
}

pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let buf = fs::read_to_string(path)?;
    crate::decode::validation::validate(&buf)
}

/// Formats `value` and writes the text to `writer`.
pub fn write_stream<W: Write>(value: &Value, mut writer: W, config: &FormatConfig) -> Result<()> {
    let text = crate::encode::format(value, config)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Formats `value` and atomically replaces `path` with the result, using the
/// default [`WriteOptions`].
pub fn write_file<P: AsRef<Path>>(value: &Value, path: P, config: &FormatConfig) -> Result<()> {
    write_file_with(value, path, config, &WriteOptions::default())
}

/// Formats `value` into a temporary sibling of `path`, optionally syncs it,
/// and renames it over the destination. The temp file is removed if any step
/// fails, so the destination is never left half-written.
pub fn write_file_with<P: AsRef<Path>>(
    value: &Value,
    path: P,
    config: &FormatConfig,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = crate::encode::format(value, config)?;

    let temp_path = temp_sibling(path, &options.temp_suffix);
    let result = write_and_rename(&text, path, &temp_path, options);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_rename(
    text: &str,
    path: &Path,
    temp_path: &Path,
    options: &WriteOptions,
) -> Result<()> {
    let file = File::create(temp_path)?;
    let mut writer = BufWriter::with_capacity(options.buffer_size.max(1), file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    if options.sync_on_close {
        writer.get_ref().sync_all()?;
    }
    drop(writer);
    fs::rename(temp_path, path)?;
    Ok(())
}

fn temp_sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
