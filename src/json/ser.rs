//! Two-phase serialization: measure the exact output size, then write into a
//! caller-provided buffer of at least that size.
//!
//! Both phases take the tree by shared reference, so it cannot change between
//! measuring and filling.

use crate::Result;
use crate::diagnostics;
use crate::json::Value;

use anyhow::{Context, anyhow, bail};
use std::io;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// No whitespace at all.
    #[default]
    Compact,
    /// serde_json's pretty formatter (two-space indent).
    Pretty,
}

/// Byte counter used for the measuring pass.
struct Counter(usize);

impl io::Write for Counter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn write_value<W: io::Write>(out: W, value: &Value, style: Style) -> serde_json::Result<()> {
    match style {
        Style::Compact => serde_json::to_writer(out, value),
        Style::Pretty => serde_json::to_writer_pretty(out, value),
    }
}

/// Exact length in bytes of the serialized text (no terminator).
pub fn measure(value: &Value, style: Style) -> Result<usize> {
    let mut counter = Counter(0);
    write_value(&mut counter, value, style)
        .with_context(|| diagnostics::error_message("measure JSON output"))?;
    Ok(counter.0)
}

/// Serialize into `buf`, returning the number of bytes written.
///
/// `buf` must hold at least `measure(value, style)` bytes; bytes past the
/// written length are left untouched.
pub fn serialize_into(value: &Value, style: Style, buf: &mut [u8]) -> Result<usize> {
    let needed = measure(value, style)?;
    if buf.len() < needed {
        bail!(
            "{}",
            diagnostics::error_message(format!(
                "output buffer too small: {} bytes given, {} needed",
                buf.len(),
                needed
            ))
        );
    }

    let mut out: &mut [u8] = buf;
    write_value(&mut out, value, style)
        .with_context(|| diagnostics::error_message("serialize JSON output"))?;
    Ok(needed)
}

/// Measure, allocate an exactly-sized buffer, fill it.
///
/// Allocation failure of the output buffer is reported as an error rather than
/// aborting the process.
pub fn to_string(value: &Value, style: Style) -> Result<String> {
    let len = measure(value, style)?;

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(len).map_err(|e| {
        anyhow!(diagnostics::error_message(format!(
            "out of memory: cannot allocate {} byte output buffer: {}",
            len, e
        )))
    })?;
    buf.resize(len, 0);

    let written = serialize_into(value, style, &mut buf)?;
    buf.truncate(written);
    String::from_utf8(buf).with_context(|| diagnostics::error_message("JSON output is not UTF-8"))
}
