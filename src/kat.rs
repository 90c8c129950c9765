//! Known-answer-test fixture tooling.
//!
//! The reference KAT fixtures are line-oriented text: records separated by
//! blank lines, each a run of `Key = Value` lines with keys `Len` (message
//! length in bits), `Msg` (hex message) and `MD` or `Squeezed` (hex
//! expected output). Only byte-aligned records (`Len` divisible by 8) are
//! usable by a byte-granular hasher; the rest are skipped. Keys must appear
//! in record order: a `Msg` or output line with no preceding `Len` is
//! rejected, where more tolerant readers fall back to the empty-message
//! placeholder. All published fixtures satisfy the ordering. The converter
//! writes the simplified two-field comma-separated form: lowercase message
//! hex, lowercase output hex, one record per line, between a header comment
//! naming the source and a trailing `# EOF` marker.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One byte-aligned record of a KAT fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KatRecord {
    pub message: Vec<u8>,
    pub output: Vec<u8>,
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn decode_hex(value: &str) -> io::Result<Vec<u8>> {
    hex::decode(value).map_err(|err| invalid(format!("bad hex {value:?}: {err}")))
}

/// Parse a KAT fixture, keeping only records whose length is a whole
/// number of bytes.
pub fn parse<R: BufRead>(reader: R) -> io::Result<Vec<KatRecord>> {
    let mut records = Vec::new();
    let mut len: Option<usize> = None;
    let mut msg: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line
            .split_once(" = ")
            .ok_or_else(|| invalid(format!("malformed KAT line {line:?}")))?;
        match key {
            "Len" => {
                len = Some(
                    value
                        .parse()
                        .map_err(|_| invalid(format!("bad Len value {value:?}")))?,
                );
            }
            "Msg" => {
                let bits = len.ok_or_else(|| invalid("Msg before Len".to_string()))?;
                // a zero-length record carries a placeholder Msg line
                msg = Some(if bits == 0 {
                    String::new()
                } else {
                    value.to_string()
                });
            }
            "MD" | "Squeezed" => {
                let bits = len.ok_or_else(|| invalid("output before Len".to_string()))?;
                let message = msg.take().ok_or_else(|| invalid("output before Msg".to_string()))?;
                if bits % 8 == 0 {
                    records.push(KatRecord {
                        message: decode_hex(&message)?,
                        output: decode_hex(value)?,
                    });
                } else {
                    log::debug!("skipping {bits}-bit KAT record");
                }
                len = None;
            }
            other => return Err(invalid(format!("unknown KAT key {other:?}"))),
        }
    }
    Ok(records)
}

/// Write records in the simplified comma-separated form.
pub fn convert<W: Write>(records: &[KatRecord], source: &str, mut writer: W) -> io::Result<()> {
    writeln!(writer, "# {source}")?;
    for record in records {
        writeln!(
            writer,
            "{},{}",
            hex::encode(&record.message),
            hex::encode(&record.output)
        )?;
    }
    writeln!(writer, "# EOF")
}

/// Convert a KAT fixture file into its simplified form.
pub fn convert_file(src: &Path, dst: &Path) -> io::Result<()> {
    let records = parse(BufReader::new(File::open(src)?))?;
    let source = src
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::info!("converting {} KAT records from {source}", records.len());
    convert(&records, &source, BufWriter::new(File::create(dst)?))
}
