//! Sample loader: one numeric column out of a CSV or a plain list.

use std::io::{BufRead, BufReader, Read};

use tracing::debug;

use crate::core::error::{ParseError, ParseErrorKind};

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Replace U+2212 MINUS SIGN with an ASCII hyphen in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn is_nan_token(bytes: &[u8]) -> bool {
    bytes.eq_ignore_ascii_case(b"nan")
}

/// Parse one field. `nan` is kept; the histogram drops it.
#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseError> {
    if is_nan_token(bytes) {
        return Ok(f64::NAN);
    }
    lexical_core::parse::<f64>(bytes).map_err(|_| ParseError {
        line,
        kind: ParseErrorKind::BadFloat(String::from_utf8_lossy(bytes).into_owned()),
    })
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read column `column` (0-based) of comma-separated lines.
///
/// Blank lines and `#` comments are skipped. A first row whose field does not
/// parse as a number is treated as a header.
pub fn read_samples<R: Read>(src: R, column: usize) -> Result<Vec<f64>, ParseError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<f64>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        let fields: Vec<&[u8]> = buf.split(|&b| b == b',').map(trim).collect();
        let Some(&field) = fields.get(column) else {
            return Err(ParseError {
                line: line_no,
                kind: ParseErrorKind::MissingColumn {
                    want: column + 1,
                    got: fields.len(),
                },
            });
        };

        // simple header detection (non-numeric first row)
        if !saw_first {
            saw_first = true;
            if !is_nan_token(field) && lexical_core::parse::<f64>(field).is_err() {
                debug!(header = %String::from_utf8_lossy(field), "skipping header row");
                continue;
            }
        }

        data.push(parse_f64(field, line_no)?);
    }
    debug!(samples = data.len(), lines = line_no, "read samples");
    Ok(data)
}

/// `-` reads stdin.
pub fn read_samples_from_path(path: &str, column: usize) -> Result<Vec<f64>, ParseError> {
    if path == "-" {
        read_samples(std::io::stdin(), column)
    } else {
        use std::fs::File;
        read_samples(
            File::open(path).map_err(|e| ParseError {
                line: 0,
                kind: ParseErrorKind::Io(e),
            })?,
            column,
        )
    }
}
