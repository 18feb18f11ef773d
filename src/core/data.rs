//! Line-oriented sample loader with zero-allocation float parsing.
//!
//! Accepts numbers separated by whitespace, `,` or `;`, any number per
//! line. Blank lines and `#` comments are skipped, and so is a leading
//! header line whose first field isn't numeric. U+2212 MINUS SIGN is read
//! as `-`.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
};

use thiserror::Error;

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseSamplesError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid number '{text}'")]
    BadNumber { text: String },
    #[error("non-finite number '{text}'")]
    NonFinite { text: String },
}

// --- Helpers ---
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b',' || b == b';'
}

#[inline]
fn fields(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.split(|&b| is_separator(b)).filter(|f| !f.is_empty())
}

/// Rewrite U+2212 (`E2 88 92`) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseSamplesError> {
    let text = || String::from_utf8_lossy(bytes).into_owned();
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseSamplesError {
        line,
        kind: ParseErrorKind::BadNumber { text: text() },
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseSamplesError {
            line,
            kind: ParseErrorKind::NonFinite { text: text() },
        })
    }
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read every sample from `src`. Empty input yields an empty vector.
pub fn read_samples<R: Read>(src: R) -> Result<Vec<f64>, ParseSamplesError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<f64>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseSamplesError {
                line: line_no,
                kind: ParseErrorKind::Io(e),
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let mut it = fields(&buf).peekable();
        match it.peek() {
            None => continue,
            Some(f) if f.starts_with(b"#") => continue,
            Some(f) if !saw_first => {
                saw_first = true;
                // header detection: non-numeric first field
                if lexical_core::parse::<f64>(f).is_err() {
                    continue;
                }
            }
            Some(_) => {}
        }

        for field in it {
            data.push(parse_f64(field, line_no)?);
        }
    }
    Ok(data)
}

/// `-` reads stdin.
pub fn read_samples_from_path(path: &str) -> Result<Vec<f64>, ParseSamplesError> {
    if path == "-" {
        read_samples(std::io::stdin().lock())
    } else {
        read_samples(File::open(path).map_err(|e| ParseSamplesError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
