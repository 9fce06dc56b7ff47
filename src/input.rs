//! Permissive integer scanner.
//!
//! Reads whitespace-separated integers from any [`BufRead`] into an
//! [`IntBuffer`]. Scanning stops at end of stream or at the first token that
//! does not parse as an `i32` (non-numeric text, out-of-range values, invalid
//! UTF-8). Everything read before that token is kept; nothing after it is.

use std::io::BufRead;

use tracing::debug;

use crate::error::Result;
use crate::int_buffer::IntBuffer;

/// Read integers until end of stream or the first unparsable token.
///
/// I/O errors from `reader` are returned; parse failures are not errors.
pub fn read_integers<R: BufRead>(mut reader: R) -> Result<IntBuffer> {
    let mut values = IntBuffer::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        for token in line
            .split(|b| b.is_ascii_whitespace())
            .filter(|t| !t.is_empty())
        {
            match parse_token(token) {
                Some(value) => values.push(value),
                None => {
                    debug!(
                        token = %String::from_utf8_lossy(token),
                        read = values.len(),
                        "stopping at unparsable token"
                    );
                    return Ok(values);
                }
            }
        }
    }

    Ok(values)
}

fn parse_token(token: &[u8]) -> Option<i32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}
