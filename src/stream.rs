use std::io::BufRead;

use log::trace;

use crate::big_int::BigInt;
use crate::error::{Error, Result};

impl<const DIGITS: usize> BigInt<DIGITS> {
    /// Reads the next whitespace-delimited token from `reader` and parses it.
    ///
    /// Leading ASCII whitespace is skipped; the delimiter after the token is
    /// left in the reader. At most a sign and `DIGITS` digits are buffered, a
    /// longer token stops reading and fails with [`Error::Overflow`]. Returns
    /// [`Error::Empty`] when the input ends before a token starts.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Self> {
        let limit = DIGITS + 1;
        let mut token = Vec::new();
        let mut truncated = false;
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else if token.len() == limit {
                    truncated = true;
                    done = true;
                    break;
                } else {
                    token.push(b);
                }
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            return Err(Error::Empty);
        }
        if let Some(err) = invalid_byte(&token) {
            trace!(target: "fixed_big_num", "rejected stream token: {}", err);
            return Err(err);
        }
        if truncated {
            return Err(Self::overflow("read"));
        }
        // only ASCII sign and digits remain
        let text: String = token.iter().map(|&b| b as char).collect();
        text.parse()
    }
}

/// Locates the first byte that cannot belong to `['+'|'-'] digit*`, reporting
/// it by its byte offset in the token.
fn invalid_byte(token: &[u8]) -> Option<Error> {
    let start = usize::from(matches!(token.first(), Some(b'+') | Some(b'-')));
    let index = start + token[start..].iter().position(|b| !b.is_ascii_digit())?;
    let tail = &token[index..];
    let decoded = match std::str::from_utf8(tail) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&tail[..err.valid_up_to()]).unwrap_or_default(),
    };
    Some(match decoded.chars().next() {
        Some(found) => Error::InvalidDigit { index, found },
        None => Error::InvalidByte { index, byte: tail[0] },
    })
}
