//! Byte-to-text decoding with encoding fallback.

use std::fmt;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Encoding a byte buffer was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Windows1252,
    Latin1,
}

impl TextEncoding {
    /// Display label, e.g. for a status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Windows1252 => "Windows-1252",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    fn from_bom_encoding(encoding: &'static Encoding) -> Option<Self> {
        if encoding == UTF_8 {
            Some(Self::Utf8)
        } else if encoding == UTF_16LE {
            Some(Self::Utf16Le)
        } else if encoding == UTF_16BE {
            Some(Self::Utf16Be)
        } else {
            None
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded text together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Decodes bytes with the first encoding that yields usable text.
///
/// A byte-order mark decides the encoding outright. Otherwise the order is
/// strict UTF-8, BOM-less UTF-16 (only when the bytes look like it),
/// Windows-1252, then Latin-1. Output containing NUL characters is treated
/// as binary and rejected.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedText> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let body = &bytes[bom_len..];
        let text_encoding =
            TextEncoding::from_bom_encoding(encoding).ok_or(IngestError::Undecodable)?;
        let text = decode_strict(encoding, body).ok_or(IngestError::Undecodable)?;
        debug!(encoding = %text_encoding, "decoded input using byte-order mark");
        return Ok(DecodedText {
            text,
            encoding: text_encoding,
        });
    }

    let mut candidates = vec![TextEncoding::Utf8];
    if let Some(utf16) = sniff_utf16(bytes) {
        candidates.push(utf16);
    }
    candidates.extend([TextEncoding::Windows1252, TextEncoding::Latin1]);

    for candidate in candidates {
        let Some(text) = decode_as(candidate, bytes) else {
            continue;
        };
        if text.contains('\0') {
            debug!(encoding = %candidate, "decoded text contains NUL characters");
            continue;
        }
        if candidate != TextEncoding::Utf8 {
            warn!(encoding = %candidate, "input is not valid UTF-8, decoded with fallback");
        }
        return Ok(DecodedText {
            text,
            encoding: candidate,
        });
    }
    Err(IngestError::Undecodable)
}

/// Bytes with no assigned character in Windows-1252.
const WINDOWS_1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

fn decode_as(encoding: TextEncoding, bytes: &[u8]) -> Option<String> {
    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_string),
        TextEncoding::Utf16Le => decode_strict(UTF_16LE, bytes),
        TextEncoding::Utf16Be => decode_strict(UTF_16BE, bytes),
        TextEncoding::Windows1252 => {
            if bytes.iter().any(|byte| WINDOWS_1252_UNDEFINED.contains(byte)) {
                None
            } else {
                decode_strict(WINDOWS_1252, bytes)
            }
        }
        TextEncoding::Latin1 => Some(bytes.iter().copied().map(char::from).collect()),
    }
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(std::borrow::Cow::into_owned)
}

/// Guesses BOM-less UTF-16 from where NUL bytes sit.
///
/// Mostly-ASCII UTF-16 text has a NUL in every other byte: the odd bytes
/// for little-endian, the even bytes for big-endian.
fn sniff_utf16(bytes: &[u8]) -> Option<TextEncoding> {
    if bytes.len() < 2 || !bytes.len().is_multiple_of(2) {
        return None;
    }
    let pairs = bytes.len() / 2;
    let (mut even_nul, mut odd_nul) = (0usize, 0usize);
    for pair in bytes.chunks_exact(2) {
        if pair[0] == 0 {
            even_nul += 1;
        }
        if pair[1] == 0 {
            odd_nul += 1;
        }
    }
    // At least half of the code units must carry a NUL byte on one side only.
    if odd_nul * 2 >= pairs && even_nul * 4 < pairs {
        Some(TextEncoding::Utf16Le)
    } else if even_nul * 2 >= pairs && odd_nul * 4 < pairs {
        Some(TextEncoding::Utf16Be)
    } else {
        None
    }
}
