// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named text encodings for [`crate::PrimitiveSink::put_string`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HashError;

/// Byte substituted for characters a charset cannot represent.
const REPLACEMENT: u8 = b'?';

/// Byte-order mark written ahead of [`Charset::Utf16`] output.
const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

/// A text encoding used to turn a string into bytes before hashing.
///
/// Unmappable characters in the single-byte charsets become `?`, one per
/// character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// UTF-8.
    Utf8,
    /// UTF-16, big-endian, no byte-order mark.
    Utf16Be,
    /// UTF-16, little-endian, no byte-order mark.
    Utf16Le,
    /// UTF-16 with a big-endian byte-order mark, then big-endian units.
    Utf16,
    /// ISO-8859-1 (Latin-1).
    Iso8859_1,
    /// 7-bit US-ASCII.
    UsAscii,
}

impl Charset {
    /// Every supported charset.
    pub const ALL: [Self; 6] = [
        Self::Utf8,
        Self::Utf16Be,
        Self::Utf16Le,
        Self::Utf16,
        Self::Iso8859_1,
        Self::UsAscii,
    ];

    /// Canonical name, as printed by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16 => "UTF-16",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::UsAscii => "US-ASCII",
        }
    }

    /// Look up a charset by canonical name or common alias, ignoring case.
    pub fn for_name(name: &str) -> Result<Self, HashError> {
        let folded = name.trim().to_ascii_uppercase().replace('_', "-");
        let charset = match folded.as_str() {
            "UTF-8" | "UTF8" => Self::Utf8,
            "UTF-16BE" | "UTF16BE" | "UTF16-BE" | "UNICODEBIGUNMARKED" => Self::Utf16Be,
            "UTF-16LE" | "UTF16LE" | "UTF16-LE" | "UNICODELITTLEUNMARKED" => Self::Utf16Le,
            "UTF-16" | "UTF16" | "UNICODE" => Self::Utf16,
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "L1" => Self::Iso8859_1,
            "US-ASCII" | "ASCII" | "ISO646-US" => Self::UsAscii,
            _ => return Err(HashError::UnsupportedCharset(name.to_owned())),
        };
        Ok(charset)
    }

    /// Encode `text` in this charset.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16 => {
                if text.is_empty() {
                    return Vec::new();
                }
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(&UTF16_BOM);
                out.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                out
            }
            Self::Iso8859_1 => narrow(text, 0xFF),
            Self::UsAscii => narrow(text, 0x7F),
        }
    }
}

/// Single-byte encoding of every char up to `max`, `?` otherwise.
fn narrow(text: &str, max: u32) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = u32::from(c);
            if code <= max {
                u8::try_from(code).unwrap_or(REPLACEMENT)
            } else {
                REPLACEMENT
            }
        })
        .collect()
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_name(s)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for charset in Charset::ALL {
            assert_eq!(Charset::for_name(charset.name()).unwrap(), charset);
            assert_eq!(charset.to_string().parse::<Charset>().unwrap(), charset);
        }
    }

    #[test]
    fn lookup_ignores_case_and_underscores() {
        assert_eq!(Charset::for_name("utf_8").unwrap(), Charset::Utf8);
        assert_eq!(Charset::for_name("Latin1").unwrap(), Charset::Iso8859_1);
        assert_eq!(Charset::for_name(" ascii ").unwrap(), Charset::UsAscii);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Charset::for_name("EBCDIC").unwrap_err();
        assert_eq!(err, HashError::UnsupportedCharset("EBCDIC".into()));
    }

    #[test]
    fn utf16_variants() {
        assert_eq!(Charset::Utf16Be.encode("A\u{e9}"), [0x00, 0x41, 0x00, 0xE9]);
        assert_eq!(Charset::Utf16Le.encode("A\u{e9}"), [0x41, 0x00, 0xE9, 0x00]);
        assert_eq!(Charset::Utf16.encode("A"), [0xFE, 0xFF, 0x00, 0x41]);
        assert!(Charset::Utf16.encode("").is_empty());
    }

    #[test]
    fn single_byte_charsets_replace_unmappable() {
        assert_eq!(Charset::Iso8859_1.encode("\u{e9}\u{20ac}"), [0xE9, b'?']);
        assert_eq!(Charset::UsAscii.encode("a\u{e9}"), [b'a', b'?']);
        assert_eq!(Charset::UsAscii.encode("\u{1F600}"), [b'?']);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Charset::Iso8859_1).unwrap();
        assert_eq!(json, "\"iso8859-1\"");
        let back: Charset = serde_json::from_str("\"utf16-le\"").unwrap();
        assert_eq!(back, Charset::Utf16Le);
    }
}
