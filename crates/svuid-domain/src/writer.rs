//! Canonical byte writer.
//!
//! Strings use the JVM `DataOutput.writeUTF` layout: a big-endian `u16` byte
//! count followed by modified UTF-8. Absent strings write nothing at all.

/// Length prefix that announces a 32-bit length follows.
pub const LONG_STRING_ESCAPE: u16 = u16::MAX;

#[derive(Clone, Debug, Default)]
pub struct CanonicalWriter {
    buf: Vec<u8>,
}

impl CanonicalWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `s` if present.
    ///
    /// Encodings of 65535 bytes or more do not fit the `u16` prefix; they are
    /// written as [`LONG_STRING_ESCAPE`] followed by a big-endian `u32` length.
    pub fn write_string(&mut self, s: Option<&str>) {
        let Some(s) = s else {
            return;
        };

        let encoded = modified_utf8(s);
        match u16::try_from(encoded.len()) {
            Ok(len) if len != LONG_STRING_ESCAPE => {
                self.buf.extend_from_slice(&len.to_be_bytes());
            }
            _ => {
                let len = u32::try_from(encoded.len()).unwrap_or(u32::MAX);
                self.buf.extend_from_slice(&LONG_STRING_ESCAPE.to_be_bytes());
                self.buf.extend_from_slice(&len.to_be_bytes());
            }
        }
        self.buf.extend_from_slice(&encoded);
    }

    pub fn write_int32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Modified UTF-8: NUL takes two bytes and supplementary characters are
/// written as two 3-byte surrogate encodings.
fn modified_utf8(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | ((unit >> 6) & 0x1F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(s: Option<&str>) -> Vec<u8> {
        let mut w = CanonicalWriter::new();
        w.write_string(s);
        w.into_bytes()
    }

    #[test]
    fn absent_string_writes_nothing() {
        assert!(written(None).is_empty());
    }

    #[test]
    fn empty_string_writes_zero_length() {
        assert_eq!(written(Some("")), [0x00, 0x00]);
    }

    #[test]
    fn ascii_is_length_prefixed() {
        assert_eq!(written(Some("Foo")), [0x00, 0x03, b'F', b'o', b'o']);
    }

    #[test]
    fn nul_uses_two_byte_form() {
        assert_eq!(written(Some("\0")), [0x00, 0x02, 0xC0, 0x80]);
    }

    #[test]
    fn bmp_characters_match_utf8() {
        // U+00E9 and U+20AC encode the same in both forms.
        assert_eq!(written(Some("é")), [0x00, 0x02, 0xC3, 0xA9]);
        assert_eq!(written(Some("€")), [0x00, 0x03, 0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn supplementary_characters_use_surrogate_pairs() {
        // U+1F600 = D83D DE00
        assert_eq!(
            written(Some("😀")),
            [0x00, 0x06, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]
        );
    }

    #[test]
    fn long_strings_use_escaped_u32_length() {
        let s = "a".repeat(70_000);
        let bytes = written(Some(&s));
        assert_eq!(&bytes[..2], [0xFF, 0xFF]);
        assert_eq!(&bytes[2..6], 70_000u32.to_be_bytes());
        assert_eq!(bytes.len(), 6 + 70_000);
    }

    #[test]
    fn longest_u16_prefixed_string() {
        let s = "a".repeat(0xFFFE);
        let bytes = written(Some(&s));
        assert_eq!(&bytes[..2], [0xFF, 0xFE]);
        assert_eq!(bytes.len(), 2 + 0xFFFE);

        let s = "a".repeat(0xFFFF);
        let bytes = written(Some(&s));
        assert_eq!(&bytes[..6], [0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn int32_is_big_endian() {
        let mut w = CanonicalWriter::new();
        w.write_int32(0x0102_0304);
        w.write_int32(-1);
        assert_eq!(w.as_bytes(), [1, 2, 3, 4, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(w.len(), 8);
    }
}
