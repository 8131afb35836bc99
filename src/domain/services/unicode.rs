//! Encoding verification and decoding for Urdu text.

use crate::utils::error::{PhilologyError, Result};
use serde::{Deserialize, Serialize};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Arabic block, which carries the Urdu letters, digits and marks.
pub fn is_urdu_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    #[cfg_attr(feature = "cli", value(name = "utf-8"))]
    Utf8,
    #[serde(rename = "utf-8-sig")]
    #[cfg_attr(feature = "cli", value(name = "utf-8-sig"))]
    Utf8Sig,
    #[serde(rename = "utf-16")]
    #[cfg_attr(feature = "cli", value(name = "utf-16"))]
    Utf16,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf8Sig => "UTF-8-SIG",
            TextEncoding::Utf16 => "UTF-16",
        }
    }

    /// Decodes `bytes`. In strict mode malformed input is an error,
    /// otherwise it is replaced with U+FFFD.
    pub fn decode(&self, bytes: &[u8], strict: bool) -> Result<String> {
        self.decode_checked(bytes, strict).map(|decoded| decoded.text)
    }

    /// Like [`decode`](Self::decode), also telling whether any input was replaced.
    pub fn decode_checked(&self, bytes: &[u8], strict: bool) -> Result<Decoded> {
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                match std::str::from_utf8(body) {
                    Ok(text) => Ok(Decoded::clean(text.to_string())),
                    Err(e) if strict => Err(self.malformed(e.to_string())),
                    Err(_) => Ok(Decoded::lossy(String::from_utf8_lossy(body).into_owned())),
                }
            }
            TextEncoding::Utf16 => self.decode_utf16(bytes, strict),
        }
    }

    fn malformed(&self, message: String) -> PhilologyError {
        PhilologyError::EncodingError {
            encoding: self.label().to_string(),
            message,
        }
    }

    fn decode_utf16(&self, bytes: &[u8], strict: bool) -> Result<Decoded> {
        let (big_endian, body) = match bytes {
            [0xFE, 0xFF, rest @ ..] => (true, rest),
            [0xFF, 0xFE, rest @ ..] => (false, rest),
            _ => (false, bytes),
        };

        let truncated = body.len() % 2 != 0;
        if truncated && strict {
            return Err(self.malformed(format!("odd number of bytes ({})", body.len())));
        }

        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| {
                if big_endian {
                    u16::from_be_bytes([pair[0], pair[1]])
                } else {
                    u16::from_le_bytes([pair[0], pair[1]])
                }
            })
            .collect();

        let mut decoded = match String::from_utf16(&units) {
            Ok(text) => Decoded::clean(text),
            Err(e) if strict => return Err(self.malformed(e.to_string())),
            Err(_) => Decoded::lossy(String::from_utf16_lossy(&units)),
        };

        // 不成對的尾端位元組同樣以 U+FFFD 取代
        if truncated {
            decoded.text.push('\u{FFFD}');
            decoded.replaced = true;
        }

        Ok(decoded)
    }
}

/// Decoded text plus whether malformed input was replaced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub replaced: bool,
}

impl Decoded {
    fn clean(text: String) -> Self {
        Self {
            text,
            replaced: false,
        }
    }

    fn lossy(text: String) -> Self {
        Self {
            text,
            replaced: true,
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtlCheck {
    pub urdu_char_count: usize,
    pub urdu_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    #[serde(skip)]
    pub text: String,
    pub length_chars: usize,
    pub length_bytes: usize,
    pub encoding: String,
    pub valid: bool,
    pub encoding_status: String,
    pub rtl_check: RtlCheck,
}

#[derive(Debug, Clone, Default)]
pub struct UnicodeVerifier;

impl UnicodeVerifier {
    pub fn new() -> Self {
        Self
    }

    pub fn verify(&self, text: &str) -> VerificationReport {
        VerificationReport {
            text: text.to_string(),
            length_chars: text.chars().count(),
            length_bytes: text.len(),
            encoding: "UTF-8".to_string(),
            valid: true,
            encoding_status: "✓ Valid UTF-8".to_string(),
            rtl_check: self.check_rtl(text),
        }
    }

    /// Verifies raw bytes; invalid sequences are reported rather than rejected.
    pub fn verify_bytes(&self, bytes: &[u8]) -> VerificationReport {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.verify(text),
            Err(e) => {
                tracing::debug!("Invalid UTF-8 at byte {}", e.valid_up_to());
                let text = String::from_utf8_lossy(bytes).into_owned();
                let mut report = self.verify(&text);
                report.length_bytes = bytes.len();
                report.valid = false;
                report.encoding_status = "✗ Invalid UTF-8 encoding".to_string();
                report
            }
        }
    }

    pub fn check_rtl(&self, text: &str) -> RtlCheck {
        let total = text.chars().count();
        let urdu_char_count = text.chars().filter(|c| is_urdu_char(*c)).count();
        let urdu_percentage = if total == 0 {
            0.0
        } else {
            urdu_char_count as f64 / total as f64 * 100.0
        };

        RtlCheck {
            urdu_char_count,
            urdu_percentage,
        }
    }

    pub fn render_report(&self, report: &VerificationReport) -> String {
        let rule = "=".repeat(50);
        let mut lines = vec![
            rule.clone(),
            "URDU TEXT VERIFICATION REPORT".to_string(),
            rule.clone(),
        ];
        if !report.text.is_empty() {
            lines.push(format!("Text: {}", report.text));
        }
        lines.push(format!("Characters: {}", report.length_chars));
        lines.push(format!("Bytes (UTF-8): {}", report.length_bytes));
        lines.push(format!("Encoding: {}", report.encoding_status));
        lines.push(format!(
            "Urdu Characters: {} ({:.1}%)",
            report.rtl_check.urdu_char_count, report.rtl_check.urdu_percentage
        ));
        lines.push(rule);
        lines.join("\n")
    }
}

/// Each char with its scalar value, e.g. `('غ', "U+063A")`.
pub fn code_points(text: &str) -> Vec<(char, String)> {
    text.chars()
        .map(|c| (c, format!("U+{:04X}", c as u32)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_counts_chars_and_bytes() {
        let verifier = UnicodeVerifier::new();
        let report = verifier.verify("غم ہیں");

        assert_eq!(report.length_chars, 6);
        // 5 two-byte letters and one ASCII space
        assert_eq!(report.length_bytes, 11);
        assert!(report.valid);
        assert_eq!(report.rtl_check.urdu_char_count, 5);
        assert!((report.rtl_check.urdu_percentage - 83.333).abs() < 0.01);
    }

    #[test]
    fn test_verify_empty_text() {
        let report = UnicodeVerifier::new().verify("");
        assert_eq!(report.length_chars, 0);
        assert_eq!(report.rtl_check.urdu_percentage, 0.0);
    }

    #[test]
    fn test_verify_invalid_bytes() {
        let verifier = UnicodeVerifier::new();
        let mut bytes = "دل".as_bytes().to_vec();
        bytes.push(0xFF);

        let report = verifier.verify_bytes(&bytes);
        assert!(!report.valid);
        assert_eq!(report.length_bytes, 5);
        assert_eq!(report.encoding_status, "✗ Invalid UTF-8 encoding");
        assert_eq!(report.rtl_check.urdu_char_count, 2);
    }

    #[test]
    fn test_render_report() {
        let verifier = UnicodeVerifier::new();
        let rendered = verifier.render_report(&verifier.verify("دل abc"));

        assert!(rendered.contains("URDU TEXT VERIFICATION REPORT"));
        assert!(rendered.contains("Characters: 6"));
        assert!(rendered.contains("Urdu Characters: 2 (33.3%)"));
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("غالب".as_bytes());

        assert_eq!(TextEncoding::Utf8Sig.decode(&bytes, true).unwrap(), "غالب");
        assert_eq!(TextEncoding::Utf8.decode(&bytes, true).unwrap(), "غالب");
    }

    #[test]
    fn test_decode_strict_and_lossy() {
        let bytes = [0x61, 0xFF, 0x62];
        assert!(matches!(
            TextEncoding::Utf8.decode(&bytes, true),
            Err(PhilologyError::EncodingError { .. })
        ));
        assert_eq!(TextEncoding::Utf8.decode(&bytes, false).unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        let mut le = vec![0xFF, 0xFE];
        for unit in "دل".encode_utf16() {
            le.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(TextEncoding::Utf16.decode(&le, true).unwrap(), "دل");

        let mut be = vec![0xFE, 0xFF];
        for unit in "دل".encode_utf16() {
            be.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(TextEncoding::Utf16.decode(&be, true).unwrap(), "دل");
    }

    #[test]
    fn test_decode_utf16_odd_trailing_byte() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "دل".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes.push(0x41);

        assert!(matches!(
            TextEncoding::Utf16.decode(&bytes, true),
            Err(PhilologyError::EncodingError { .. })
        ));

        let decoded = TextEncoding::Utf16.decode_checked(&bytes, false).unwrap();
        assert_eq!(decoded.text, "دل\u{FFFD}");
        assert!(decoded.replaced);
    }

    #[test]
    fn test_decode_checked_keeps_genuine_replacement_char() {
        let bytes = "دل \u{FFFD} ہے".as_bytes();

        let decoded = TextEncoding::Utf8.decode_checked(bytes, false).unwrap();
        assert_eq!(decoded.text, "دل \u{FFFD} ہے");
        assert!(!decoded.replaced);

        let broken = TextEncoding::Utf8.decode_checked(&[0x61, 0xFF], false).unwrap();
        assert!(broken.replaced);
    }

    #[test]
    fn test_code_points() {
        let points = code_points("غم");
        assert_eq!(points[0], ('غ', "U+063A".to_string()));
        assert_eq!(points[1], ('م', "U+0645".to_string()));
    }
}
