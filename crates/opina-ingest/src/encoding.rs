//! Byte-level encoding inference for raw CSV exports.
//!
//! Source platforms export with whatever encoding their tooling picked:
//! UTF-8 (with or without BOM), UTF-16 from spreadsheet round-trips,
//! or a Windows-1252 flavor from older exporters. Detection is a
//! deterministic cascade ordered by confidence:
//!
//! 1. BOM sniffing (exact match, highest confidence)
//! 2. BOM-less UTF-16 detection via NUL-byte distribution
//! 3. Strict UTF-8 validation
//! 4. Windows-1252 fallback (never fails)

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE, WINDOWS_1252};

/// Bytes inspected by the statistical UTF-16 heuristic.
const SNIFF_WINDOW: usize = 4096;

/// Fraction of NUL bytes on one parity that marks BOM-less UTF-16.
const UTF16_NUL_RATIO: f64 = 0.4;

/// Decode raw file content, inferring the encoding.
///
/// Returns the decoded text and the name of the encoding used.
/// Undecodable byte sequences in the fallback path are replaced, never
/// fatal; whether the result is table-shaped is the delimiter probe's
/// call.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    if let Some((encoding, _bom_length)) = Encoding::for_bom(bytes) {
        // `decode` strips the matching BOM itself.
        let (text, _, _) = encoding.decode(bytes);
        return (text.into_owned(), encoding.name());
    }

    if let Some(encoding) = sniff_utf16_without_bom(bytes) {
        let (text, _, _) = encoding.decode(bytes);
        return (text.into_owned(), encoding.name());
    }

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return (text.into_owned(), UTF_8.name());
    }

    let (text, _, _) = WINDOWS_1252.decode(bytes);
    (text.into_owned(), WINDOWS_1252.name())
}

/// Detect BOM-less UTF-16 by the parity of NUL bytes.
///
/// ASCII-heavy UTF-16 text has a zero byte in nearly every code unit:
/// on odd offsets for little-endian, even offsets for big-endian.
fn sniff_utf16_without_bom(bytes: &[u8]) -> Option<&'static Encoding> {
    let sample = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    if sample.len() < 4 {
        return None;
    }
    let mut even_nuls = 0usize;
    let mut odd_nuls = 0usize;
    for (index, byte) in sample.iter().enumerate() {
        if *byte == 0 {
            if index % 2 == 0 {
                even_nuls += 1;
            } else {
                odd_nuls += 1;
            }
        }
    }
    let half = (sample.len() / 2).max(1) as f64;
    if odd_nuls as f64 / half >= UTF16_NUL_RATIO && even_nuls < odd_nuls / 4 {
        Some(UTF_16LE)
    } else if even_nuls as f64 / half >= UTF16_NUL_RATIO && odd_nuls < even_nuls / 4 {
        Some(UTF_16BE)
    } else {
        None
    }
}
