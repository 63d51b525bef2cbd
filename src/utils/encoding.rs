//! Windows-1252, the code page of CSV files saved by Excel on Windows.
//! Bytes 0xA0-0xFF match Latin-1; 0x80-0x9F carry the extra characters below.

/// Characters for bytes 0x80-0x9F. Unassigned bytes keep their C1 code point.
const HIGH: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

pub fn decode_cp1252(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => HIGH[(b - 0x80) as usize],
            _ => b as char,
        })
        .collect()
}

/// Encode `text` as cp1252; characters outside the code page become `?`.
pub fn encode_cp1252(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            if let Some(pos) = HIGH.iter().position(|&h| h == c) {
                return 0x80 + pos as u8;
            }
            match c as u32 {
                n if n < 0x80 || (0xA0..=0xFF).contains(&n) => n as u8,
                _ => b'?',
            }
        })
        .collect()
}
