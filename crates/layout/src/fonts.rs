//! Metrics for the two standard PDF fonts used by the report.
//!
//! Only advance widths are needed: every line is single-line text, and the one
//! right-aligned figure needs its width to get an exact x position.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    pub fn postscript_name(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    pub const ALL: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];
}

// Advance widths in 1/1000 em for U+0020..=U+007E, from the Adobe AFM files.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Advance widths for WinAnsi codes 0x80..=0xFF. Codes the encoding leaves
// unassigned are 0 and never produced by `win_ansi_code`.
#[rustfmt::skip]
const HELVETICA_HIGH_WIDTHS: [u16; 128] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_HIGH_WIDTHS: [u16; 128] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

// Characters WinAnsiEncoding places at 0x80..=0x9F instead of the C1 controls.
const WIN_ANSI_EXTRAS: [(char, u8); 27] = [
    ('\u{20AC}', 0x80), ('\u{201A}', 0x82), ('\u{0192}', 0x83), ('\u{201E}', 0x84),
    ('\u{2026}', 0x85), ('\u{2020}', 0x86), ('\u{2021}', 0x87), ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89), ('\u{0160}', 0x8A), ('\u{2039}', 0x8B), ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E), ('\u{2018}', 0x91), ('\u{2019}', 0x92), ('\u{201C}', 0x93),
    ('\u{201D}', 0x94), ('\u{2022}', 0x95), ('\u{2013}', 0x96), ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98), ('\u{2122}', 0x99), ('\u{0161}', 0x9A), ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C), ('\u{017E}', 0x9E), ('\u{0178}', 0x9F),
];

/// Byte that stands for `ch` in WinAnsiEncoding, if the encoding has one.
///
/// Control characters, including the C1 range U+0080..=U+009F, have no code.
pub fn win_ansi_code(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{00A0}'..='\u{00FF}' => Some(ch as u8),
        _ => WIN_ANSI_EXTRAS
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, code)| *code),
    }
}

/// Advance width of an encoded byte. Unencodable text is drawn as `?`.
fn code_width(code: u8, face: FontFace) -> u16 {
    let (low, high) = match face {
        FontFace::Regular => (&HELVETICA_WIDTHS, &HELVETICA_HIGH_WIDTHS),
        FontFace::Bold => (&HELVETICA_BOLD_WIDTHS, &HELVETICA_BOLD_HIGH_WIDTHS),
    };
    match code {
        0x20..=0x7E => low[usize::from(code - 0x20)],
        0x80..=0xFF => high[usize::from(code - 0x80)],
        _ => 0,
    }
}

fn char_width(ch: char, face: FontFace) -> u16 {
    code_width(win_ansi_code(ch).unwrap_or(b'?'), face)
}

/// Width in points of `text` set in `face` at `font_size`.
pub fn text_width(text: &str, face: FontFace, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, face))).sum();
    units as f32 * font_size / 1000.0
}
