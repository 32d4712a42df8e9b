use obra_layout::win_ansi_code;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for a WinAnsi font. Characters the encoding lacks become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_code(c).unwrap_or(b'?')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flips_from_top_to_bottom_origin() {
        assert_eq!(flip_y(0.0, 842.0), 842.0);
        assert_eq!(flip_y(842.0, 842.0), 0.0);
        assert_eq!(flip_y(100.0, 842.0), 742.0);
    }

    #[test]
    fn test_latin1_text_is_kept() {
        assert_eq!(to_win_ansi("Código"), vec![b'C', 0xF3, b'd', b'i', b'g', b'o']);
        assert_eq!(to_win_ansi("m²"), vec![b'm', 0xB2]);
        assert_eq!(to_win_ansi("≥ 5"), b"? 5".to_vec());
    }

    #[test]
    fn test_windows_punctuation_uses_its_own_codes() {
        assert_eq!(
            to_win_ansi("Casa \u{2013} \u{201C}A\u{201D} 5\u{20AC}"),
            vec![b'C', b'a', b's', b'a', b' ', 0x96, b' ', 0x93, b'A', 0x94, b' ', b'5', 0x80]
        );
    }

    #[test]
    fn test_c1_controls_are_not_passed_through() {
        assert_eq!(to_win_ansi("a\u{0085}b\u{009F}"), b"a?b?".to_vec());
    }
}
