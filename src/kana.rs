// Katakana block mapped onto hiragana: ァ (U+30A1) through ヶ (U+30F6).
pub const KATAKANA_FIRST: char = '\u{30A1}';
pub const KATAKANA_LAST: char = '\u{30F6}';

// Distance between a katakana and its hiragana counterpart.
pub const KANA_OFFSET: u32 = 0x60;

/// Map a single katakana character to hiragana. Anything outside the
/// ァ..=ヶ block is returned unchanged.
pub fn to_hiragana(c: char) -> char {
    if (KATAKANA_FIRST..=KATAKANA_LAST).contains(&c) {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Convert every katakana character of `input` to hiragana.
///
/// The result has the same number of characters as the input. Hiragana,
/// kanji, the prolonged sound mark, iteration marks and half-width
/// katakana pass through untouched.
pub fn katakana_to_hiragana(input: &str) -> String {
    input.chars().map(to_hiragana).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_region_prefix() {
        assert_eq!(katakana_to_hiragana("ガラル"), "がらる");
    }

    #[test]
    fn converts_full_name() {
        assert_eq!(katakana_to_hiragana("フシギダネ"), "ふしぎだね");
        assert_eq!(katakana_to_hiragana("キャタピー"), "きゃたぴー");
    }

    #[test]
    fn block_edges_are_mapped() {
        assert_eq!(to_hiragana('ァ'), 'ぁ');
        assert_eq!(to_hiragana('ヵ'), 'ゕ');
        assert_eq!(to_hiragana('ヶ'), 'ゖ');
        assert_eq!(to_hiragana('ヴ'), 'ゔ');
    }

    #[test]
    fn every_char_in_block_shifts_by_offset() {
        for code in KATAKANA_FIRST as u32..=KATAKANA_LAST as u32 {
            let c = char::from_u32(code).unwrap();
            assert_eq!(to_hiragana(c) as u32, code - KANA_OFFSET, "char {c}");
        }
    }

    #[test]
    fn chars_outside_block_pass_through() {
        // ヷ, prolonged sound mark, iteration marks, middle dot
        for c in ['ヷ', 'ヺ', 'ー', 'ヽ', 'ヾ', '・', 'ｶ', 'ﾞ', 'ゝ', '゠'] {
            assert_eq!(to_hiragana(c), c, "char {c}");
        }
        assert_eq!(katakana_to_hiragana("Mr. Mime 2"), "Mr. Mime 2");
        assert_eq!(katakana_to_hiragana("ニドラン♀"), "にどらん♀");
        assert_eq!(katakana_to_hiragana("漢字とひらがな"), "漢字とひらがな");
    }

    #[test]
    fn preserves_char_count() {
        for s in ["", "ミュウツー", "ｶﾀｶﾅ", "mixed カナ and 文字"] {
            assert_eq!(
                katakana_to_hiragana(s).chars().count(),
                s.chars().count()
            );
        }
    }

    #[test]
    fn idempotent() {
        for s in ["ガラルポニータ", "ぴかちゅう", "Pikachu", "ｶﾞﾗﾙ", "ヷヸ"] {
            let once = katakana_to_hiragana(s);
            assert_eq!(katakana_to_hiragana(&once), once);
        }
    }
}
