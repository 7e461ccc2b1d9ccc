//! Combining diacritic (shakl) membership

/// True for the eight tashkeel marks dropped before shaping: the tanwin
/// forms, fatha, damma, kasra, shadda, and sukun
pub fn is_shakl(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}')
}
