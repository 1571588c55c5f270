// FractionRenderer: digit-by-digit rendering after the decimal separator.

use crate::lexicon::LexiconTable;

/// Strip trailing zero digits; `"50"` and `"5"` render identically.
pub fn trim_trailing_zeros(digits: &str) -> &str {
    digits.trim_end_matches('0')
}

/// Render fraction digits individually after a separator word.
///
/// Digits are rendered in the unmarked default gender regardless of the
/// integer part's context. Trailing zeros must already be trimmed; an empty
/// digit string contributes nothing and returns an empty string.
pub fn render_fraction(digits: &str, separator_word: &str, lexicon: &LexiconTable) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let mut words: Vec<&str> = Vec::with_capacity(digits.len() + 1);
    words.push(separator_word);
    for b in digits.bytes() {
        debug_assert!(b.is_ascii_digit());
        let d = usize::from(b - b'0');
        words.push(if d == 0 { lexicon.zero } else { lexicon.units[d] });
    }
    words.join(lexicon.word_joiner)
}
