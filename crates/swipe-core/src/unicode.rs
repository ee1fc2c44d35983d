//! Character classification for word-list entries.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters that contribute to a dictionary entry.
///
/// Anything for which this returns `false` (digits, punctuation, apostrophes,
/// hyphens, whitespace) is skipped when inserting, so "co-op" collapses to
/// "COOP".
/// Only general category L qualifies: letter numbers such as 'Ⅻ' and
/// combining marks such as Devanagari 'ि' do not.
pub fn is_word_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Uppercase a single character, keeping it unchanged when the uppercase form
/// is not exactly one character (e.g. 'ß' stays 'ß').
pub fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Slot index for an ASCII uppercase letter (`'A'` → 0 … `'Z'` → 25).
pub fn ascii_slot(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('É'));
        assert!(is_word_char('ж'));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('7'));
        assert!(!is_word_char(' '));
        assert!(is_word_char('ǅ'));
        assert!(is_word_char('ʰ'));
        assert!(is_word_char('क'));
        assert!(!is_word_char('\u{216B}'));
        assert!(!is_word_char('\u{093F}'));
        assert!(!is_word_char('\u{0902}'));
        assert!(!is_word_char('\u{FFFD}'));
    }

    #[test]
    fn test_to_upper() {
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_upper('Q'), 'Q');
        assert_eq!(to_upper('é'), 'É');
        assert_eq!(to_upper('ß'), 'ß');
    }

    #[test]
    fn test_ascii_slot() {
        assert_eq!(ascii_slot('A'), Some(0));
        assert_eq!(ascii_slot('Z'), Some(25));
        assert_eq!(ascii_slot('a'), None);
        assert_eq!(ascii_slot('É'), None);
    }
}
