//! Naming convention detection.

use unicode_general_category::{GeneralCategory, get_general_category};

use super::Convention;

/// Classify `word` into exactly one naming convention.
///
/// Delimiters are checked before first-character casing, so `"Foo-Bar"` is
/// kebab and `"a_b-c"` is snake.
pub fn detect(word: &str) -> Convention {
    if word.contains(Convention::SNAKE_DELIMITER) {
        return Convention::Snake;
    }
    if word.contains(Convention::KEBAB_DELIMITER) {
        return Convention::Kebab;
    }
    match word.chars().next() {
        Some(c) if is_upper_letter(c) => Convention::Pascal,
        Some(c) if is_lower_letter(c) => Convention::Camel,
        // empty, digit, symbol, uncased or modifier letter
        _ => Convention::Unrecognized,
    }
}

/// Upper-case letter (`Lu`). Cased symbols such as `Ⓐ` and titlecase
/// letters such as `ǅ` do not count.
pub(super) fn is_upper_letter(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::UppercaseLetter)
}

/// Lower-case letter (`Ll`). Excludes `ª` (`Lo`) and `ʰ` (`Lm`).
pub(super) fn is_lower_letter(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::LowercaseLetter)
}
