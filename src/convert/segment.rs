//! Word segmentation: split a word into fragments by delimiter or by
//! upper-case boundary.

use super::Convention;
use super::detect::is_upper_letter;

/// Split a word into its fragments according to the detected convention.
///
/// Snake and kebab words split on their delimiter; pascal and camel words
/// split on upper-case boundaries. An unrecognized word is returned whole.
pub(super) fn segment(word: &str, convention: Convention) -> Vec<&str> {
    match convention {
        Convention::Snake => split_delimited(word, Convention::SNAKE_DELIMITER),
        Convention::Kebab => split_delimited(word, Convention::KEBAB_DELIMITER),
        Convention::Pascal | Convention::Camel => split_case_boundaries(word),
        Convention::Unrecognized => vec![word],
    }
}

/// Split on every occurrence of `delimiter`.
///
/// Leading, trailing and consecutive delimiters yield empty fragments, so
/// `"foo__bar"` becomes `["foo", "", "bar"]`.
pub(super) fn split_delimited(word: &str, delimiter: char) -> Vec<&str> {
    word.split(delimiter).collect()
}

/// Split before every upper-case letter (`Lu`) after the first character.
///
/// A word without internal upper-case letters (or of at most one character)
/// is a single fragment. Consecutive capitals each start their own fragment:
/// `"HTMLParser"` becomes `["H", "T", "M", "L", "Parser"]`.
pub(super) fn split_case_boundaries(word: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut last = 0;

    for (i, c) in word.char_indices().skip(1) {
        if is_upper_letter(c) {
            fragments.push(&word[last..i]);
            last = i;
        }
    }
    fragments.push(&word[last..]);

    fragments
}
