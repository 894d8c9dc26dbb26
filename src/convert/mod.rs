//! One-hop naming convention conversion.
//!
//! A word is classified into a [`Convention`], split into fragments, and
//! rejoined under the fixed target of that convention:
//!
//! - snake_case → kebab-case
//! - kebab-case → PascalCase
//! - PascalCase → camelCase
//! - camelCase → snake_case
//!
//! Converting twice does not return to the original form.
//!
//! # Sub-modules
//!
//! - `detect` — convention detection
//! - `segment` — delimiter and case-boundary splitting
//! - `join` — capitalization and reassembly per target convention

mod detect;
mod join;
mod segment;


use std::fmt;

use crate::error::ConvertError;

pub use detect::detect;

/// Naming convention of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    Snake,
    Kebab,
    Pascal,
    Camel,
    /// No delimiter and the first character is neither upper- nor lower-case.
    Unrecognized,
}

impl Convention {
    pub const SNAKE_DELIMITER: char = '_';
    pub const KEBAB_DELIMITER: char = '-';

    /// Lower-case name used on the command line and in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Pascal => "pascal",
            Self::Camel => "camel",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// The convention a word of this convention is converted into.
    pub fn target(&self) -> Option<Convention> {
        match self {
            Self::Snake => Some(Self::Kebab),
            Self::Kebab => Some(Self::Pascal),
            Self::Pascal => Some(Self::Camel),
            Self::Camel => Some(Self::Snake),
            Self::Unrecognized => None,
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert `word` one hop along snake → kebab → pascal → camel → snake.
///
/// Returns [`ConvertError::UnsupportedFormat`] when the word's convention
/// cannot be detected.
pub fn convert(word: &str) -> Result<String, ConvertError> {
    let convention = detect(word);
    let (target, join_rule): (Convention, fn(&[&str]) -> String) = match convention.target() {
        Some(Convention::Kebab) => (Convention::Kebab, join::to_kebab),
        Some(Convention::Pascal) => (Convention::Pascal, join::to_pascal),
        Some(Convention::Camel) => (Convention::Camel, join::to_camel),
        Some(Convention::Snake) => (Convention::Snake, join::to_snake),
        Some(Convention::Unrecognized) | None => {
            log::debug!("no convention detected for {word:?}");
            return Err(ConvertError::UnsupportedFormat {
                word: word.to_string(),
            });
        }
    };

    let fragments = segment::segment(word, convention);
    log::debug!(
        "{word:?}: {convention} -> {target}, {} fragment(s)",
        fragments.len()
    );
    log::trace!("fragments: {fragments:?}");

    Ok(join_rule(&fragments))
}
