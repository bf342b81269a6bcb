//! Module-level bar/space stream for normalized Codabar content.

use std::fmt;
use std::ops::Deref;

use crate::encoding::{CharacterCode, EncodeError, TEN_MODULE_SET, pattern_for};
use crate::guards::Normalized;

/// Modules contributed by the two guard characters together.
const GUARD_MODULES: usize = 20;

/// Ordered bar (`true`) / space (`false`) modules, one entry per module width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleSequence {
    modules: Vec<bool>,
}

impl ModuleSequence {
    /// Build the stream for guard-checked content.
    pub fn build(normalized: &Normalized<'_>) -> Result<Self, EncodeError> {
        let expected = encoded_len(normalized)?;
        let count = normalized.chars().count();
        let mut modules = Vec::with_capacity(expected);

        for (idx, ch) in normalized.chars().enumerate() {
            let is_guard = idx == 0 || idx + 1 == count;
            modules.extend(character_modules(pattern_for(ch, is_guard)?));
            if idx + 1 < count {
                modules.push(false);
            }
        }

        debug_assert_eq!(modules.len(), expected, "length mismatch for {normalized:?}");
        Ok(Self { modules })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.modules
    }
}

impl Deref for ModuleSequence {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.modules
    }
}

/// Renders as `1` for a bar and `0` for a space.
impl fmt::Display for ModuleSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bar in &self.modules {
            f.write_str(if bar { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Expand one character into modules: each element becomes a run of one
/// (narrow) or two (wide) modules, alternating bar and space from a bar.
pub fn character_modules(code: CharacterCode) -> impl Iterator<Item = bool> {
    code.elements()
        .enumerate()
        .flat_map(|(element, width)| std::iter::repeat_n(element % 2 == 0, width.modules()))
}

/// Exact number of modules the stream for `normalized` will hold.
///
/// This is also where unsupported interior characters are rejected.
pub fn encoded_len(normalized: &Normalized<'_>) -> Result<usize, EncodeError> {
    let count = normalized.chars().count();
    let mut total = GUARD_MODULES;

    for ch in normalized.chars().skip(1).take(count.saturating_sub(2)) {
        total += interior_width(ch)?;
    }

    // one narrow space between neighbouring characters
    Ok(total + count.saturating_sub(1))
}

fn interior_width(ch: char) -> Result<usize, EncodeError> {
    match ch.to_ascii_uppercase() {
        '0'..='9' | '-' | '$' => Ok(9),
        c if TEN_MODULE_SET.contains(c) => Ok(10),
        _ => Err(EncodeError::UnsupportedCharacter(ch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::INTERIOR_SET;
    use crate::guards::normalize;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    fn build(content: &str) -> Result<ModuleSequence, EncodeError> {
        ModuleSequence::build(&normalize(content)?)
    }

    fn len_of(content: &str) -> Result<usize, EncodeError> {
        encoded_len(&normalize(content)?)
    }

    #[test]
    fn wide_elements_expand_to_two_modules() {
        // '3' = WWnnnnn
        let modules: Vec<bool> = character_modules(CharacterCode(0x60)).collect();
        assert_eq!(modules, bits("110010101"));
    }

    #[test]
    fn guard_only_content() {
        let seq = build("AA").unwrap();
        assert_eq!(seq.len(), 21);
        // A = nnWWnWn, then a gap
        assert_eq!(&seq[..11], bits("10110010010").as_slice());
    }

    #[test]
    fn builds_known_pattern() {
        let seq = build("A0B").unwrap();
        assert_eq!(
            seq.to_string(),
            concat!("1011001001", "0", "101010011", "0", "1001001011")
        );
    }

    #[test]
    fn first_module_is_bar() {
        for content in ["AA", "A5A", "T123N", "C-$:/.+D"] {
            let seq = build(content).unwrap();
            assert_eq!(seq.first(), Some(&true), "{content}");
            assert_eq!(seq.last(), Some(&true), "{content}");
        }
    }

    #[test]
    fn length_matches_builder_output() {
        let samples = [
            "AA", "A0B", "T123N", "a0123456789b", "C-$:/.+D", "*/:+.e", "A31117013206375B",
        ];
        for content in samples {
            let seq = build(content).unwrap();
            assert_eq!(len_of(content).unwrap(), seq.len(), "{content}");
        }
    }

    #[test]
    fn each_interior_symbol_counts_exactly() {
        for ch in INTERIOR_SET.chars() {
            let content = format!("A{ch}A");
            let width = len_of(&content).unwrap() - GUARD_MODULES - 2;
            let expected = if "/:+.".contains(ch) { 10 } else { 9 };
            assert_eq!(width, expected, "symbol {ch}");
            assert_eq!(build(&content).unwrap().len(), 22 + expected);
        }
    }

    #[test]
    fn interior_guards_are_unsupported() {
        assert_eq!(
            len_of("A1TA"),
            Err(EncodeError::UnsupportedCharacter('T'))
        );
        assert_eq!(
            len_of("AAA"),
            Err(EncodeError::UnsupportedCharacter('A'))
        );
        assert_eq!(
            build("AzA"),
            Err(EncodeError::UnsupportedCharacter('z'))
        );
    }

    #[test]
    fn unguarded_content_is_measured_after_wrapping() {
        // "5" becomes "A5A": 20 guard modules, 9 for the digit, 2 gaps
        assert_eq!(len_of("5"), Ok(31));
        assert_eq!(build("5").unwrap().len(), 31);
        assert_eq!(len_of("12"), build("12").map(|seq| seq.len()));
    }

    #[test]
    fn mismatched_guards_never_reach_the_builder() {
        assert_eq!(
            build("A1T"),
            Err(EncodeError::InvalidGuard {
                first: 'A',
                last: 'T'
            })
        );
    }

    #[test]
    fn reports_first_offending_character() {
        assert_eq!(
            len_of("A1X2YA"),
            Err(EncodeError::UnsupportedCharacter('X'))
        );
    }
}
