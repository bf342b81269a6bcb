use std::fmt;
use thiserror::Error;

/// Number of elements (bars and spaces) in every Codabar character.
pub const ELEMENTS_PER_CHAR: usize = 7;

/// Symbols accepted between the start and stop guards.
pub const INTERIOR_SET: &str = "0123456789-$:/.+";

/// Interior symbols whose pattern carries three wide elements (10 modules).
pub const TEN_MODULE_SET: &str = "/:+.";

/// A character's wide/narrow pattern packed into the 7 least-significant bits.
///
/// Bit 6 is the first element (always a bar), bit 0 the last (also a bar).
/// A set bit marks a wide element, a clear bit a narrow one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterCode(pub u8);

/// Width of a single bar or space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementWidth {
    Narrow,
    Wide,
}

impl ElementWidth {
    /// Number of modules the element occupies.
    pub const fn modules(self) -> usize {
        match self {
            ElementWidth::Narrow => 1,
            ElementWidth::Wide => 2,
        }
    }
}

impl CharacterCode {
    /// Elements from first (leftmost) to last.
    pub fn elements(self) -> impl Iterator<Item = ElementWidth> {
        (0..ELEMENTS_PER_CHAR).rev().map(move |shift| {
            if (self.0 >> shift) & 1 == 1 {
                ElementWidth::Wide
            } else {
                ElementWidth::Narrow
            }
        })
    }

    /// Total module width of the character, excluding the inter-character gap.
    pub fn module_len(self) -> usize {
        self.elements().map(ElementWidth::modules).sum()
    }
}

impl fmt::Display for CharacterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.elements() {
            f.write_str(match element {
                ElementWidth::Narrow => "n",
                ElementWidth::Wide => "W",
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid start/end guards: '{first}' .. '{last}'")]
    InvalidGuard { first: char, last: char },
    #[error("cannot encode: '{0}' (U+{cp:04X})", cp = code_point(.0))]
    UnsupportedCharacter(char),
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

/// The 20 Codabar symbols and their wide/narrow codes.
#[rustfmt::skip]
pub const ALPHABET: [(char, CharacterCode); 20] = [
    ('0', CharacterCode(0x03)), ('1', CharacterCode(0x06)), ('2', CharacterCode(0x09)),
    ('3', CharacterCode(0x60)), ('4', CharacterCode(0x12)), ('5', CharacterCode(0x42)),
    ('6', CharacterCode(0x21)), ('7', CharacterCode(0x24)), ('8', CharacterCode(0x30)),
    ('9', CharacterCode(0x48)),
    ('-', CharacterCode(0x0c)), ('$', CharacterCode(0x18)), (':', CharacterCode(0x45)),
    ('/', CharacterCode(0x51)), ('.', CharacterCode(0x54)), ('+', CharacterCode(0x15)),
    ('A', CharacterCode(0x1a)), ('B', CharacterCode(0x29)), ('C', CharacterCode(0x0b)),
    ('D', CharacterCode(0x0e)),
];

/// Look up a symbol in the alphabet. `ch` must already be uppercased.
pub fn lookup(ch: char) -> Option<CharacterCode> {
    ALPHABET
        .iter()
        .find(|(symbol, _)| *symbol == ch)
        .map(|&(_, code)| code)
}

/// Map an alternate guard (`T N * E`) onto the primary guard sharing its pattern.
/// Every other character is returned unchanged.
pub fn guard_alias(ch: char) -> char {
    match ch {
        'T' => 'A',
        'N' => 'B',
        '*' => 'C',
        'E' => 'D',
        other => other,
    }
}

/// Resolve the pattern for the character at a given position.
///
/// Only the first and last positions go through [`guard_alias`]; an alternate
/// guard letter in the interior is an unsupported character.
pub fn pattern_for(ch: char, is_guard_position: bool) -> Result<CharacterCode, EncodeError> {
    let up = ch.to_ascii_uppercase();
    let symbol = if is_guard_position {
        guard_alias(up)
    } else {
        up
    };
    lookup(symbol).ok_or(EncodeError::UnsupportedCharacter(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_symbols_have_expected_widths() {
        for ch in INTERIOR_SET.chars() {
            let code = lookup(ch).unwrap();
            let expected = if TEN_MODULE_SET.contains(ch) { 10 } else { 9 };
            assert_eq!(code.module_len(), expected, "symbol {ch}");
        }
    }

    #[test]
    fn guards_are_ten_modules() {
        for ch in ['A', 'B', 'C', 'D'] {
            assert_eq!(lookup(ch).unwrap().module_len(), 10);
        }
    }

    #[test]
    fn every_code_starts_and_ends_with_a_seven_bit_pattern() {
        for (symbol, code) in ALPHABET {
            assert!(code.0 < 0x80, "{symbol} uses more than 7 bits");
            assert_eq!(code.elements().count(), ELEMENTS_PER_CHAR);
        }
    }

    #[test]
    fn elements_are_read_most_significant_first() {
        // '3' = 0b1100000
        let code = lookup('3').unwrap();
        assert_eq!(code.to_string(), "WWnnnnn");
        // 'A' = 0b0011010
        assert_eq!(lookup('A').unwrap().to_string(), "nnWWnWn");
    }

    #[test]
    fn alias_only_applies_at_guard_positions() {
        assert_eq!(pattern_for('t', true), Ok(lookup('A').unwrap()));
        assert_eq!(pattern_for('N', true), Ok(lookup('B').unwrap()));
        assert_eq!(pattern_for('*', true), Ok(lookup('C').unwrap()));
        assert_eq!(pattern_for('e', true), Ok(lookup('D').unwrap()));
        assert_eq!(
            pattern_for('T', false),
            Err(EncodeError::UnsupportedCharacter('T'))
        );
    }

    #[test]
    fn unsupported_message_names_character() {
        let err = EncodeError::UnsupportedCharacter('Z');
        assert_eq!(err.to_string(), "cannot encode: 'Z' (U+005A)");
    }
}
