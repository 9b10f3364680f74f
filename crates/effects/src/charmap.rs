//! Per-variant character tables
//!
//! Every variant maps contiguous Latin ranges onto the Mathematical Alphanumeric
//! Symbols block (U+1D400..U+1D7FF). Characters outside the mapped ranges are
//! returned unchanged.

use crate::Variant;

/// Source range that is shifted as a whole onto `dest_start`
#[derive(Debug, Clone, Copy)]
struct Range {
    first: char,
    last: char,
    dest_start: u32,
}

impl Range {
    const fn new(first: char, last: char, dest_start: u32) -> Self {
        Self {
            first,
            last,
            dest_start,
        }
    }
    fn map(&self, c: char) -> Option<char> {
        if c < self.first || self.last < c {
            return None;
        }
        char::from_u32(self.dest_start + (c as u32 - self.first as u32))
    }
}

const fn upper(dest_start: u32) -> Range {
    Range::new('A', 'Z', dest_start)
}

const fn lower(dest_start: u32) -> Range {
    Range::new('a', 'z', dest_start)
}

const fn digits(dest_start: u32) -> Range {
    Range::new('0', '9', dest_start)
}

/// Table for one variant
#[derive(Debug)]
pub struct CharacterMap {
    ranges: &'static [Range],
}

static MONOSPACE: CharacterMap = CharacterMap {
    ranges: &[upper(0x1D670), lower(0x1D68A), digits(0x1D7F6)],
};

// sans-serif bold
static BOLD: CharacterMap = CharacterMap {
    ranges: &[upper(0x1D5D4), lower(0x1D5EE), digits(0x1D7EC)],
};

// sans-serif italic, Unicode has no italic digits
static ITALIC: CharacterMap = CharacterMap {
    ranges: &[upper(0x1D608), lower(0x1D622)],
};

impl CharacterMap {
    pub fn of(variant: Variant) -> &'static Self {
        match variant {
            Variant::Monospace => &MONOSPACE,
            Variant::Bold => &BOLD,
            Variant::Italic => &ITALIC,
        }
    }
    /// Styled counterpart of `c`, or `c` itself when it is not in the table
    pub fn destination(&self, c: char) -> char {
        self.ranges.iter().find_map(|r| r.map(c)).unwrap_or(c)
    }
}

pub fn destination(variant: Variant, c: char) -> char {
    CharacterMap::of(variant).destination(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_edges() {
        let table = [
            (Variant::Monospace, 'A', '𝙰'),
            (Variant::Monospace, 'Z', '𝚉'),
            (Variant::Monospace, 'a', '𝚊'),
            (Variant::Monospace, 'z', '𝚣'),
            (Variant::Monospace, '0', '𝟶'),
            (Variant::Monospace, '9', '𝟿'),
            (Variant::Bold, 'A', '𝗔'),
            (Variant::Bold, 'Z', '𝗭'),
            (Variant::Bold, 'a', '𝗮'),
            (Variant::Bold, 'z', '𝘇'),
            (Variant::Bold, '0', '𝟬'),
            (Variant::Bold, '9', '𝟵'),
            (Variant::Italic, 'A', '𝘈'),
            (Variant::Italic, 'Z', '𝘡'),
            (Variant::Italic, 'a', '𝘢'),
            (Variant::Italic, 'z', '𝘻'),
        ];
        for (variant, source, expected) in table {
            assert_eq!(
                destination(variant, source),
                expected,
                "{variant} {source:?}"
            );
        }
    }

    #[test]
    fn test_unsupported_is_identity() {
        for variant in Variant::ALL {
            for c in [' ', '!', '@', '[', '`', '{', 'é', 'Ж', '😀', '\u{1D670}'] {
                assert_eq!(destination(variant, c), c, "{variant} {c:?}");
            }
        }
    }

    #[test]
    fn test_italic_digits_pass_through() {
        for c in '0'..='9' {
            assert_eq!(destination(Variant::Italic, c), c);
        }
    }

    #[test]
    fn test_every_supported_char_is_distinct() {
        for variant in Variant::ALL {
            let mut seen = std::collections::HashSet::new();
            let digits = match variant {
                Variant::Italic => None,
                Variant::Monospace | Variant::Bold => Some('0'..='9'),
            };
            for c in ('A'..='Z').chain('a'..='z').chain(digits.into_iter().flatten()) {
                let d = destination(variant, c);
                assert_ne!(d, c, "{variant} {c:?}");
                assert!(seen.insert(d), "{variant}: {c:?} maps onto a taken glyph");
            }
        }
    }
}
