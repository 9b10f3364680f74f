use std::fmt::Display;

/// Styling mode applied to text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Monospace,
    Bold,
    Italic,
}

/// Catalogue entry: how a variant is named in callbacks, queries and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectEntry {
    pub variant: Variant,
    /// Short ASCII token, used in callback data and inline queries
    pub code: &'static str,
    /// Button caption
    pub label: &'static str,
}

/// All effects, order is the order of keyboard buttons
pub static CATALOGUE: [EffectEntry; 3] = [
    EffectEntry {
        variant: Variant::Monospace,
        code: "monospace",
        label: "Monospace",
    },
    EffectEntry {
        variant: Variant::Bold,
        code: "bold",
        label: "Bold",
    },
    EffectEntry {
        variant: Variant::Italic,
        code: "italic",
        label: "Italic",
    },
];

impl Variant {
    pub const ALL: [Variant; 3] = [Self::Monospace, Self::Bold, Self::Italic];

    pub fn entry(self) -> &'static EffectEntry {
        match self {
            Self::Monospace => &CATALOGUE[0],
            Self::Bold => &CATALOGUE[1],
            Self::Italic => &CATALOGUE[2],
        }
    }
    pub fn code(self) -> &'static str {
        self.entry().code
    }
    pub fn label(self) -> &'static str {
        self.entry().label
    }
    pub fn from_code(code: &str) -> Result<Self, ParseEffectError> {
        CATALOGUE
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.variant)
            .ok_or_else(|| ParseEffectError::UnknownEffectCode(code.to_owned()))
    }
    /// Case-insensitive lookup, as typed by users in inline mode
    pub fn from_label(label: &str) -> Result<Self, ParseEffectError> {
        CATALOGUE
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(label) || e.label.eq_ignore_ascii_case(label))
            .map(|e| e.variant)
            .ok_or_else(|| ParseEffectError::UnknownEffectLabel(label.to_owned()))
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.code().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEffectError {
    #[error("unrecognized effect code: {0:?}")]
    UnknownEffectCode(String),
    #[error("unrecognized effect label: {0:?}")]
    UnknownEffectLabel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_match_variants() {
        for (variant, entry) in Variant::ALL.iter().zip(CATALOGUE.iter()) {
            assert_eq!(*variant, entry.variant);
            assert_eq!(variant.entry(), entry);
        }
    }

    #[test]
    fn test_from_label() {
        let table = [
            ("bold", Ok(Variant::Bold)),
            ("BOLD", Ok(Variant::Bold)),
            ("MonoSpace", Ok(Variant::Monospace)),
            ("italic", Ok(Variant::Italic)),
            (
                "unknown",
                Err(ParseEffectError::UnknownEffectLabel("unknown".to_string())),
            ),
            ("", Err(ParseEffectError::UnknownEffectLabel(String::new()))),
        ];
        for (input, expected) in table {
            assert_eq!(Variant::from_label(input), expected, "label {input:?}");
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Variant::from_code("italic"), Ok(Variant::Italic));
        assert_eq!(
            Variant::from_code("Italic"),
            Err(ParseEffectError::UnknownEffectCode("Italic".to_string()))
        );
    }
}
