use crate::{charmap::CharacterMap, Variant};

/// Replace every character of `text` with its styled counterpart
pub fn apply(text: &str, variant: Variant) -> String {
    let map = CharacterMap::of(variant);
    // styled glyphs are 4 bytes in UTF-8
    let mut out = String::with_capacity(text.len() * 4);
    out.extend(text.chars().map(|c| map.destination(c)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        let table = [
            ("hello", Variant::Monospace, "𝚑𝚎𝚕𝚕𝚘"),
            ("hello", Variant::Bold, "𝗵𝗲𝗹𝗹𝗼"),
            ("hello", Variant::Italic, "𝘩𝘦𝘭𝘭𝘰"),
            ("Hello, World 42!", Variant::Monospace, "𝙷𝚎𝚕𝚕𝚘, 𝚆𝚘𝚛𝚕𝚍 𝟺𝟸!"),
            ("Hello, World 42!", Variant::Bold, "𝗛𝗲𝗹𝗹𝗼, 𝗪𝗼𝗿𝗹𝗱 𝟰𝟮!"),
            ("Hello, World 42!", Variant::Italic, "𝘏𝘦𝘭𝘭𝘰, 𝘞𝘰𝘳𝘭𝘥 42!"),
        ];
        for (input, variant, expected) in table {
            assert_eq!(apply(input, variant), expected, "{variant} {input:?}");
        }
    }

    #[test]
    fn test_empty() {
        for variant in Variant::ALL {
            assert_eq!(apply("", variant), "");
        }
    }

    #[test]
    fn test_unsupported_text_unchanged() {
        for text in [" ", "?!.,;:", "привет мир", "🦀 ❤️ 🦀", "\t\n"] {
            for variant in Variant::ALL {
                assert_eq!(apply(text, variant), text);
            }
        }
    }

    #[test]
    fn test_length_preserved() {
        for text in ["", "a", "Mixed 123 текст 🦀!", "ALL CAPS", "already 𝗯𝗼𝗹𝗱"] {
            for variant in Variant::ALL {
                assert_eq!(
                    apply(text, variant).chars().count(),
                    text.chars().count(),
                    "{variant} {text:?}"
                );
            }
        }
    }
}
