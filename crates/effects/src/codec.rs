//! Composite message format
//!
//! ```text
//! Original: <original text>
//! Modified: <styled text>
//! ```
//!
//! The sent message is the only place where the original text is kept, so the
//! format must stay readable for messages already in chat histories.

const ORIGINAL_LABEL: &str = "Original:";
const MODIFIED_LABEL: &str = "Modified:";
const LINE_SEP: char = '\n';

/// Telegram limit for message text, counted in UTF-16 code units
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Decoded composite message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composite<'a> {
    pub original: &'a str,
    pub modified: &'a str,
}

pub fn encode(original: &str, modified: &str) -> String {
    format!("{ORIGINAL_LABEL} {original}{LINE_SEP}{MODIFIED_LABEL} {modified}")
}

/// Whether `text` can be sent as a single message
pub fn fits_message(text: &str) -> bool {
    text.encode_utf16().count() <= MAX_MESSAGE_LEN
}

pub fn decode(text: &str) -> Result<Composite<'_>, CodecError> {
    let mut lines = text.split(LINE_SEP);
    let (Some(first), Some(second), None) = (lines.next(), lines.next(), lines.next()) else {
        return Err(CodecError::NotDecodable);
    };

    Ok(Composite {
        original: strip_label(first, ORIGINAL_LABEL)?,
        modified: strip_label(second, MODIFIED_LABEL)?,
    })
}

fn strip_label<'a>(line: &'a str, label: &str) -> Result<&'a str, CodecError> {
    let value = line.strip_prefix(label).ok_or(CodecError::NotDecodable)?;
    Ok(value.strip_prefix(' ').unwrap_or(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("message is not an original/modified composite")]
    NotDecodable,
}
