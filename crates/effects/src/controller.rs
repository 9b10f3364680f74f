//! Turns inbound bot events into render instructions
//!
//! Each handler is a pure function of its event. Nothing is kept between
//! calls: callbacks recover the original text from the pressed message.

use crate::{
    codec::{self, CodecError},
    engine,
    selector::{self, Keyboard},
    Variant, CATALOGUE,
};

/// Inline results are a pure function of the query, so they are cached for as
/// long as Telegram allows
pub const INLINE_CACHE_SECONDS: u32 = 30 * 24 * 60 * 60;

const QUERY_KEYWORD: &str = "effect";

#[derive(Debug, Clone, Copy)]
pub struct InlineQueryEvent<'a> {
    pub query: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct CallbackEvent<'a> {
    pub data: &'a str,
    /// Current text of the message with the pressed button. `None` for
    /// messages sent through inline mode
    pub message_text: Option<&'a str>,
    /// Callback data of the buttons currently attached to the message
    pub message_buttons: &'a [&'a str],
}

/// Message text together with its keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub text: String,
    pub keyboard: Keyboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineResult {
    /// Unique among results of one answer
    pub id: String,
    pub title: String,
    pub description: String,
    pub text: String,
    pub keyboard: Keyboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAnswer {
    pub results: Vec<InlineResult>,
    pub cache_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineResponse {
    Answer(InlineAnswer),
    /// Query is not for us, answer with no results
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Edit the pressed message in place
    Edit(Render),
    /// Message already shows this render, Telegram rejects edits that change nothing
    Unchanged,
    /// Acknowledge the press and do nothing
    Ignore(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IgnoreReason {
    #[error(transparent)]
    UnknownEffect(#[from] crate::ParseEffectError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("callback message has no text")]
    NoMessageText,
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("text is empty")]
    Empty,
    #[error("text has more than one line")]
    MultiLine,
    #[error("rendered message is longer than {} UTF-16 units", codec::MAX_MESSAGE_LEN)]
    TooLong,
}

/// Query grammar: `effect <label> <free text>`
pub fn handle_inline_query(event: InlineQueryEvent<'_>) -> InlineResponse {
    let Some((variant, text)) = parse_query(event.query) else {
        log::debug!("inline query {:?} does not match", event.query);
        return InlineResponse::Empty;
    };

    let modified = engine::apply(text, variant);
    InlineResponse::Answer(InlineAnswer {
        results: vec![InlineResult {
            id: variant.code().to_string(),
            title: variant.label().to_string(),
            description: modified.clone(),
            text: codec::encode(text, &modified),
            keyboard: Keyboard::share(event.query),
        }],
        cache_seconds: INLINE_CACHE_SECONDS,
    })
}

pub fn handle_callback(event: CallbackEvent<'_>) -> CallbackOutcome {
    match render_callback(event) {
        Ok(Some(render)) => CallbackOutcome::Edit(render),
        Ok(None) => CallbackOutcome::Unchanged,
        Err(reason) => {
            log::debug!("ignoring callback {:?}: {reason}", event.data);
            CallbackOutcome::Ignore(reason)
        }
    }
}

/// `/effect <text>` in a chat: first catalogue effect plus buttons for the rest.
pub fn handle_effect_command(text: &str) -> Result<Render, RenderError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RenderError::Empty);
    }
    if text.contains(['\n', '\r']) {
        return Err(RenderError::MultiLine);
    }
    render(text, CATALOGUE[0].variant)
}

fn render_callback(event: CallbackEvent<'_>) -> Result<Option<Render>, IgnoreReason> {
    let target = selector::parse_callback_id(event.data)?;
    let current = event.message_text.ok_or(IgnoreReason::NoMessageText)?;
    let composite = codec::decode(current)?;

    let render = render(composite.original, target)?;
    let same_buttons = render
        .keyboard
        .callback_data()
        .eq(event.message_buttons.iter().copied());
    if render.text == current && same_buttons {
        return Ok(None);
    }
    Ok(Some(render))
}

fn render(original: &str, variant: Variant) -> Result<Render, RenderError> {
    let modified = engine::apply(original, variant);
    let text = codec::encode(original, &modified);
    if !codec::fits_message(&text) {
        return Err(RenderError::TooLong);
    }
    Ok(Render {
        text,
        keyboard: selector::build_keyboard(selector::remaining_variants(variant)),
    })
}

fn parse_query(query: &str) -> Option<(Variant, &str)> {
    let (keyword, rest) = query.trim_start().split_once(char::is_whitespace)?;
    if !keyword.eq_ignore_ascii_case(QUERY_KEYWORD) {
        return None;
    }
    let (label, text) = rest.trim_start().split_once(char::is_whitespace)?;
    let variant = Variant::from_label(label).ok()?;
    if text.trim().is_empty() || text.contains(['\n', '\r']) {
        return None;
    }
    Some((variant, text))
}
