//! Styled text through Unicode substitution
//!
//! No markup is involved: each Latin letter or digit is replaced with a code
//! point from the Mathematical Alphanumeric Symbols block, everything else is
//! kept as is.
pub mod charmap;
pub mod codec;
pub mod controller;
pub mod engine;
pub mod selector;
mod variant;

pub use codec::{Composite, CodecError};
pub use controller::{
    handle_callback, handle_effect_command, handle_inline_query, CallbackEvent, CallbackOutcome,
    IgnoreReason, InlineAnswer, InlineQueryEvent, InlineResponse, InlineResult, Render, RenderError,
};
pub use engine::apply;
pub use selector::{Button, ButtonAction, Keyboard};
pub use variant::{EffectEntry, ParseEffectError, Variant, CATALOGUE};
