use reqwest::Url;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ReplyMarkup};

use effects::{ButtonAction, Keyboard};

pub(crate) const SANIC_KART_URL: &str = "https://sanickart.sanicthehedgehog.com";

const PLAY_SANIC_KART_MSG: &str = "Play Sanic Kart";

#[derive(Debug, Default)]
pub(crate) struct KeyboardBuilder {
    keys: Vec<InlineKeyboardButton>,
    columns: usize,
}

impl KeyboardBuilder {
    fn with_layout(rows_capacity: usize, columns: usize) -> Self {
        Self {
            keys: Vec::with_capacity(rows_capacity * columns),
            columns: columns.max(1),
        }
    }
    fn callback<T, D>(mut self, text: T, data: D) -> Self
    where
        T: Into<String>,
        D: Into<String>,
    {
        self.keys.push(InlineKeyboardButton::callback(text, data));
        self
    }
    fn url<T>(mut self, text: T, url: Url) -> Self
    where
        T: Into<String>,
    {
        self.keys.push(InlineKeyboardButton::url(text, url));
        self
    }
    fn switch_inline_query<T, Q>(mut self, text: T, query: Q) -> Self
    where
        T: Into<String>,
        Q: Into<String>,
    {
        self.keys.push(InlineKeyboardButton::switch_inline_query(text, query));
        self
    }
}

impl From<KeyboardBuilder> for ReplyMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::InlineKeyboard(value.into())
    }
}

impl From<KeyboardBuilder> for InlineKeyboardMarkup {
    fn from(value: KeyboardBuilder) -> Self {
        Self::new(value.keys.chunks(value.columns).map(|row| row.to_owned()))
    }
}

pub(crate) struct Keyboards;

impl Keyboards {
    /// Effect buttons in a single row
    pub(crate) fn effects(keyboard: &Keyboard) -> KeyboardBuilder {
        keyboard.buttons.iter().fold(
            KeyboardBuilder::with_layout(1, keyboard.len()),
            |builder, button| match &button.action {
                ButtonAction::Callback(data) => builder.callback(&button.label, data),
                ButtonAction::SwitchInlineQuery(query) => {
                    builder.switch_inline_query(&button.label, query)
                }
            },
        )
    }
    pub(crate) fn about() -> KeyboardBuilder {
        let keyboard = KeyboardBuilder::with_layout(1, 1);
        match Url::parse(SANIC_KART_URL) {
            Ok(url) => keyboard.url(PLAY_SANIC_KART_MSG, url),
            Err(e) => {
                log::error!("invalid about url {SANIC_KART_URL}: {e}");
                keyboard
            }
        }
    }
}
