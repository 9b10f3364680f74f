use crate::{variant::ParseEffectError, Variant, CATALOGUE};

/// Prefix of callback data for effect buttons: `effect:{code}`
pub const CALLBACK_PREFIX: &str = "effect:";

pub const SHARE_LABEL: &str = "Share";

/// Transport-agnostic inline keyboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Send callback with this data back to the bot
    Callback(String),
    /// Open inline mode in another chat with this query
    SwitchInlineQuery(String),
}

impl Keyboard {
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
    pub fn len(&self) -> usize {
        self.buttons.len()
    }
    /// Data of callback buttons, in order
    pub fn callback_data(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().filter_map(|b| match &b.action {
            ButtonAction::Callback(data) => Some(data.as_str()),
            ButtonAction::SwitchInlineQuery(_) => None,
        })
    }
    /// Single "Share" button, re-opening inline mode with `query`
    pub fn share(query: &str) -> Self {
        Self {
            buttons: vec![Button {
                label: SHARE_LABEL.to_string(),
                action: ButtonAction::SwitchInlineQuery(query.to_string()),
            }],
        }
    }
}

pub(crate) trait CallbackData {
    type Error;

    fn to_callback_data(&self) -> String;
    fn try_from_callback_data(data: &str) -> Result<Self, Self::Error>
    where
        Self: Sized;
}

impl CallbackData for Variant {
    type Error = ParseEffectError;

    fn to_callback_data(&self) -> String {
        format!("{CALLBACK_PREFIX}{}", self.code())
    }

    fn try_from_callback_data(data: &str) -> Result<Self, Self::Error> {
        let code = data
            .strip_prefix(CALLBACK_PREFIX)
            .ok_or_else(|| ParseEffectError::UnknownEffectCode(data.to_owned()))?;
        Variant::from_code(code)
    }
}

/// Variants to offer after `applied`, in catalogue order
pub fn remaining_variants(applied: Variant) -> impl Iterator<Item = Variant> {
    CATALOGUE
        .iter()
        .map(|e| e.variant)
        .filter(move |&v| v != applied)
}

pub fn build_keyboard<I>(variants: I) -> Keyboard
where
    I: IntoIterator<Item = Variant>,
{
    Keyboard {
        buttons: variants
            .into_iter()
            .map(|v| Button {
                label: v.label().to_string(),
                action: ButtonAction::Callback(v.to_callback_data()),
            })
            .collect(),
    }
}

pub fn parse_callback_id(id: &str) -> Result<Variant, ParseEffectError> {
    Variant::try_from_callback_data(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn callback(label: &str, data: &str) -> Button {
        Button {
            label: label.to_string(),
            action: ButtonAction::Callback(data.to_string()),
        }
    }

    #[test]
    fn test_remaining_variants() {
        let table = [
            (Variant::Monospace, [Variant::Bold, Variant::Italic]),
            (Variant::Bold, [Variant::Monospace, Variant::Italic]),
            (Variant::Italic, [Variant::Monospace, Variant::Bold]),
        ];
        for (applied, expected) in table {
            let res: Vec<_> = remaining_variants(applied).collect();
            assert_eq!(res, expected);
            assert_eq!(res.len(), CATALOGUE.len() - 1);
            assert!(!res.contains(&applied));
        }
    }

    #[test]
    fn test_build_keyboard() {
        let keyboard = build_keyboard(remaining_variants(Variant::Italic));
        similar_asserts::assert_eq!(
            keyboard,
            Keyboard {
                buttons: vec![
                    callback("Monospace", "effect:monospace"),
                    callback("Bold", "effect:bold"),
                ]
            }
        );

        assert_eq!(
            keyboard.callback_data().collect::<Vec<_>>(),
            ["effect:monospace", "effect:bold"]
        );
        assert_eq!(Keyboard::share("q").callback_data().count(), 0);

        assert!(build_keyboard(Vec::new()).is_empty());
    }

    #[test]
    fn test_parse_callback_id() {
        for variant in Variant::ALL {
            assert_eq!(parse_callback_id(&variant.to_callback_data()), Ok(variant));
        }

        for id in ["", "effect:", "effect:Bold", "bold", "notify:bold", "effect:bold:1"] {
            assert_eq!(
                parse_callback_id(id),
                Err(ParseEffectError::UnknownEffectCode(
                    id.strip_prefix(CALLBACK_PREFIX).unwrap_or(id).to_string()
                )),
                "id {id:?}"
            );
        }
    }
}
