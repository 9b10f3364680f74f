use teloxide::{prelude::*, types::{CallbackQuery, InlineKeyboardButtonKind, InlineKeyboardMarkup}};

use common::LogError;
use effects::{CallbackEvent, CallbackOutcome};

use crate::keyboards::Keyboards;

pub async fn callback_handler(bot: Bot, q: CallbackQuery) -> ResponseResult<()> {
    // the press is acknowledged whatever happens next, so the client stops the spinner
    bot.answer_callback_query(&q.id)
        .await
        .log_error_msg("failed to answer callback");

    let Some(data) = q.data.as_deref() else {
        log::warn!("got empty callback {} from user {}", q.id, q.from.id);
        return Ok(());
    };
    log::debug!("got callback: {data:?}");

    let message = q.message.as_ref().and_then(|m| m.regular_message());
    let buttons = callback_data(message.and_then(|m| m.reply_markup()));
    let event = CallbackEvent {
        data,
        message_text: message.and_then(|m| m.text()),
        message_buttons: &buttons,
    };

    match effects::handle_callback(event) {
        CallbackOutcome::Edit(render) => {
            let Some(message) = message else {
                return Ok(());
            };
            bot.edit_message_text(message.chat.id, message.id, render.text)
                .reply_markup(Keyboards::effects(&render.keyboard).into())
                .await?;
        }
        CallbackOutcome::Unchanged => log::debug!("callback {data:?} changes nothing"),
        CallbackOutcome::Ignore(reason) => log::debug!("callback {data:?} ignored: {reason}"),
    }

    Ok(())
}

/// Data of the callback buttons attached to a message, row by row
fn callback_data(markup: Option<&InlineKeyboardMarkup>) -> Vec<&str> {
    markup
        .into_iter()
        .flat_map(|m| m.inline_keyboard.iter().flatten())
        .filter_map(|b| match &b.kind {
            InlineKeyboardButtonKind::CallbackData(data) => Some(data.as_str()),
            _ => None,
        })
        .collect()
}
