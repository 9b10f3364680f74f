use teloxide::{prelude::*, types::ParseMode};

use effects::RenderError;

use crate::{
    commands::Command,
    keyboards::{Keyboards, SANIC_KART_URL},
};

const INFO_MSG: &str = "Sanic The Hedgehog is the fastest meme in the Sanicverse. \
Gotta go fast, and then a little bit faster.";
const EFFECT_USAGE_MSG: &str = "Send /effect followed by a single line of text, \
for example: /effect hello";
const EFFECT_TOO_LONG_MSG: &str = "This text is too long to fit in one message, \
try a shorter one";

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    log::debug!("got command {cmd:?} in chat {}", msg.chat.id);

    match cmd {
        Command::Start | Command::Help => {
            send_intro(bot, msg.chat.id).await?;
        }
        Command::Effect(text) => match effects::handle_effect_command(&text) {
            Ok(render) => {
                bot.send_message(msg.chat.id, render.text)
                    .reply_markup(Keyboards::effects(&render.keyboard))
                    .await?;
            }
            Err(e) => {
                log::debug!("rejected /effect text: {e}");
                bot.send_message(msg.chat.id, effect_error_msg(e)).await?;
            }
        },
        cmd => {
            if let Some(reply) = text_reply(&cmd) {
                bot.send_message(msg.chat.id, reply).await?;
            }
        }
    };

    Ok(())
}

/// Anything that is not a known command gets the introduction
pub async fn message_handler(bot: Bot, msg: Message) -> ResponseResult<()> {
    send_intro(bot, msg.chat.id).await
}

async fn send_intro(bot: Bot, chat_id: ChatId) -> ResponseResult<()> {
    bot.send_message(chat_id, make_intro())
        .parse_mode(ParseMode::Html)
        .reply_markup(Keyboards::about())
        .await?;
    Ok(())
}

fn text_reply(cmd: &Command) -> Option<String> {
    let reply = match cmd {
        Command::Info => INFO_MSG.to_string(),
        Command::SanicKart => format!("Play the Sanic Kart Open Beta: {SANIC_KART_URL}"),
        Command::SanicDeathmatch => "Sanic Deathmatch is coming soon!".to_string(),
        Command::SanicComic => "Sanic Comic is coming soon!".to_string(),
        Command::Future => "Keep checking back for updates on the Sanicverse.".to_string(),
        Command::Start | Command::Help | Command::Effect(_) => return None,
    };
    Some(reply)
}

fn effect_error_msg(e: RenderError) -> &'static str {
    match e {
        RenderError::Empty | RenderError::MultiLine => EFFECT_USAGE_MSG,
        RenderError::TooLong => EFFECT_TOO_LONG_MSG,
    }
}

fn make_intro() -> String {
    [
        "Hello! I am Sanic AI - I can help you navigate the Sanicverse.".to_string(),
        "".to_string(),
        "<b>Commands</b>".to_string(),
        "/info - Learn more about Sanic The Hedgehog".to_string(),
        format!("/sanickart - Play the Sanic Kart Open Beta: {SANIC_KART_URL}"),
        "/sanicdeathmatch - Sanic Deathmatch is coming soon!".to_string(),
        "/saniccomic - Sanic Comic is coming soon!".to_string(),
        "/future - Keep checking back for updates on the Sanicverse.".to_string(),
        "/effect &lt;text&gt; - Style your text in monospace, bold or italic".to_string(),
        "".to_string(),
        "<b>Inline mode</b>".to_string(),
        "Type my username in any chat, then: effect bold your text".to_string(),
    ]
    .join("\n")
}
