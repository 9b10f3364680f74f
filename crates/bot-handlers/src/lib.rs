mod bot_callback;
mod bot_messages;
mod commands;
mod inline;
mod keyboards;

pub use bot_callback::callback_handler;
pub use bot_messages::{command_handler, message_handler};
pub use commands::Command;
pub use inline::inline_query_handler;
