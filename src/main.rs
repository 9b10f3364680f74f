use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use simplelog::LevelFilter;
use teloxide::{prelude::*, update_listeners::webhooks, utils::command::BotCommands};
use tokio::{signal, task::JoinSet};
use tokio_util::sync::CancellationToken;

use bot_handlers::{
    callback_handler, command_handler, inline_query_handler, message_handler, Command,
};
use common::{spawn_with_token, Config, UpdatesMode};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const IS_PROD: bool = cfg!(feature = "prod");
const LOG_LEVEL: LevelFilter = if IS_PROD {
    LevelFilter::Error
} else {
    LevelFilter::Debug
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let config = Config::from_env()?;

    let bot = Bot::with_client(
        config.token,
        Client::builder().timeout(REQUEST_TIMEOUT).build()?,
    );
    bot.set_my_commands(Command::bot_commands()).await?;

    let cancel_token = CancellationToken::new();

    let mut jobs = JoinSet::new();
    jobs.spawn(spawn_with_token(
        cancel_token.clone(),
        start_bot(bot, config.mode),
    ));

    jobs.spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("failed to listen for SIGINT: {e}");
        }
        cancel_token.cancel();
    });

    // first finished job stops the rest
    if let Some(Err(e)) = jobs.join_next().await {
        log::error!("job failed: {e}");
    }
    jobs.shutdown().await;

    Ok(())
}

fn init_logger() {
    use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

    let config = if IS_PROD {
        simplelog::Config::default()
    } else {
        ConfigBuilder::new()
            .add_filter_ignore_str("h2")
            .add_filter_ignore_str("hyper")
            .add_filter_ignore_str("reqwest")
            .add_filter_ignore_str("rustls")
            .add_filter_ignore_str("axum")
            .build()
    };

    TermLogger::init(LOG_LEVEL, config, TerminalMode::Mixed, ColorChoice::Auto)
        .expect("failed to init logger");
}

async fn start_bot(bot: Bot, mode: UpdatesMode) {
    log::debug!("starting bot");
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(command_handler),
                )
                .branch(dptree::endpoint(message_handler)),
        )
        .branch(Update::filter_inline_query().endpoint(inline_query_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .default_handler(|_update| async move { log::debug!("unhandled update") })
        .error_handler(LoggingErrorHandler::with_custom_text("error in dispatcher"))
        .build();

    match mode {
        UpdatesMode::Polling => {
            log::info!("receiving updates with long polling");
            dispatcher.dispatch().await;
        }
        UpdatesMode::Webhook { url, addr } => {
            log::info!("receiving updates with webhook {url}, listening on {addr}");
            let listener = match webhooks::axum(bot, webhooks::Options::new(addr, url)).await {
                Ok(l) => l,
                Err(e) => {
                    log::error!("failed to set up webhook: {e}");
                    return;
                }
            };
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("error from webhook listener"),
                )
                .await;
        }
    }
}
