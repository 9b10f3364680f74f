use teloxide::macros::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(hide)]
    Start,
    #[command(hide)]
    Help,
    #[command(description = "Learn more about Sanic The Hedgehog.")]
    Info,
    #[command(description = "Play the Sanic Kart Open Beta.")]
    SanicKart,
    #[command(description = "Sanic Deathmatch is coming soon!")]
    SanicDeathmatch,
    #[command(description = "Sanic Comic is coming soon!")]
    SanicComic,
    #[command(description = "Keep checking back for updates on the Sanicverse.")]
    Future,
    #[command(description = "Style your text: /effect <text>")]
    Effect(String),
}
