use teloxide::{
    prelude::*,
    types::{
        InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
        InputMessageContentText,
    },
};

use effects::{InlineQueryEvent, InlineResponse, InlineResult};

use crate::keyboards::Keyboards;

pub async fn inline_query_handler(bot: Bot, q: InlineQuery) -> ResponseResult<()> {
    match effects::handle_inline_query(InlineQueryEvent { query: &q.query }) {
        InlineResponse::Answer(answer) => {
            log::debug!("answering inline query {:?}", q.query);
            let results: Vec<_> = answer.results.into_iter().map(article).collect();
            bot.answer_inline_query(&q.id, results)
                .cache_time(answer.cache_seconds)
                .await?;
        }
        InlineResponse::Empty => {
            bot.answer_inline_query(&q.id, Vec::<InlineQueryResult>::new()).await?;
        }
    }
    Ok(())
}

fn article(result: InlineResult) -> InlineQueryResult {
    let content = InputMessageContent::Text(InputMessageContentText::new(result.text));
    InlineQueryResult::Article(
        InlineQueryResultArticle::new(result.id, result.title, content)
            .description(result.description)
            .reply_markup(Keyboards::effects(&result.keyboard).into()),
    )
}

#[cfg(test)]
mod tests {
    use effects::{InlineQueryEvent, InlineResponse};

    use super::*;

    #[test]
    fn test_article() {
        let InlineResponse::Answer(answer) =
            effects::handle_inline_query(InlineQueryEvent { query: "effect italic hi" })
        else {
            panic!("no answer");
        };
        let result = answer.results.into_iter().next().unwrap();

        let InlineQueryResult::Article(article) = article(result) else {
            panic!("not an article");
        };
        assert_eq!(article.id, "italic");
        assert_eq!(article.title, "Italic");
        assert_eq!(article.description.as_deref(), Some("𝘩𝘪"));
        let InputMessageContent::Text(content) = article.input_message_content else {
            panic!("not a text content");
        };
        assert_eq!(content.message_text, "Original: hi\nModified: 𝘩𝘪");
        assert!(article.reply_markup.is_some());
    }
}
