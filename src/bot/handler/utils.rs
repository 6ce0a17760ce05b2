use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
    RequestError,
};

use crate::bot::BotError;

/* Common utilites for handlers. */

// The parts of an incoming text message that handlers look at.
#[derive(Clone, Debug, PartialEq)]
pub struct Incoming {
    pub chat_id: ChatId,
    pub first_name: String,
    pub text: String,
}

impl Incoming {
    // None for messages without text. A missing sender gives an empty name.
    pub fn from_message(msg: &Message) -> Option<Incoming> {
        let text = msg.text()?;
        let first_name = match msg.from() {
            Some(user) => user.first_name.clone(),
            None => String::new(),
        };

        Some(Incoming {
            chat_id: msg.chat.id,
            first_name,
            text: text.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Reply {
        Reply {
            text: text.into(),
            parse_mode: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Reply {
        Reply {
            text: text.into(),
            parse_mode: Some(ParseMode::MarkdownV2),
        }
    }
}

#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, incoming: &Incoming) -> Result<Vec<Reply>, BotError>;
}

// Sends replies one at a time, in order.
pub async fn send_replies(
    bot: &Bot,
    chat_id: ChatId,
    replies: Vec<Reply>,
) -> Result<(), RequestError> {
    for reply in replies {
        let request = bot.send_message(chat_id, reply.text);
        match reply.parse_mode {
            Some(mode) => request.parse_mode(mode).await?,
            None => request.await?,
        };
    }
    Ok(())
}
