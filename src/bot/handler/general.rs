use async_trait::async_trait;
use chrono::Local;

use crate::bot::{
    processor::{format_time, greeting},
    BotError,
};

use super::{
    constants::DEFAULT_MESSAGE,
    utils::{CommandHandler, Incoming, Reply},
};

/* Hello command.
 * Greets the sender by first name, in bold.
 */
pub struct HelloHandler;

#[async_trait]
impl CommandHandler for HelloHandler {
    async fn handle(&self, incoming: &Incoming) -> Result<Vec<Reply>, BotError> {
        Ok(vec![Reply::markdown(greeting(&incoming.first_name))])
    }
}

/* Print date command.
 * Replies with the current server time.
 */
pub struct PrintDateHandler;

#[async_trait]
impl CommandHandler for PrintDateHandler {
    async fn handle(&self, _incoming: &Incoming) -> Result<Vec<Reply>, BotError> {
        Ok(vec![Reply::plain(format_time(&Local::now()))])
    }
}

/* Default handler.
 * Invoked for any text that is not a registered command.
 */
pub struct DefaultHandler;

#[async_trait]
impl CommandHandler for DefaultHandler {
    async fn handle(&self, _incoming: &Incoming) -> Result<Vec<Reply>, BotError> {
        Ok(vec![Reply::plain(DEFAULT_MESSAGE)])
    }
}
