use std::{collections::HashMap, future::Future, sync::Arc};

use teloxide::{prelude::*, RequestError};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use super::api::{ApiError, RatesSource};
use super::handler::{
    send_replies, CommandHandler, DefaultHandler, HelloHandler, Incoming, NairaRateHandler,
    PrintDateHandler, Reply, COMMAND_HELLO, COMMAND_NAIRA_RATE, COMMAND_PRINT_DATE,
    FAILURE_MESSAGE,
};

/* Dispatcher routes every incoming text message to exactly one handler.
 * Matching is on the exact message text, anything else goes to the fallback.
 * Handler failures are either reported back to the chat or escalated to main,
 * depending on the failure policy.
 */

const FALLBACK_ROUTE: &str = "fallback";

/* Types */
pub type HandlerResult = Result<(), BotError>;

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("API error: {0}")]
    ApiError(#[from] ApiError),
    #[error("Request error: {0}")]
    RequestError(#[from] RequestError),
}

// What to do when a handler fails.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FailurePolicy {
    // Stop the bot and exit with the error.
    Fatal,
    // Tell the chat something went wrong and keep serving.
    #[default]
    Isolated,
}

#[derive(Clone)]
struct FatalErrors(UnboundedSender<BotError>);

pub struct CommandTable {
    commands: HashMap<String, Arc<dyn CommandHandler>>,
    fallback: Arc<dyn CommandHandler>,
}

impl CommandTable {
    pub fn new(fallback: Arc<dyn CommandHandler>) -> CommandTable {
        CommandTable {
            commands: HashMap::new(),
            fallback,
        }
    }

    // The bot's command set.
    pub fn standard(rates: Arc<dyn RatesSource>) -> CommandTable {
        CommandTable::new(Arc::new(DefaultHandler))
            .register(COMMAND_HELLO, Arc::new(HelloHandler))
            .register(COMMAND_PRINT_DATE, Arc::new(PrintDateHandler))
            .register(COMMAND_NAIRA_RATE, Arc::new(NairaRateHandler::new(rates)))
    }

    pub fn register(mut self, text: &str, handler: Arc<dyn CommandHandler>) -> CommandTable {
        self.commands.insert(text.to_string(), handler);
        self
    }

    pub fn is_registered(&self, text: &str) -> bool {
        self.commands.contains_key(text)
    }

    // Name for logs: the command text, or "fallback" for unregistered text.
    pub fn route_name<'a>(&self, text: &'a str) -> &'a str {
        if self.is_registered(text) {
            text
        } else {
            FALLBACK_ROUTE
        }
    }

    pub fn resolve(&self, text: &str) -> &Arc<dyn CommandHandler> {
        self.commands.get(text).unwrap_or(&self.fallback)
    }

    pub async fn dispatch(&self, incoming: &Incoming) -> Result<Vec<Reply>, BotError> {
        self.resolve(&incoming.text).handle(incoming).await
    }
}

async fn handle_message(
    bot: Bot,
    msg: Message,
    table: Arc<CommandTable>,
    policy: FailurePolicy,
    fatal: FatalErrors,
) -> HandlerResult {
    // Stickers, photos and service messages carry no text
    let incoming = match Incoming::from_message(&msg) {
        Some(incoming) => incoming,
        None => return Ok(()),
    };

    log::info!(
        "Chat {} routed to {}",
        incoming.chat_id,
        table.route_name(&incoming.text)
    );

    let result = match table.dispatch(&incoming).await {
        Ok(replies) => send_replies(&bot, incoming.chat_id, replies)
            .await
            .map_err(BotError::from),
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        log::error!(
            "Chat {} failed to handle {}: {}",
            incoming.chat_id,
            incoming.text,
            err
        );
        if let Some(reply) = on_failure(policy, err, &fatal) {
            send_replies(&bot, incoming.chat_id, vec![reply]).await?;
        }
    }

    Ok(())
}

// Applies the failure policy. Returns the reply to send to the chat, if any.
fn on_failure(policy: FailurePolicy, err: BotError, fatal: &FatalErrors) -> Option<Reply> {
    match policy {
        FailurePolicy::Fatal => {
            if let Err(unsent) = fatal.0.send(err) {
                log::error!("Dispatcher already stopped, dropping error: {}", unsent.0);
            }
            None
        }
        FailurePolicy::Isolated => Some(Reply::plain(FAILURE_MESSAGE)),
    }
}

// Runs the dispatch loop until it ends on its own or a fatal error arrives.
async fn until_fatal<F>(
    dispatch: F,
    fatal_receiver: &mut UnboundedReceiver<BotError>,
) -> Result<(), BotError>
where
    F: Future<Output = ()>,
{
    tokio::select! {
        _ = dispatch => Ok(()),
        Some(err) = fatal_receiver.recv() => Err(err),
    }
}

/* Main Dispatch function.
 * Returns when the bot is stopped with ctrl-c, or with the first error under the fatal policy.
 */
pub async fn run_dispatcher(
    bot: Bot,
    table: CommandTable,
    policy: FailurePolicy,
) -> Result<(), BotError> {
    let (fatal_sender, mut fatal_receiver) = unbounded_channel();

    let schema = Update::filter_message().endpoint(handle_message);

    let mut dispatcher = Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![
            Arc::new(table),
            policy,
            FatalErrors(fatal_sender)
        ])
        .enable_ctrlc_handler()
        .build();

    until_fatal(dispatcher.dispatch(), &mut fatal_receiver).await
}
