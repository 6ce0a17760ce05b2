// bot/mod.rs

// Exported functions
pub use self::dispatcher::run_dispatcher;
pub use self::snapshot::load_snapshot;

// Exported structs and types
pub use self::api::{ApiError, FrankfurterApi, LiveRates, RatesSource};
pub use self::config::{log_filters, Config, ConfigError, LOG_FILTER_VAR};
pub use self::dispatcher::{BotError, CommandTable, FailurePolicy, HandlerResult};
pub use self::handler::{CommandHandler, Incoming, Reply};
pub use self::snapshot::RateSnapshot;

// Declare submodules
mod api;
mod config;
mod dispatcher;
mod handler;
mod processor;
mod snapshot;
