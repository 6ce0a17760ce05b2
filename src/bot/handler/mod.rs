// Exported functions
pub use self::utils::send_replies;

// Exported structs and types
pub use self::constants::{
    COMMAND_HELLO, COMMAND_NAIRA_RATE, COMMAND_PRINT_DATE, FAILURE_MESSAGE,
};
pub use self::general::{DefaultHandler, HelloHandler, PrintDateHandler};
pub use self::rates::NairaRateHandler;
pub use self::utils::{CommandHandler, Incoming, Reply};

// Submodules
mod constants;
mod general;
mod rates;
mod utils;
