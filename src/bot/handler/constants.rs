/* Commands */
pub const COMMAND_HELLO: &str = "/hello";
pub const COMMAND_PRINT_DATE: &str = "/print_date";
pub const COMMAND_NAIRA_RATE: &str = "/get_naira_rate";

/* Rates */
pub const RATES_BASE_CURRENCY: &str = "USD";

/* Messages */
pub const DEFAULT_MESSAGE: &str = "Say /hello";
pub const FAILURE_MESSAGE: &str =
    "Sorry, something went wrong while handling your request. Please try again later.";
