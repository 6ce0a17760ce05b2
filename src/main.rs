use std::{error::Error, sync::Arc};

use naira_rate_bot::bot::{
    load_snapshot, log_filters, run_dispatcher, CommandTable, Config, FrankfurterApi,
    LOG_FILTER_VAR,
};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    pretty_env_logger::formatted_builder()
        .parse_filters(&log_filters(std::env::var(LOG_FILTER_VAR).ok()))
        .init();
    log::info!("Starting naira rate bot...");

    let config = Config::from_env()?;

    load_snapshot(&config.snapshot_url).await?;

    let rates = FrankfurterApi::new(&config.rates_url)?;
    let table = CommandTable::standard(Arc::new(rates));
    let bot = teloxide::Bot::new(&config.bot_token);

    log::info!("Naira rate bot started successfully!");

    run_dispatcher(bot, table, config.failure_policy).await?;
    Ok(())
}
