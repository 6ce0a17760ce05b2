use chrono::{DateTime, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use teloxide::utils::markdown;

use super::api::LiveRates;

/* Processor builds the text of every reply.
 * It holds no state and performs no I/O, the handlers do the fetching and sending.
 */

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %:z";

// Greeting with the sender's name in bold. The name is escaped for MarkdownV2.
pub fn greeting(first_name: &str) -> String {
    format!("Hello, {}", markdown::bold(&markdown::escape(first_name)))
}

pub fn format_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(DATE_FORMAT).to_string()
}

// Rounds the shortest decimal form of the value half away from zero,
// so 1500.125 becomes 1500.13 and 1.005 becomes 1.01.
pub fn format_rate(currency: &str, value: f64) -> String {
    match value.to_string().parse::<Decimal>() {
        Ok(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            // No "-0.00"
            let rounded = if rounded.is_zero() {
                Decimal::ZERO
            } else {
                rounded
            };
            format!("{currency}{rounded:.2}")
        }
        // NaN, infinities and values beyond Decimal's range
        Err(_) => format!("{currency}{value:.2}"),
    }
}

// One line per currency, in currency code order.
pub fn rate_lines(rates: &LiveRates) -> Vec<String> {
    rates
        .values
        .iter()
        .map(|(currency, value)| format_rate(currency, *value))
        .collect()
}
