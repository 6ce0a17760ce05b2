use serde::Deserialize;

use super::api::{fetch_snapshot_xml, ApiError};

/* Snapshot is the daily reference-rate dataset loaded once at startup.
 * The feed nests rate records inside time-stamped groups:
 *   <Cube><Cube time="..."><Cube currency="..." rate="..."/></Cube></Cube>
 * Rates are kept exactly as the feed writes them.
 */

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(rename = "Cube", default)]
    cube: Cubes,
}

#[derive(Debug, Default, Deserialize)]
struct Cubes {
    #[serde(rename = "Cube", default)]
    groups: Vec<TimeGroup>,
}

#[derive(Debug, Deserialize)]
struct TimeGroup {
    #[serde(rename = "@time")]
    time: String,
    #[serde(rename = "Cube", default)]
    rates: Vec<RateRecord>,
}

#[derive(Debug, Deserialize)]
struct RateRecord {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "@rate")]
    rate: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RateSnapshot {
    pub date: String,
    pub entries: Vec<(String, String)>,
}

impl RateSnapshot {
    // Parses the feed document. Only the first time group is kept.
    pub fn parse(xml: &str) -> Result<RateSnapshot, ApiError> {
        let envelope: Envelope = quick_xml::de::from_str(xml)?;
        let group = envelope
            .cube
            .groups
            .into_iter()
            .next()
            .ok_or(ApiError::EmptyFeed)?;

        Ok(RateSnapshot {
            date: group.time,
            entries: group
                .rates
                .into_iter()
                .map(|record| (record.currency, record.rate))
                .collect(),
        })
    }

    pub fn log(&self) {
        log::info!("Date {}", self.date);
        for (currency, rate) in &self.entries {
            log::info!("Currency : {} Rate : {}", currency, rate);
        }
    }
}

// Fetches, parses and logs the daily snapshot.
pub async fn load_snapshot(url: &str) -> Result<RateSnapshot, ApiError> {
    let xml = fetch_snapshot_xml(url).await?;
    let snapshot = RateSnapshot::parse(&xml)?;
    snapshot.log();
    Ok(snapshot)
}
