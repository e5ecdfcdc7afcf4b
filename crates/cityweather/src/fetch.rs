use crate::city::City;
use crate::client::{NwsClient, WeatherError};
use crate::report::WeatherReport;
use futures_util::stream::{self, StreamExt};
use log::warn;

/// Fetch current weather for every city, at most `max_in_flight` requests at
/// a time, and return once the whole batch has resolved. A failed city is
/// logged and skipped; it never aborts the rest of the batch. Reports come
/// back in completion order.
pub async fn fetch_all(
    client: &NwsClient,
    cities: &[City],
    max_in_flight: usize,
) -> Vec<WeatherReport> {
    stream::iter(cities)
        .map(|city| async move {
            match client.current_conditions(city).await {
                Ok(report) => Some(report),
                Err(err) => {
                    warn!("skipping {}: {err}", city.name);
                    None
                }
            }
        })
        .buffer_unordered(max_in_flight.max(1))
        .filter_map(|report| async move { report })
        .collect()
        .await
}

/// Blocking wrapper around [`fetch_all`] for callers that live outside an
/// async runtime, such as the render loop's worker thread.
pub fn fetch_all_blocking(
    client: &NwsClient,
    cities: &[City],
    max_in_flight: usize,
) -> Result<Vec<WeatherReport>, WeatherError> {
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(fetch_all(client, cities, max_in_flight)))
}
