//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::BackendClient;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch current conditions and forecast for `location`
    FetchWeather { generation: u64, location: String },
}

/// Run a weather search and turn its outcome into the result action
pub async fn fetch_weather(client: &BackendClient, generation: u64, location: &str) -> Action {
    match client.fetch_report(location).await {
        Ok(report) => Action::WeatherDidLoad { generation, report },
        Err(err) => {
            tracing::warn!(generation, location, error = %err, "weather search failed");
            Action::WeatherDidError {
                generation,
                message: err.user_message().to_string(),
            }
        }
    }
}
