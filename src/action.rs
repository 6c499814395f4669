//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Open the location input
    SearchOpen,

    /// Close the location input without searching
    SearchClose,

    /// Location input text changed
    SearchInputChange(String),

    /// Submit a location (validated by the reducer)
    SearchSubmit(String),

    // ===== Weather category =====
    /// Intent: repeat the last submitted search
    WeatherRefresh,

    /// Result: both requests of search `generation` succeeded
    WeatherDidLoad {
        generation: u64,
        report: WeatherReport,
    },

    /// Result: search `generation` failed
    WeatherDidError { generation: u64, message: String },

    // ===== UI category =====
    /// Toggle between Celsius and Fahrenheit
    UiToggleUnits,

    /// Toggle between stride and midday day sampling
    UiToggleSampling,

    /// Force a re-render (for cursor movement, etc.)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}
