//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::forecast::{SamplingStrategy, DEFAULT_STRIDE};
use crate::icons::DEFAULT_ICON_URL_TEMPLATE;

/// Point-in-time conditions for the searched location
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentConditions {
    pub name: String,
    pub country: String,
    /// Degrees Celsius, as reported by the backend
    pub temperature: f64,
    pub description: String,
    /// Provider icon code, e.g. `01d`
    pub icon: String,
    /// Percent
    pub humidity: f64,
    /// Metres per second
    pub wind_speed: f64,
}

/// One sample of the forecast series
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastEntry {
    /// Raw `dt_txt` value, e.g. `2024-01-01 12:00:00`
    pub timestamp: String,
    pub temperature: f64,
    pub description: String,
    pub icon: String,
}

/// Time-ordered forecast samples as returned by the backend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
}

/// Both datasets of one successful search. They are only ever stored together.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: ForecastSeries,
}

/// Temperature unit preference
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    pub fn toggle(&self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    /// Format a Celsius reading in this unit, e.g. `15 °C` or `59 °F`.
    ///
    /// Celsius values are shown exactly as the backend sent them.
    pub fn format(&self, celsius: f64) -> String {
        match self {
            TempUnit::Celsius => format!("{} °C", celsius),
            TempUnit::Fahrenheit => {
                let fahrenheit = ((celsius * 9.0 / 5.0 + 32.0) * 10.0).round() / 10.0;
                format!("{} °F", fahrenheit)
            }
        }
    }
}

/// The four mutually exclusive states of the view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Error,
    Result,
}

/// Animation timing for the banner gradient.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Search (visible in debug) ---
    /// Last submitted query, trimmed
    #[debug(section = "Search", label = "Query")]
    pub query: String,

    /// Bumped on every submit; results from older generations are dropped
    #[debug(section = "Search", label = "Generation")]
    pub generation: u64,

    /// Search lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub report: DataResource<WeatherReport>,

    /// Temperature unit preference
    #[debug(section = "Weather", label = "Unit", debug_fmt)]
    pub unit: TempUnit,

    /// How forecast samples are reduced to one per day
    #[debug(section = "Weather", label = "Sampling", debug_fmt)]
    pub sampling: SamplingStrategy,

    // --- Presentation settings (skipped) ---
    /// Stride restored when toggling back from midday sampling
    #[debug(skip)]
    pub stride: usize,

    /// Icon image URL pattern with an `{icon}` placeholder
    #[debug(skip)]
    pub icon_url_template: String,

    // --- Animation internals (skipped) ---
    /// Animation frame counter (for banner gradient)
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,

    // --- Search input (skipped) ---
    /// Whether the search input is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Text currently typed into the search input
    #[debug(skip)]
    pub search_input: String,
}

impl AppState {
    /// Create an idle state with the given presentation settings
    pub fn new(sampling: SamplingStrategy, icon_url_template: impl Into<String>) -> Self {
        let stride = match sampling {
            SamplingStrategy::Stride { every } => every.max(1),
            SamplingStrategy::Midday => DEFAULT_STRIDE,
        };
        Self {
            query: String::new(),
            generation: 0,
            report: DataResource::Empty,
            unit: TempUnit::default(),
            sampling,
            stride,
            icon_url_template: icon_url_template.into(),
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
            search_mode: false,
            search_input: String::new(),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        match &self.report {
            DataResource::Empty => ViewPhase::Idle,
            DataResource::Loading => ViewPhase::Loading,
            DataResource::Failed(_) => ViewPhase::Error,
            DataResource::Loaded(_) => ViewPhase::Result,
        }
    }

    pub fn current_weather(&self) -> Option<&CurrentConditions> {
        self.report.data().map(|report| &report.current)
    }

    pub fn forecast(&self) -> Option<&ForecastSeries> {
        self.report.data().map(|report| &report.forecast)
    }

    pub fn loading_anim_active(&self) -> bool {
        self.report.is_loading() || self.loading_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SamplingStrategy::default(), DEFAULT_ICON_URL_TEMPLATE)
    }
}
