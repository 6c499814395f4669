//! Display text derived from the loaded report

use ratatui::style::Color;

use crate::forecast::{daily_samples, day_label, SamplingStrategy};
use crate::icons::{icon_glyph, icon_url, WeatherCondition};
use crate::state::{CurrentConditions, ForecastEntry, ForecastSeries, TempUnit};

/// Icon as the terminal shows it, plus the image it stands in for
#[derive(Clone, Debug, PartialEq)]
pub struct IconView {
    pub glyph: &'static str,
    pub color: Color,
    pub url: String,
}

impl IconView {
    pub fn new(code: &str, url_template: &str) -> Self {
        Self {
            glyph: icon_glyph(code),
            color: WeatherCondition::from_icon_code(code).color(),
            url: icon_url(url_template, code),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurrentCardView {
    pub heading: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub icon: IconView,
}

impl CurrentCardView {
    pub fn new(current: &CurrentConditions, unit: TempUnit, url_template: &str) -> Self {
        Self {
            heading: heading(current),
            temperature: unit.format(current.temperature),
            description: capitalize_words(&current.description),
            humidity: humidity_text(current.humidity),
            wind: wind_text(current.wind_speed),
            icon: IconView::new(&current.icon, url_template),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForecastCardView {
    pub label: String,
    pub temperature: String,
    pub description: String,
    pub icon: IconView,
}

impl ForecastCardView {
    pub fn new(entry: &ForecastEntry, unit: TempUnit, url_template: &str) -> Self {
        Self {
            label: day_label(&entry.timestamp),
            temperature: unit.format(entry.temperature),
            description: capitalize_words(&entry.description),
            icon: IconView::new(&entry.icon, url_template),
        }
    }
}

/// One card per sampled day
pub fn forecast_cards(
    series: &ForecastSeries,
    sampling: SamplingStrategy,
    unit: TempUnit,
    url_template: &str,
) -> Vec<ForecastCardView> {
    daily_samples(series, sampling)
        .into_iter()
        .map(|entry| ForecastCardView::new(entry, unit, url_template))
        .collect()
}

pub fn forecast_title(days: usize) -> String {
    format!("{days}-Day Forecast")
}

/// `London, GB`
pub fn heading(current: &CurrentConditions) -> String {
    format!("{}, {}", current.name, current.country)
}

pub fn humidity_text(humidity: f64) -> String {
    format!("Humidity: {}%", humidity)
}

pub fn wind_text(speed: f64) -> String {
    format!("Wind: {} m/s", speed)
}

/// Upper-case the first letter of every word: `clear sky` → `Clear Sky`
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
