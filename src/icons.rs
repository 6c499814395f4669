//! Provider icon codes: image URLs and terminal glyphs
//!
//! The backend forwards OpenWeatherMap icon codes (`01d`, `10n`, ...). The
//! two leading digits name the condition and the suffix tells day from night.

use ratatui::style::Color;

/// Image service pattern; `{icon}` is replaced with the icon code.
pub const DEFAULT_ICON_URL_TEMPLATE: &str = "http://openweathermap.org/img/wn/{icon}@2x.png";

pub const ICON_PLACEHOLDER: &str = "{icon}";

/// Resolve an icon code to its image URL.
pub fn icon_url(template: &str, icon: &str) -> String {
    template.replace(ICON_PLACEHOLDER, icon)
}

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    FewClouds,
    ScatteredClouds,
    BrokenClouds,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl WeatherCondition {
    /// Map a provider icon code to its condition
    pub fn from_icon_code(code: &str) -> Self {
        match code.get(..2) {
            Some("01") => WeatherCondition::ClearSky,
            Some("02") => WeatherCondition::FewClouds,
            Some("03") => WeatherCondition::ScatteredClouds,
            Some("04") => WeatherCondition::BrokenClouds,
            Some("09") => WeatherCondition::ShowerRain,
            Some("10") => WeatherCondition::Rain,
            Some("11") => WeatherCondition::Thunderstorm,
            Some("13") => WeatherCondition::Snow,
            Some("50") => WeatherCondition::Mist,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn emoji(self, night: bool) -> &'static str {
        match self {
            WeatherCondition::ClearSky if night => "\u{1f319}",
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::FewClouds => "\u{26c5}",
            WeatherCondition::ScatteredClouds | WeatherCondition::BrokenClouds => "\u{2601}\u{fe0f}",
            WeatherCondition::ShowerRain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f326}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Mist => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Unknown => "?",
        }
    }

    pub fn color(self) -> Color {
        match self {
            WeatherCondition::ClearSky => Color::Yellow,
            WeatherCondition::FewClouds => Color::Rgb(230, 210, 140),
            WeatherCondition::ScatteredClouds | WeatherCondition::BrokenClouds => {
                Color::Rgb(170, 170, 185)
            }
            WeatherCondition::ShowerRain | WeatherCondition::Rain => Color::Rgb(100, 160, 255),
            WeatherCondition::Thunderstorm => Color::Rgb(200, 150, 255),
            WeatherCondition::Snow => Color::White,
            WeatherCondition::Mist => Color::Rgb(140, 140, 150),
            WeatherCondition::Unknown => Color::DarkGray,
        }
    }
}

pub fn is_night(code: &str) -> bool {
    code.ends_with('n')
}

/// Glyph shown in place of the icon image
pub fn icon_glyph(code: &str) -> &'static str {
    WeatherCondition::from_icon_code(code).emoji(is_night(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_substitutes_code() {
        assert_eq!(
            icon_url(DEFAULT_ICON_URL_TEMPLATE, "01d"),
            "http://openweathermap.org/img/wn/01d@2x.png"
        );
        assert_eq!(icon_url("https://cdn/{icon}.svg", "10n"), "https://cdn/10n.svg");
    }

    #[test]
    fn test_condition_from_code() {
        assert_eq!(WeatherCondition::from_icon_code("01d"), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_icon_code("04n"), WeatherCondition::BrokenClouds);
        assert_eq!(WeatherCondition::from_icon_code("11d"), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_icon_code("50n"), WeatherCondition::Mist);
        assert_eq!(WeatherCondition::from_icon_code("7"), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_icon_code(""), WeatherCondition::Unknown);
    }

    #[test]
    fn test_night_clear_sky_uses_moon() {
        assert_eq!(icon_glyph("01n"), "\u{1f319}");
        assert_eq!(icon_glyph("01d"), "\u{2600}\u{fe0f}");
        assert_eq!(icon_glyph("13n"), icon_glyph("13d"));
    }
}
