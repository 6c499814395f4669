pub mod current_card;
pub mod forecast_grid;
pub mod hero_banner;
pub mod search_overlay;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_card::{CurrentCard, CurrentCardProps};
pub use forecast_grid::{ForecastGrid, ForecastGridProps};
pub use hero_banner::{HeroBanner, HeroBannerProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
