use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, ColorStop, Fill, LinearGradient, Renderer,
    fonts, integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::icons::WeatherCondition;
use crate::state::LOADING_ANIM_CYCLE_TICKS;

pub const TITLE: &str = "Weather Wonder";
pub const SUBTITLE: &str = "Discover the weather in your favorite locations";

/// Overhead inside the banner area: 1 spacer + 1 subtitle line.
/// The FIGlet title gets `area.height - BANNER_OVERHEAD`.
pub const BANNER_OVERHEAD: u16 = 2;

pub struct HeroBanner;

pub struct HeroBannerProps {
    /// Condition of the loaded report; tints the title gradient
    pub condition: Option<WeatherCondition>,
    pub is_animating: bool,
    pub tick_count: u32,
}

fn palette(condition: Option<WeatherCondition>) -> (ArtColor, ArtColor) {
    match condition {
        Some(WeatherCondition::ClearSky) => (ArtColor::rgb(255, 200, 80), ArtColor::rgb(255, 140, 60)),
        Some(WeatherCondition::FewClouds) => {
            (ArtColor::rgb(255, 210, 120), ArtColor::rgb(150, 190, 230))
        }
        Some(WeatherCondition::ScatteredClouds | WeatherCondition::BrokenClouds) => {
            (ArtColor::rgb(185, 195, 215), ArtColor::rgb(120, 130, 150))
        }
        Some(WeatherCondition::ShowerRain | WeatherCondition::Rain) => {
            (ArtColor::rgb(90, 150, 255), ArtColor::rgb(120, 210, 220))
        }
        Some(WeatherCondition::Thunderstorm) => {
            (ArtColor::rgb(170, 120, 255), ArtColor::rgb(90, 90, 170))
        }
        Some(WeatherCondition::Snow) => (ArtColor::rgb(200, 230, 255), ArtColor::rgb(250, 250, 255)),
        Some(WeatherCondition::Mist) => (ArtColor::rgb(160, 160, 170), ArtColor::rgb(205, 205, 215)),
        Some(WeatherCondition::Unknown) | None => {
            (ArtColor::rgb(120, 170, 255), ArtColor::rgb(200, 160, 255))
        }
    }
}

/// Position of the highlight within one animation cycle, in `0.0..1.0`
fn sweep_position(tick_count: u32) -> f32 {
    let steps = LOADING_ANIM_CYCLE_TICKS.max(1);
    (tick_count % steps) as f32 / steps as f32
}

/// Two-colour gradient; while loading a light band sweeps from left to right.
fn title_fill((from, to): (ArtColor, ArtColor), sweep: Option<f32>) -> Fill {
    let stops = match sweep {
        Some(position) => {
            let glow = from
                .interpolate(to, 0.5)
                .interpolate(ArtColor::rgb(255, 255, 255), 0.6);
            vec![
                ColorStop::new(0.0, from),
                ColorStop::new(0.05 + 0.9 * position, glow),
                ColorStop::new(1.0, to),
            ]
        }
        None => vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
    };
    Fill::Linear(LinearGradient::new(5.0, stops))
}

impl Component<Action> for HeroBanner {
    type Props<'a> = HeroBannerProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet title, artbox picks the best font
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let sweep = props.is_animating.then(|| sweep_position(props.tick_count));
        let fill = title_fill(palette(props.condition), sweep);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);
        frame.render_widget(ArtBox::new(&renderer, TITLE), chunks[0]);

        let subtitle = Line::from(vec![Span::styled(
            SUBTITLE,
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[2]);
    }
}
