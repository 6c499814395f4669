use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::current_card::CURRENT_CARD_HEIGHT;
use super::forecast_grid::grid_height;
use super::hero_banner::BANNER_OVERHEAD;
use super::{
    Component, CurrentCard, CurrentCardProps, ERROR_ICON, ForecastGrid, ForecastGridProps,
    HeroBanner, HeroBannerProps,
};
use crate::action::Action;
use crate::forecast::daily_samples;
use crate::icons::WeatherCondition;
use crate::state::{AppState, WeatherReport};
use crate::view::{CurrentCardView, forecast_cards};

/// Rows used by the loading, idle and error messages
const MESSAGE_HEIGHT: u16 = 4;

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Banner caps by terminal height: terminus(6), miniwi(4), plain(1),
/// each plus the subtitle overhead.
fn banner_cap(area_height: u16) -> u16 {
    let title = if area_height >= 30 {
        6
    } else if area_height >= 22 {
        4
    } else {
        1
    };
    title + BANNER_OVERHEAD
}

/// Current card, gap and the full forecast grid at `width`
fn ready_height(card_count: usize, width: u16) -> u16 {
    CURRENT_CARD_HEIGHT + 1 + grid_height(card_count, width)
}

/// Banner rows left once the content and its spacer are placed. Zero when the
/// banner would be squeezed below one title line.
fn banner_height(area_height: u16, content_height: u16) -> u16 {
    let room = area_height.saturating_sub(content_height.saturating_add(1));
    let height = banner_cap(area_height).min(room);
    if height <= BANNER_OVERHEAD {
        0
    } else {
        height
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let view = WeatherView::from_state(state);
        let content_height = match view {
            WeatherView::Ready(report) => ready_height(
                daily_samples(&report.forecast, state.sampling).len(),
                area.width,
            ),
            _ => MESSAGE_HEIGHT,
        };

        let banner_rows = banner_height(area.height, content_height);
        let content_area = if banner_rows == 0 {
            area
        } else {
            let [banner_area, _, content_area] = Layout::vertical([
                Constraint::Length(banner_rows),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .areas(area);

            let mut banner = HeroBanner;
            banner.render(
                frame,
                banner_area,
                HeroBannerProps {
                    condition: state
                        .current_weather()
                        .map(|c| WeatherCondition::from_icon_code(&c.icon)),
                    is_animating: state.loading_anim_active(),
                    tick_count: state.tick_count,
                },
            );
            content_area
        };

        match view {
            WeatherView::Error(error) => render_error(frame, content_area, error),
            WeatherView::Ready(report) => render_ready(frame, content_area, state, report),
            WeatherView::Loading => render_loading(frame, content_area, &state.query),
            WeatherView::Empty => render_idle_hint(frame, content_area),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, report: &WeatherReport) {
    let cards = forecast_cards(
        &report.forecast,
        state.sampling,
        state.unit,
        &state.icon_url_template,
    );
    // The gap goes first when rows are short
    let gap = u16::from(area.height >= ready_height(cards.len(), area.width));
    let [current_area, _, forecast_area] = Layout::vertical([
        Constraint::Length(CURRENT_CARD_HEIGHT),
        Constraint::Length(gap),
        Constraint::Min(0),
    ])
    .areas(area);

    let card = CurrentCardView::new(&report.current, state.unit, &state.icon_url_template);
    let mut current = CurrentCard;
    current.render(frame, current_area, CurrentCardProps { card: &card });

    let mut grid = ForecastGrid;
    grid.render(frame, forecast_area, ForecastGridProps { cards: &cards });
}

fn render_loading(frame: &mut Frame, area: Rect, query: &str) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let msg = Line::from(vec![
        Span::styled("Loading weather for ", Style::default().fg(Color::DarkGray)),
        Span::styled(query.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled("...", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(msg), line_area);
}

fn render_idle_hint(frame: &mut Frame, area: Rect) {
    let [line_area] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search for a location", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), line_area);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon + "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::raw(ERROR_ICON),
                Span::raw(" "),
                Span::styled("Error", Style::default().fg(Color::Red).bold()),
            ])
            .centered(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("/", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to search again", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[3],
    );
}

// ============================================================================
// Helpers
// ============================================================================

#[derive(Clone, Copy)]
enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherReport),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.report {
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(report) => WeatherView::Ready(report),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}
