use chrono::Datelike;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::hero_banner::TITLE;
use super::{Component, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main weather view component
#[derive(Default)]
pub struct WeatherDisplay;

pub fn footer_text(year: i32) -> String {
    format!("{TITLE} \u{00a9} {year}")
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherRefresh),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Char('s') => Some(Action::UiToggleSampling),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar + footer
        ])
        .split(area);

        let mut body = WeatherBody;
        body.render(frame, chunks[0], WeatherBodyProps { state: props.state });

        let footer = footer_text(chrono::Local::now().year());
        let footer_width = u16::try_from(footer.chars().count() + 1).unwrap_or(u16::MAX);
        let [hints_area, footer_area] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(footer_width)])
                .areas(chunks[1]);

        let sampling = format!("days: {}", props.state.sampling.label());
        let hints = [
            StatusBarHint::new("/", "search"),
            StatusBarHint::new("r", "refresh"),
            StatusBarHint::new("u", "units"),
            StatusBarHint::new("s", &sampling),
            StatusBarHint::new("q", "quit"),
        ];
        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            hints_area,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );

        frame.render_widget(
            Paragraph::new(Line::from(footer).right_aligned())
                .style(Style::default().fg(Color::DarkGray)),
            footer_area,
        );
    }
}
