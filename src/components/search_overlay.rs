use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding, TextInput, TextInputProps,
    TextInputStyle, centered_rect,
};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter location (city, zip, landmark...)";

/// Modal location input; `Enter` submits, `Esc` cancels
pub struct SearchOverlay {
    input: TextInput,
    modal: Modal,
    was_open: bool,
}

pub struct SearchOverlayProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    // Action constructors
    pub on_query_change: fn(String) -> Action,
    pub on_query_submit: fn(String) -> Action,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
        }
        self.was_open = is_open;
    }
}

impl Component<Action> for SearchOverlay {
    type Props<'a> = SearchOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchClose],
            // Validation happens in the reducer, so blank input is submitted too
            KeyCode::Enter => return vec![(props.on_query_submit)(props.query.to_string())],
            _ => {}
        }

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::new(1, 0, 1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_query_change,
            on_submit: props.on_query_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 8 {
            return;
        }

        let SearchOverlay { input, modal, .. } = self;
        let modal_area = centered_rect(60, 12, area);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            let chunks = Layout::vertical([
                Constraint::Length(1), // Label
                Constraint::Length(3), // Input
                Constraint::Length(1), // Hint
            ])
            .split(content_area);

            let label = Line::from(vec![Span::styled(
                " Search location",
                Style::default().fg(Color::Cyan),
            )]);
            frame.render_widget(Paragraph::new(label), chunks[0]);

            // Input with lighter background
            let input_props = TextInputProps {
                value: props.query,
                placeholder: PLACEHOLDER,
                is_focused: props.is_focused,
                style: TextInputStyle {
                    base: BaseStyle {
                        border: None,
                        padding: Padding::all(1),
                        bg: Some(Color::Rgb(50, 50, 60)),
                        fg: None,
                    },
                    placeholder_style: None,
                    cursor_style: None,
                },
                on_change: props.on_query_change,
                on_submit: props.on_query_submit,
                on_cursor_move: Some(|_| Action::Render),
            };
            input.render(frame, chunks[1], input_props);

            let hint = Line::from(vec![Span::styled(
                "Enter search \u{00b7} Esc cancel",
                Style::default().fg(Color::DarkGray),
            )])
            .centered();
            frame.render_widget(Paragraph::new(hint), chunks[2]);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: ModalStyle {
                    base: BaseStyle {
                        bg: Some(Color::Rgb(35, 35, 45)),
                        padding: Padding::default(),
                        border: None,
                        fg: None,
                    },
                    ..Default::default()
                },
                behavior: ModalBehavior::default(),
                on_close: || Action::SearchClose,
                render_content: &mut render_content,
            },
        );
    }
}
