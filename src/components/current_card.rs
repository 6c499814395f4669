use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::view::CurrentCardView;

/// Six content lines plus borders
pub const CURRENT_CARD_HEIGHT: u16 = 8;
const CARD_WIDTH: u16 = 60;

/// Current-conditions card
pub struct CurrentCard;

pub struct CurrentCardProps<'a> {
    pub card: &'a CurrentCardView,
}

impl Component<Action> for CurrentCard {
    type Props<'a> = CurrentCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [area] = Layout::horizontal([Constraint::Max(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let card = props.card;

        let lines = vec![
            Line::from(Span::styled(
                card.heading.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(card.icon.glyph, Style::default().fg(card.icon.color)),
                Span::raw("  "),
                Span::styled(
                    card.temperature.clone(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                card.description.clone(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(card.humidity.clone()),
            Line::from(card.wind.clone()),
            Line::from(Span::styled(
                card.icon.url.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(90, 90, 110)));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
