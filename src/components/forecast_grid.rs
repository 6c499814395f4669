use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::view::{ForecastCardView, forecast_title};

/// Label, description and glyph + temperature, plus borders
const CARD_HEIGHT: u16 = 5;
/// Fits `Wed, Jan 10` inside the borders
const MIN_CARD_WIDTH: u16 = 13;
/// Title row + spacer
const TITLE_HEIGHT: u16 = 2;

/// Cards that fit side by side in `width` columns
pub fn cards_per_row(width: u16) -> usize {
    usize::from((width / MIN_CARD_WIDTH).max(1))
}

/// Rows needed to show every card at `width`, wrapping when they don't fit in one
pub fn grid_rows(card_count: usize, width: u16) -> usize {
    card_count.div_ceil(cards_per_row(width)).max(1)
}

/// Height that shows all `card_count` cards at `width`
pub fn grid_height(card_count: usize, width: u16) -> u16 {
    let rows = u16::try_from(grid_rows(card_count, width)).unwrap_or(u16::MAX);
    TITLE_HEIGHT.saturating_add(rows.saturating_mul(CARD_HEIGHT))
}

/// One bordered card per sampled day, wrapped into as many rows as the width needs
pub struct ForecastGrid;

pub struct ForecastGridProps<'a> {
    pub cards: &'a [ForecastCardView],
}

fn render_card(frame: &mut Frame, area: Rect, card: &ForecastCardView) {
    let lines = vec![
        Line::from(Span::styled(
            card.label.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(card.icon.glyph, Style::default().fg(card.icon.color)),
            Span::raw(" "),
            Span::styled(card.temperature.clone(), Style::default().fg(Color::Yellow)),
        ]),
    ];
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(90, 90, 110)));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

/// `5-Day Forecast`, or `3-Day Forecast (+2 more)` when rows were cut off
fn title_text(shown: usize, total: usize) -> String {
    if shown == 0 && total > 0 {
        return format!("{} (enlarge the terminal)", forecast_title(total));
    }
    let title = forecast_title(shown);
    if shown < total {
        format!("{title} (+{} more)", total - shown)
    } else {
        title
    }
}

impl Component<Action> for ForecastGrid {
    type Props<'a> = ForecastGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [title_area, _, cards_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let per_row = cards_per_row(cards_area.width);
        let rows_fit = usize::from(cards_area.height / CARD_HEIGHT);
        let shown = &props.cards[..props.cards.len().min(per_row * rows_fit)];

        let title = Line::from(Span::styled(
            title_text(shown.len(), props.cards.len()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), title_area);

        if props.cards.is_empty() {
            let empty = Line::from(Span::styled(
                "No forecast samples",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(empty), cards_area);
            return;
        }
        if shown.is_empty() {
            return;
        }

        let row_count = shown.len().div_ceil(per_row);
        let row_areas =
            Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); row_count]).split(cards_area);
        // Every row keeps the same column grid so a short last row lines up
        for (row, row_area) in shown.chunks(per_row).zip(row_areas.iter()) {
            let columns = Layout::horizontal(vec![Constraint::Fill(1); per_row.min(shown.len())])
                .split(*row_area);
            for (card, column) in row.iter().zip(columns.iter()) {
                render_card(frame, *column, card);
            }
        }
    }
}
