//! Operation pane rendering
//!
//! Displays the human-readable description of the most recent operation,
//! colored by outcome: error text in red, completion in green.

use crate::stepper::RenderModel;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the operation pane
pub fn render_operation_pane(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default()
        .title(" Operation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let style = if model.is_error {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else if model.is_done() {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let paragraph = Paragraph::new(model.operation_text.clone())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
