//! Stack pane rendering
//!
//! Displays the evaluation stack bottom-to-top with the `(top)` marker next
//! to the most recently pushed value.

use crate::stepper::RenderModel;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default()
        .title(" Stack ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let line = if model.stack_text == "(empty)" {
        Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else if let Some(values) = model.stack_text.strip_suffix(" (top)") {
        Line::from(vec![
            Span::styled(values.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            Span::styled(" (top)", Style::default().fg(DEFAULT_THEME.comment)),
        ])
    } else {
        Line::from(Span::styled(
            model.stack_text.clone(),
            Style::default().fg(DEFAULT_THEME.number),
        ))
    };

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
