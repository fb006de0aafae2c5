//! Input pane rendering
//!
//! Displays the original expression with the token at the cursor emphasized
//! and a caret marker (`^^^`) aligned underneath it on the following line.

use crate::stepper::RenderModel;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input pane
pub fn render_input_pane(frame: &mut Frame, area: Rect, model: &RenderModel) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let chars: Vec<char> = model.input_text.chars().collect();
    let cursor_end = (model.cursor_offset + model.cursor_width).min(chars.len());
    let before: String = chars[..model.cursor_offset.min(chars.len())].iter().collect();
    let current: String = chars[model.cursor_offset.min(chars.len())..cursor_end]
        .iter()
        .collect();
    let after: String = chars[cursor_end..].iter().collect();

    let current_style = if model.is_error {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    };

    let expression_line = Line::from(vec![
        Span::styled(before, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(current, current_style),
        Span::styled(after, Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    // Caret row aligned under the current token; empty at the terminal state.
    let caret_line = Line::from(vec![
        Span::raw(" ".repeat(model.cursor_offset)),
        Span::styled("^".repeat(model.cursor_width), current_style),
    ]);

    let paragraph = Paragraph::new(vec![expression_line, caret_line]).block(block);
    frame.render_widget(paragraph, area);
}
