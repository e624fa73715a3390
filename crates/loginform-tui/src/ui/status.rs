//! Error and status lines
//!
//! The error line shows the last rejection message. The status line shows
//! progress, success, or key hints.

use loginform_app::{LoginForm, SubmissionPhase};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

/// Render the error line.
pub fn render_error(frame: &mut Frame, form: &LoginForm, area: Rect) {
    if let Some(error) = form.error_text() {
        let span = Span::styled(error.to_owned(), Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(span), area);
    }
}

/// Render the status line.
pub fn render(frame: &mut Frame, form: &LoginForm, area: Rect) {
    let status = match form.phase() {
        SubmissionPhase::InFlight => {
            Span::styled("Signing in...", Style::default().fg(Color::Yellow))
        },
        SubmissionPhase::Succeeded => Span::styled(
            "Signed in",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        SubmissionPhase::Idle | SubmissionPhase::Failed(_) if form.submit_enabled() => {
            Span::styled("Enter: sign in | Esc: cancel", Style::default().fg(Color::Gray))
        },
        SubmissionPhase::Idle | SubmissionPhase::Failed(_) => {
            Span::styled("Tab: switch field | Esc: cancel", Style::default().fg(Color::DarkGray))
        },
    };

    frame.render_widget(Paragraph::new(status), area);
}
