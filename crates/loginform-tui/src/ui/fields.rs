//! Username and password inputs
//!
//! Draws both inputs, highlights the focused one and places the cursor at the
//! end of its text. The password is masked.

use loginform_app::{FocusTarget, FormField, LoginForm};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

const MASK: char = '•';
const TEXT_OFFSET: u16 = 1; // inside left/top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render both inputs.
pub fn render(frame: &mut Frame, form: &LoginForm, username_area: Rect, password_area: Rect) {
    render_field(frame, form, FormField::Username, username_area);
    render_field(frame, form, FormField::Password, password_area);
}

fn render_field(frame: &mut Frame, form: &LoginForm, field: FormField, area: Rect) {
    let (label, shown) = match field {
        FormField::Username => ("Username", form.username().to_owned()),
        FormField::Password => {
            ("Password", MASK.to_string().repeat(form.password().chars().count()))
        },
    };

    let focused = form.focus() == FocusTarget::from(field);
    let locked = form.phase().is_in_flight();
    let border = match (focused, locked) {
        (_, true) => Style::default().fg(Color::DarkGray),
        (true, false) => Style::default().fg(Color::Yellow),
        (false, false) => Style::default(),
    };

    let block = Block::default().borders(Borders::ALL).border_style(border).title(label);
    frame.render_widget(Paragraph::new(shown.as_str()).block(block), area);

    if focused && !locked {
        let text_width = u16::try_from(shown.chars().count()).unwrap_or(u16::MAX);
        let available = area.width.saturating_sub(TEXT_OFFSET + RIGHT_PADDING);
        let cursor_x = area.x.saturating_add(TEXT_OFFSET).saturating_add(text_width.min(available));
        let cursor_y = area.y.saturating_add(TEXT_OFFSET);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
