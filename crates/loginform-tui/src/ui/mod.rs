//! UI rendering
//!
//! Rendering functions that convert form state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod fields;
mod status;

use loginform_app::{LoginForm, PromptIcon};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 13;

/// Render the entire form.
pub fn render(frame: &mut Frame, form: &LoginForm) {
    const HEADER_HEIGHT: u16 = 2;
    const SPACER_HEIGHT: u16 = 1;
    const FIELD_HEIGHT: u16 = 3;
    const LINE_HEIGHT: u16 = 1;

    let card = centered(frame.area(), CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(card);
    frame.render_widget(Clear, card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SPACER_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(LINE_HEIGHT),
            Constraint::Length(LINE_HEIGHT),
        ])
        .split(inner);

    let [header_area, _, username_area, password_area, error_area, status_area] = chunks.as_ref()
    else {
        return;
    };

    render_header(frame, form, *header_area);
    fields::render(frame, form, *username_area, *password_area);
    status::render_error(frame, form, *error_area);
    status::render(frame, form, *status_area);
}

/// Render the prompt title (with icon) and message.
fn render_header(frame: &mut Frame, form: &LoginForm, area: Rect) {
    let prompt = form.prompt();
    let icon = match &prompt.icon {
        PromptIcon::None => String::new(),
        PromptIcon::Lock => "[#] ".into(),
        PromptIcon::Key => "[k] ".into(),
        PromptIcon::User => "[@] ".into(),
        PromptIcon::Named(name) => format!("[{name}] "),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(icon, Style::default().fg(Color::Cyan)),
            Span::styled(prompt.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(prompt.message.clone(), Style::default().fg(Color::Gray))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Rectangle of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
