//! Main layout rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// Render the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three bands: title bar, content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Dialogs draw on top of everything
    components::modal::render(app, frame);
}

/// Title bar: application name on the left, data freshness on the right.
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let left = format!(" {} v{}", texts.common.app_name, env!("CARGO_PKG_VERSION"));
    let right = if app.watchlist.last_updated.is_empty() {
        String::new()
    } else {
        format!(
            "{} {} ",
            texts.watchlist.updated_label, app.watchlist.last_updated
        )
    };

    let padding = usize::from(area.width)
        .saturating_sub(left.width())
        .saturating_sub(right.width());

    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]);

    let title = Paragraph::new(line).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// Content: the flagged-domain table inside a titled border.
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.watchlist.title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::watchlist::render(app, frame, inner_area);
}
