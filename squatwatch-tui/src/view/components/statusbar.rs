//! Bottom status bar.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

/// Render shortcut hints and the transient status message.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Hints depend on whether a dialog is open.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();

    if app.modal.is_open() {
        return vec![
            ("Tab/←→", texts.help.switch_button),
            ("Enter", texts.help.activate),
            ("Esc", texts.common.close),
        ];
    }

    vec![
        ("↑↓/jk", texts.status_bar.navigate),
        ("Space", texts.status_bar.whitelist),
        ("r", texts.status_bar.refresh),
        ("e", texts.status_bar.export),
        ("?", texts.status_bar.help),
        ("q", texts.status_bar.quit),
    ]
}
