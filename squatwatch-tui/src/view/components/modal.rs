//! Dialog components.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;

/// Render the active dialog, if any.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmWhitelist { .. } => render_confirm_whitelist(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// Compute a centered dialog area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Whitelist confirmation dialog.
fn render_confirm_whitelist(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmWhitelist { url, focus, .. } = modal else {
        return;
    };

    let texts = t();
    let area = centered_rect(48, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_whitelist.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.confirm_whitelist.question),
            Style::default().fg(Color::White),
        ),
        Line::styled(format!("  \"{url}\""), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(
                format!(" {} ", texts.modal.confirm_whitelist.confirm),
                confirm_style,
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Error dialog.
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let area = centered_rect(54, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 2, area.width - 4, area.height - 4);

    let lines = vec![
        Line::styled(message, Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            texts.modal.error.close_hint,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Help overlay.
fn render_help(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(56, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let entries: &[(&str, &str)] = &[
        ("↑↓/jk", texts.help.navigate),
        ("Space/Enter", texts.help.whitelist),
        ("r", texts.help.refresh),
        ("e", texts.help.export),
        ("?", texts.help.help),
        ("q", texts.help.quit),
    ];

    let dialog_entries: &[(&str, &str)] = &[
        ("Tab/←→", texts.help.switch_button),
        ("Enter", texts.help.activate),
        ("Esc", texts.help.close_dialog),
    ];

    let mut lines = vec![Line::styled(texts.help.section_table, section_style), Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(*desc, desc_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(texts.help.section_dialog, section_style));
    lines.push(Line::from(""));
    for (key, desc) in dialog_entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(*desc, desc_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        texts.help.close_hint,
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
