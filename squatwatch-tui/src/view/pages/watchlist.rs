//! Flagged-domain table view.
//!
//! Row construction is split off into [`WatchlistRow`] so the placeholder
//! rules can be tested without a terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use squatwatch_api::FlaggedDomain;

use crate::i18n::{t, Translations};
use crate::model::App;
use crate::view::theme::colors;

// Column display widths
const COL_INDEX: usize = 4;
const COL_URL: usize = 30;
const COL_REGISTRAR: usize = 20;
const COL_ABUSE: usize = 24;
const COL_OWNER: usize = 20;

/// One fully resolved table row.
///
/// Optional registry fields are already substituted with the localized
/// placeholder, so rendering is a plain formatting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistRow {
    /// 1-based position in the table
    pub position: usize,
    pub url: String,
    pub registrar: String,
    pub abuse_emails: String,
    pub owner: String,
}

impl WatchlistRow {
    /// Build a row from an entry.
    ///
    /// Missing and empty owner or abuse values collapse to the placeholder,
    /// matching what the registry reports for unclaimed lookups.
    pub fn from_entry(position: usize, entry: &FlaggedDomain, texts: &Translations) -> Self {
        Self {
            position,
            url: entry.url.clone(),
            registrar: entry.registrar_name.clone(),
            abuse_emails: entry
                .abuse_emails
                .clone()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| texts.watchlist.unknown_emails.to_string()),
            owner: entry
                .owner_name
                .clone()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| texts.watchlist.unknown_owner.to_string()),
        }
    }
}

/// Render the table page.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(ref error) = app.watchlist.error {
        render_error(frame, area, error);
    } else if app.watchlist.entries.is_empty() {
        render_empty(frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// Load failure with a retry hint.
fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let texts = t();
    let c = colors();

    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.watchlist.load_failed),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("  {error}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.watchlist.retry_hint),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// Empty watchlist.
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.watchlist.empty),
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.watchlist.empty_hint),
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// The table itself: a header line plus one list item per entry.
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let header = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(
                "{} {} {} {} {}",
                pad(texts.watchlist.col_index, COL_INDEX),
                pad(texts.watchlist.col_url, COL_URL),
                pad(texts.watchlist.col_registrar, COL_REGISTRAR),
                pad(texts.watchlist.col_abuse_emails, COL_ABUSE),
                pad(texts.watchlist.col_owner, COL_OWNER),
            ),
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), Rect { height: 1, ..area });

    let list_area = Rect {
        y: area.y + 1,
        height: area.height.saturating_sub(1),
        ..area
    };

    let items: Vec<ListItem> = app
        .watchlist
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let row = WatchlistRow::from_entry(i + 1, entry, texts);
            let is_selected = i == app.watchlist.selected;

            let base = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let detail = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.muted)
            };

            let mark_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.warning)
            };

            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(pad(&row.position.to_string(), COL_INDEX), detail),
                Span::raw(" "),
                Span::styled(pad(&row.url, COL_URL), base),
                Span::raw(" "),
                Span::styled(pad(&row.registrar, COL_REGISTRAR), detail),
                Span::raw(" "),
                Span::styled(pad(&row.abuse_emails, COL_ABUSE), detail),
                Span::raw(" "),
                Span::styled(pad(&row.owner, COL_OWNER), detail),
                Span::raw(" "),
                Span::styled("[ ]", mark_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.watchlist.selected));

    frame.render_stateful_widget(list, list_area, &mut state);
}

/// Pad or truncate to an exact display width.
///
/// Registrar and owner values are frequently Cyrillic, so both measuring and
/// cutting have to go through unicode-width rather than byte counts.
fn pad(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut out = String::with_capacity(text.len() + width - text_width);
        out.push_str(text);
        for _ in text_width..width {
            out.push(' ');
        }
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    used += 1;
    for _ in used..width {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> FlaggedDomain {
        FlaggedDomain {
            domain_id: "42".to_string(),
            url: "sberbank-0nline.example.ru".to_string(),
            registrar_name: "REGRU-RU".to_string(),
            abuse_emails: Some("abuse@reg.ru".to_string()),
            owner_name: Some("ООО Ромашка".to_string()),
            last_updated: "07.03.2024".to_string(),
        }
    }

    #[test]
    fn test_row_keeps_present_values_verbatim() {
        let row = WatchlistRow::from_entry(1, &entry(), t());

        assert_eq!(row.position, 1);
        assert_eq!(row.url, "sberbank-0nline.example.ru");
        assert_eq!(row.registrar, "REGRU-RU");
        assert_eq!(row.abuse_emails, "abuse@reg.ru");
        assert_eq!(row.owner, "ООО Ромашка");
    }

    #[test]
    fn test_rows_follow_input_order() {
        let entries: Vec<FlaggedDomain> = (0..5)
            .map(|i| {
                let mut e = entry();
                e.domain_id = i.to_string();
                e.url = format!("site-{i}.example.ru");
                e
            })
            .collect();

        let rows: Vec<WatchlistRow> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| WatchlistRow::from_entry(i + 1, e, t()))
            .collect();

        assert_eq!(rows.len(), entries.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.position, i + 1);
            assert_eq!(row.url, format!("site-{i}.example.ru"));
        }
    }

    #[test]
    fn test_row_substitutes_placeholder_for_missing_fields() {
        let mut e = entry();
        e.abuse_emails = None;
        e.owner_name = None;

        let row = WatchlistRow::from_entry(3, &e, t());

        assert_eq!(row.abuse_emails, t().watchlist.unknown_emails);
        assert_eq!(row.owner, t().watchlist.unknown_owner);
    }

    #[test]
    fn test_row_treats_empty_strings_as_missing() {
        let mut e = entry();
        e.abuse_emails = Some(String::new());
        e.owner_name = Some(String::new());

        let row = WatchlistRow::from_entry(1, &e, t());

        assert_eq!(row.abuse_emails, t().watchlist.unknown_emails);
        assert_eq!(row.owner, t().watchlist.unknown_owner);
    }

    #[test]
    fn test_pad_fills_short_values() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad("", 3), "   ");
        assert_eq!(pad("abcdef", 6), "abcdef");
    }

    #[test]
    fn test_pad_truncates_with_ellipsis() {
        assert_eq!(pad("abcdefgh", 6), "abcde…");
    }

    #[test]
    fn test_pad_measures_cyrillic_by_display_width() {
        // 11 characters, 11 columns
        assert_eq!(pad("ООО Ромашка", 12), "ООО Ромашка ");
        assert_eq!(pad("ООО Ромашка", 8), "ООО Ром…");
    }
}
