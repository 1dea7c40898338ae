//! Turns the session transcript into styled, pre-wrapped lines.
//!
//! Wrapping happens here rather than in the `Paragraph` widget so the line
//! count is known exactly and scrolling can be clamped to it.

use std::time::Duration;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::message::Message;
use crate::ui::layout::{bubble_max_width, display_width, wrap_text};

const BUBBLE_PADDING: usize = 1;

pub fn user_bubble_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

pub fn assistant_bubble_style() -> Style {
    Style::default().fg(Color::Gray).bg(Color::DarkGray)
}

/// Build every transcript line for a pane `pane_width` columns wide.
///
/// `pending_elapsed` is the time since the pending indicator started, or
/// `None` when no exchange is in flight.
pub fn build_transcript_lines(
    messages: &[Message],
    pane_width: u16,
    pending_elapsed: Option<Duration>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for message in messages {
        push_bubble(
            &mut lines,
            message.text(),
            Some(message.display_time()),
            message.is_user(),
            pane_width,
        );
    }

    if let Some(elapsed) = pending_elapsed {
        let dots = pending_dots(elapsed);
        push_bubble(&mut lines, &dots, None, false, pane_width);
    }

    lines
}

fn push_bubble(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    time: Option<String>,
    is_user: bool,
    pane_width: u16,
) {
    let inner_width = bubble_max_width(pane_width)
        .saturating_sub(BUBBLE_PADDING * 2)
        .max(1);
    let wrapped = wrap_text(text, inner_width);
    let content_width = wrapped
        .iter()
        .map(|line| display_width(line))
        .chain(time.iter().map(|t| display_width(t)))
        .max()
        .unwrap_or(0);

    let (style, alignment) = if is_user {
        (user_bubble_style(), Alignment::Right)
    } else {
        (assistant_bubble_style(), Alignment::Left)
    };

    let padded = |content: &str, style: Style| {
        let fill = content_width.saturating_sub(display_width(content));
        let pad = " ".repeat(BUBBLE_PADDING);
        Line::from(Span::styled(
            format!("{pad}{content}{}{pad}", " ".repeat(fill)),
            style,
        ))
        .alignment(alignment)
    };

    for line in &wrapped {
        lines.push(padded(line, style));
    }
    if let Some(time) = time {
        lines.push(padded(&time, style.add_modifier(Modifier::DIM)));
    }
    lines.push(Line::from(""));
}

/// Three dots with one highlighted, cycling every 300ms.
pub fn pending_dots(elapsed: Duration) -> String {
    let active = (elapsed.as_millis() / 300 % 3) as usize;
    (0..3)
        .map(|i| if i == active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}
