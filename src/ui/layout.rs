//! Screen geometry and text wrapping shared by rendering and scroll math.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthChar;

const SIDEBAR_MAX_WIDTH: u16 = 30;
const MAX_INPUT_LINES: u16 = 6;

/// Regions of the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub sidebar: Rect,
    pub transcript: Rect,
    pub input: Rect,
}

impl ChatLayout {
    pub fn new(area: Rect, input_lines: u16) -> Self {
        let sidebar_width = SIDEBAR_MAX_WIDTH.min(area.width / 3);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area);

        // +2 for the input box borders
        let input_height = input_lines.clamp(1, MAX_INPUT_LINES) + 2;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(input_height)])
            .split(columns[1]);

        Self {
            sidebar: columns[0],
            transcript: rows[0],
            input: rows[1],
        }
    }

    pub fn from_size(width: u16, height: u16, input_lines: u16) -> Self {
        Self::new(Rect::new(0, 0, width, height), input_lines)
    }
}

/// Widest a message bubble may grow inside a pane: 80% of it.
pub fn bubble_max_width(pane_width: u16) -> usize {
    (pane_width as usize * 4 / 5).max(1)
}

/// Word-wrap `text` into lines no wider than `width` terminal columns.
///
/// Explicit newlines are kept (blank lines included). Words wider than
/// `width` are broken at character boundaries.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = display_width(word);

            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }

            if word_width <= width - current_width {
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && current_width > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

/// Row count for `len` lines, saturating at the terminal's coordinate range.
pub fn line_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

pub fn display_width(text: &str) -> usize {
    text.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}
