use ratatui::prelude::Size;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::core::constants::INPUT_PLACEHOLDER;
use crate::ui::layout::line_count;

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFocus {
    Input,
    Sidebar,
}

/// Buttons in the sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    NewChat,
    ClearChat,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 2] = [SidebarItem::NewChat, SidebarItem::ClearChat];

    pub fn label(self) -> &'static str {
        match self {
            SidebarItem::NewChat => "New Chat",
            SidebarItem::ClearChat => "Clear Chat",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SidebarItem::NewChat => "+",
            SidebarItem::ClearChat => "×",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SidebarItem::NewChat => SidebarItem::ClearChat,
            SidebarItem::ClearChat => SidebarItem::NewChat,
        }
    }

    pub fn previous(self) -> Self {
        // Two entries, so previous and next coincide.
        self.next()
    }
}

pub struct UiState {
    textarea: TextArea<'static>,
    pub focus: UiFocus,
    pub sidebar_selection: SidebarItem,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    pub exit_requested: bool,
    pub last_term_size: Size,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(),
            focus: UiFocus::Input,
            sidebar_selection: SidebarItem::NewChat,
            scroll_offset: 0,
            auto_scroll: true,
            exit_requested: false,
            last_term_size: Size::default(),
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn focus_input(&mut self) {
        self.focus = UiFocus::Input;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            UiFocus::Input => UiFocus::Sidebar,
            UiFocus::Sidebar => UiFocus::Input,
        };
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus == UiFocus::Input
    }

    pub fn is_sidebar_focused(&self) -> bool {
        self.focus == UiFocus::Sidebar
    }

    pub fn get_input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn clear_input(&mut self) {
        self.textarea = new_textarea();
    }

    pub fn apply_textarea_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
    }

    pub fn input_line_count(&self) -> u16 {
        line_count(self.textarea.lines().len().max(1))
    }

    /// Pin the transcript to its newest line.
    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
    }

    /// Move the transcript up, leaving auto-scroll if it was on.
    pub fn scroll_up(&mut self, lines: u16, max_offset: u16) {
        let current = self.effective_scroll_offset(max_offset);
        self.auto_scroll = false;
        self.scroll_offset = current.saturating_sub(lines);
    }

    /// Move the transcript down; reaching the bottom re-enables auto-scroll.
    pub fn scroll_down(&mut self, lines: u16, max_offset: u16) {
        let current = self.effective_scroll_offset(max_offset);
        let next = current.saturating_add(lines).min(max_offset);
        self.scroll_offset = next;
        self.auto_scroll = next >= max_offset;
    }

    pub fn effective_scroll_offset(&self, max_offset: u16) -> u16 {
        if self.auto_scroll {
            max_offset
        } else {
            self.scroll_offset.min(max_offset)
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
    textarea
}
