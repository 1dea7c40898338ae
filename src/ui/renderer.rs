use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::app::{App, SidebarItem, Toast};
use crate::core::constants::{
    APP_FOOTER, APP_TITLE, WELCOME_BLURB, WELCOME_HEADING, WELCOME_SUGGESTIONS,
};
use crate::ui::layout::{line_count, wrap_text, ChatLayout};
use crate::ui::transcript::build_transcript_lines;

const TOAST_MAX_WIDTH: u16 = 44;

pub fn ui(f: &mut Frame, app: &App) {
    let layout = ChatLayout::new(f.area(), app.ui.input_line_count());

    render_sidebar(f, app, layout.sidebar);
    render_transcript(f, app, layout.transcript);
    render_input(f, app, layout.input);
    render_toasts(f, app, layout.transcript);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 {
        return;
    }

    let focused = app.ui.is_sidebar_focused();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(focus_border_style(focused))
        .title(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let mut buttons = vec![Line::from("")];
    for item in SidebarItem::ALL {
        let selected = item == app.ui.sidebar_selection;
        let style = if selected && focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        buttons.push(Line::from(Span::styled(
            format!(" {} {} ", item.icon(), item.label()),
            style,
        )));
    }
    f.render_widget(Paragraph::new(buttons), sections[0]);

    let dim = Style::default().add_modifier(Modifier::DIM);
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(APP_FOOTER, dim)),
        Line::from(Span::styled(app.endpoint.clone(), dim)),
    ]);
    f.render_widget(footer, sections[1]);
}

fn render_transcript(f: &mut Frame, app: &App, area: Rect) {
    let pending = app.pending_since().map(|since| since.elapsed());

    if app.session.is_empty() && pending.is_none() {
        render_welcome(f, area);
        return;
    }

    let lines = build_transcript_lines(app.session.messages(), area.width, pending);
    let max_offset = line_count(lines.len()).saturating_sub(area.height);
    let offset = app.ui.effective_scroll_offset(max_offset);

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn render_welcome(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            WELCOME_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_BLURB,
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
    ];
    lines.extend(
        WELCOME_SUGGESTIONS
            .iter()
            .map(|suggestion| Line::from(format!("• {suggestion}"))),
    );

    // Roughly centre the block vertically.
    let top = area.height.saturating_sub(line_count(lines.len()).saturating_add(2)) / 2;
    let body = Rect {
        y: area.y + top,
        height: area.height.saturating_sub(top),
        ..area
    };

    let welcome = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(welcome, body);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.session.is_pending() {
        "Waiting for reply..."
    } else {
        "Message (Enter to send, Alt+Enter for new line, Tab for sidebar, Ctrl+C to quit)"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border_style(app.ui.is_input_focused()))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(app.ui.textarea(), inner);
}

fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    let width = TOAST_MAX_WIDTH.min(area.width);
    if width < 4 {
        return;
    }

    let now = Instant::now();
    let mut y = area.y;
    for toast in app.toasts.visible() {
        let lines = toast_lines(toast, width.saturating_sub(2) as usize);
        let height = line_count(lines.len()).saturating_add(2);
        if y.saturating_add(height) > area.y.saturating_add(area.height) {
            break;
        }

        let rect = Rect::new(area.x + area.width - width, y, width, height);
        let border = if toast.notification.is_error() {
            Color::Red
        } else {
            Color::Green
        };
        // Fade the border once the toast is past its first second.
        let border_style = if now.saturating_duration_since(toast.shown_at).as_secs() >= 1 {
            Style::default().fg(border)
        } else {
            Style::default().fg(border).add_modifier(Modifier::BOLD)
        };

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            ),
            rect,
        );
        y += height;
    }
}

fn toast_lines(toast: &Toast, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        toast.notification.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        wrap_text(toast.notification.description(), width)
            .into_iter()
            .map(Line::from),
    );
    lines
}

fn focus_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::{apply_action, create_test_app, AppAction, AppActionContext, AppCommand};
    use crate::core::exchange::ExchangeOutcome;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| ui(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn ctx() -> AppActionContext {
        AppActionContext {
            term_width: 100,
            term_height: 30,
        }
    }

    fn send(app: &mut App, text: &str) -> AppCommand {
        apply_action(
            app,
            AppAction::InsertIntoInput {
                text: text.to_string(),
            },
            ctx(),
        );
        apply_action(app, AppAction::SubmitInput, ctx()).expect("exchange should start")
    }

    #[test]
    fn empty_session_shows_sidebar_and_welcome() {
        let app = create_test_app();
        let screen = render(&app, 100, 30);

        assert!(screen.contains(APP_TITLE));
        assert!(screen.contains("New Chat"));
        assert!(screen.contains("Clear Chat"));
        assert!(screen.contains(APP_FOOTER));
        assert!(screen.contains(WELCOME_HEADING));
        assert!(screen.contains("Ask about fundamental rights"));
    }

    #[test]
    fn pending_exchange_shows_message_and_indicator() {
        let mut app = create_test_app();
        send(&mut app, "What is Article 25?");

        let screen = render(&app, 100, 30);

        assert!(screen.contains("What is Article 25?"));
        assert!(screen.contains("Waiting for reply..."));
        assert!(!screen.contains(WELCOME_HEADING));
        assert!(screen.contains('●'));
    }

    #[test]
    fn failure_toast_is_drawn_over_transcript() {
        let mut app = create_test_app();
        let AppCommand::RunExchange(exchange) = send(&mut app, "test");
        apply_action(
            &mut app,
            AppAction::ExchangeSettled {
                outcome: ExchangeOutcome {
                    id: exchange.id,
                    result: Err(crate::core::backend::ExchangeFailed::new("refused")),
                },
            },
            ctx(),
        );

        let screen = render(&app, 100, 30);

        assert!(screen.contains(app.toasts.visible().next().expect("toast").notification.title()));
        assert!(!screen.contains("Waiting for reply..."));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = create_test_app();
        send(&mut app, "hello");
        apply_action(&mut app, AppAction::NewChat, ctx());
        render(&app, 3, 2);
        render(&app, 1, 1);
    }
}
