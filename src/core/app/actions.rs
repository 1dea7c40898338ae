use tokio::sync::mpsc;
use tui_textarea::Input;

use super::{App, SidebarItem};
use crate::core::exchange::ExchangeOutcome;
use crate::core::session::{PendingExchange, ResetKind};

const SCROLL_STEP: u16 = 1;

pub enum AppAction {
    SubmitInput,
    ExchangeSettled { outcome: ExchangeOutcome },
    NewChat,
    ClearChat,
    ActivateSidebarItem,
    SidebarPrevious,
    SidebarNext,
    ToggleFocus,
    FocusInput,
    InsertIntoInput { text: String },
    InsertNewline,
    EditInput { input: Input },
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AppActionContext {
    pub term_width: u16,
    pub term_height: u16,
}

pub struct AppActionEnvelope {
    pub action: AppAction,
    pub context: AppActionContext,
}

#[derive(Clone)]
pub struct AppActionDispatcher {
    tx: mpsc::UnboundedSender<AppActionEnvelope>,
}

impl AppActionDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<AppActionEnvelope>) -> Self {
        Self { tx }
    }

    pub fn dispatch(&self, action: AppAction, ctx: AppActionContext) {
        self.dispatch_many([action], ctx);
    }

    pub fn dispatch_many<I>(&self, actions: I, ctx: AppActionContext)
    where
        I: IntoIterator<Item = AppAction>,
    {
        for action in actions.into_iter() {
            let _ = self.tx.send(AppActionEnvelope {
                action,
                context: ctx,
            });
        }
    }
}

/// Side effects the event loop runs after state has been updated.
#[derive(Debug, PartialEq, Eq)]
pub enum AppCommand {
    RunExchange(PendingExchange),
}

pub fn apply_actions(
    app: &mut App,
    envelopes: impl IntoIterator<Item = AppActionEnvelope>,
) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    for envelope in envelopes {
        if let Some(cmd) = apply_action(app, envelope.action, envelope.context) {
            commands.push(cmd);
        }
    }
    commands
}

pub fn apply_action(app: &mut App, action: AppAction, ctx: AppActionContext) -> Option<AppCommand> {
    match action {
        AppAction::SubmitInput => submit_input(app),
        AppAction::ExchangeSettled { outcome } => {
            if let Some(notification) = app.session.settle(outcome.id, outcome.result) {
                app.notify(notification);
            }
            app.sync_pending_clock();
            app.ui.scroll_to_bottom();
            None
        }
        AppAction::NewChat => {
            reset_session(app, ResetKind::NewChat);
            None
        }
        AppAction::ClearChat => {
            reset_session(app, ResetKind::ClearChat);
            None
        }
        AppAction::ActivateSidebarItem => {
            let kind = match app.ui.sidebar_selection {
                SidebarItem::NewChat => ResetKind::NewChat,
                SidebarItem::ClearChat => ResetKind::ClearChat,
            };
            reset_session(app, kind);
            None
        }
        AppAction::SidebarPrevious => {
            app.ui.sidebar_selection = app.ui.sidebar_selection.previous();
            None
        }
        AppAction::SidebarNext => {
            app.ui.sidebar_selection = app.ui.sidebar_selection.next();
            None
        }
        AppAction::ToggleFocus => {
            app.ui.toggle_focus();
            None
        }
        AppAction::FocusInput => {
            app.ui.focus_input();
            None
        }
        AppAction::InsertIntoInput { text } => {
            if !text.is_empty() && !app.session.is_pending() {
                app.ui.focus_input();
                app.ui.apply_textarea_edit(|ta| {
                    ta.insert_str(&text);
                });
            }
            None
        }
        AppAction::InsertNewline => {
            if !app.session.is_pending() {
                app.ui.apply_textarea_edit(|ta| ta.insert_newline());
            }
            None
        }
        AppAction::EditInput { input } => {
            if !app.session.is_pending() {
                app.ui.apply_textarea_edit(|ta| {
                    ta.input(input);
                });
            }
            None
        }
        AppAction::ScrollUp => {
            let max = app.max_scroll_offset(ctx.term_width, ctx.term_height);
            app.ui.scroll_up(SCROLL_STEP, max);
            None
        }
        AppAction::ScrollDown => {
            let max = app.max_scroll_offset(ctx.term_width, ctx.term_height);
            app.ui.scroll_down(SCROLL_STEP, max);
            None
        }
        AppAction::PageUp => {
            let max = app.max_scroll_offset(ctx.term_width, ctx.term_height);
            let page = app.transcript_page_height(ctx.term_width, ctx.term_height);
            app.ui.scroll_up(page, max);
            None
        }
        AppAction::PageDown => {
            let max = app.max_scroll_offset(ctx.term_width, ctx.term_height);
            let page = app.transcript_page_height(ctx.term_width, ctx.term_height);
            app.ui.scroll_down(page, max);
            None
        }
        AppAction::Quit => {
            app.ui.exit_requested = true;
            None
        }
    }
}

fn submit_input(app: &mut App) -> Option<AppCommand> {
    let text = app.ui.get_input_text();
    let exchange = app.session.begin_send(&text)?;
    app.ui.clear_input();
    app.ui.scroll_to_bottom();
    app.sync_pending_clock();
    Some(AppCommand::RunExchange(exchange))
}

fn reset_session(app: &mut App, kind: ResetKind) {
    let notification = app.session.reset(kind);
    app.notify(notification);
    app.sync_pending_clock();
    app.ui.scroll_to_bottom();
}
