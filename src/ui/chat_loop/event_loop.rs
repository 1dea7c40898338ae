use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::Size;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::keybindings::resolve_key;
use super::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};
use crate::core::app::{
    apply_actions, App, AppAction, AppActionContext, AppActionDispatcher, AppActionEnvelope,
    AppCommand,
};
use crate::core::backend::HttpBackend;
use crate::core::config::data::ClientSettings;
use crate::core::exchange::{ExchangeOutcome, ExchangeService};
use crate::ui::renderer::ui;

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

const MAX_FPS: u64 = 30;

fn try_draw_frame(
    app: &App,
    terminal: &mut ChatTerminal,
    request_redraw: &mut bool,
    last_draw: &mut Instant,
    frame_duration: Duration,
) -> io::Result<()> {
    if !*request_redraw {
        return Ok(());
    }

    let now = Instant::now();
    if now.duration_since(*last_draw) < frame_duration {
        return Ok(());
    }

    terminal.draw(|f| ui(f, app))?;
    *last_draw = now;
    *request_redraw = false;
    Ok(())
}

/// Translate queued terminal events into actions. Returns true if any arrived.
fn process_ui_events(
    app: &App,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
    dispatcher: &AppActionDispatcher,
    term_size: Size,
) -> bool {
    let ctx = AppActionContext {
        term_width: term_size.width,
        term_height: term_size.height,
    };
    let mut events_processed = false;

    while let Ok(ev) = event_rx.try_recv() {
        events_processed = true;
        match ev {
            UiEvent::Crossterm(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(action) = resolve_key(&key, app.ui.focus, app.session.is_pending()) {
                    dispatcher.dispatch(action, ctx);
                }
            }
            UiEvent::Crossterm(Event::Paste(text)) => handle_paste_event(dispatcher, ctx, &text),
            UiEvent::Crossterm(_) => {}
        }
    }

    events_processed
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", "\n");
    let without_cr = without_crlf.replace('\r', "\n");
    let expanded_tabs = without_cr.replace('\t', "    ");
    expanded_tabs
        .chars()
        .filter(|&c| c == '\n' || !c.is_control())
        .collect()
}

pub(crate) fn handle_paste_event(
    dispatcher: &AppActionDispatcher,
    ctx: AppActionContext,
    text: &str,
) {
    let sanitized_text = sanitize_pasted_text(text);
    if sanitized_text.is_empty() {
        return;
    }
    dispatcher.dispatch(
        AppAction::InsertIntoInput {
            text: sanitized_text,
        },
        ctx,
    );
}

fn process_exchange_outcomes(
    dispatcher: &AppActionDispatcher,
    rx: &mut mpsc::UnboundedReceiver<ExchangeOutcome>,
    term_size: Size,
) -> bool {
    let ctx = AppActionContext {
        term_width: term_size.width,
        term_height: term_size.height,
    };
    let mut received_any = false;
    while let Ok(outcome) = rx.try_recv() {
        received_any = true;
        dispatcher.dispatch(AppAction::ExchangeSettled { outcome }, ctx);
    }
    received_any
}

fn drain_action_queue(
    app: &mut App,
    exchange_service: &ExchangeService,
    action_rx: &mut mpsc::UnboundedReceiver<AppActionEnvelope>,
) -> bool {
    let mut pending = Vec::new();
    while let Ok(envelope) = action_rx.try_recv() {
        pending.push(envelope);
    }

    if pending.is_empty() {
        return false;
    }

    for cmd in apply_actions(app, pending) {
        match cmd {
            AppCommand::RunExchange(exchange) => exchange_service.spawn_exchange(exchange),
        }
    }
    true
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(settings: ClientSettings) -> Result<(), Box<dyn Error>> {
    let backend = HttpBackend::new(settings.endpoint.clone(), settings.request_timeout)?;
    let (exchange_service, mut outcome_rx) = ExchangeService::new(Arc::new(backend));
    let mut app = App::new(&settings);
    info!(endpoint = %settings.endpoint, "starting chat session");

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<AppActionEnvelope>();
    let dispatcher = AppActionDispatcher::new(action_tx);

    let mut terminal = setup_terminal()?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let frame_duration = Duration::from_millis(1000 / MAX_FPS);
    let mut last_draw = Instant::now() - frame_duration;
    let mut request_redraw = true;

    let result: Result<(), Box<dyn Error>> = 'main_loop: loop {
        if app.ui.exit_requested {
            break 'main_loop Ok(());
        }

        if let Err(err) = try_draw_frame(
            &app,
            &mut terminal,
            &mut request_redraw,
            &mut last_draw,
            frame_duration,
        ) {
            break 'main_loop Err(err.into());
        }

        let term_size = terminal.size().unwrap_or_default();
        if term_size != app.ui.last_term_size {
            app.ui.last_term_size = term_size;
            request_redraw = true;
        }

        let events_processed = process_ui_events(&app, &mut event_rx, &dispatcher, term_size);
        let received_any = process_exchange_outcomes(&dispatcher, &mut outcome_rx, term_size);
        let actions_applied = drain_action_queue(&mut app, &exchange_service, &mut action_rx);

        if events_processed || received_any || actions_applied {
            request_redraw = true;
        }

        // The pending dots animate and toasts expire without any input.
        if app.session.is_pending() {
            request_redraw = true;
        }
        if app.toasts.prune(Instant::now()) {
            request_redraw = true;
        }

        if !events_processed && !received_any && !actions_applied {
            tokio::time::sleep(Duration::from_millis(16)).await;
        }
    };

    event_reader_handle.abort();
    restore_terminal(&mut terminal)?;
    debug!("chat session ended");

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::create_test_app;
    use crate::core::backend::{ChatBackend, ExchangeFailed};
    use async_trait::async_trait;

    struct CannedBackend;

    #[async_trait]
    impl ChatBackend for CannedBackend {
        async fn submit(&self, message: &str) -> Result<String, ExchangeFailed> {
            Ok(format!("You asked: {message}"))
        }
    }

    fn new_dispatcher() -> (AppActionDispatcher, mpsc::UnboundedReceiver<AppActionEnvelope>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppActionDispatcher::new(tx), rx)
    }

    #[test]
    fn sanitize_paste_text_removes_control_characters() {
        assert_eq!(
            sanitize_pasted_text("a\r\nb\rc\td\u{7}e"),
            "a\nb\nc    de"
        );
    }

    #[test]
    fn handle_paste_event_dispatches_insert_action() {
        let (dispatcher, mut rx) = new_dispatcher();
        handle_paste_event(&dispatcher, AppActionContext::default(), "paste\tinput");

        let envelope = rx.try_recv().expect("paste should dispatch");
        match envelope.action {
            AppAction::InsertIntoInput { text } => assert_eq!(text, "paste    input"),
            _ => panic!("expected InsertIntoInput"),
        }
    }

    #[test]
    fn empty_paste_dispatches_nothing() {
        let (dispatcher, mut rx) = new_dispatcher();
        handle_paste_event(&dispatcher, AppActionContext::default(), "\u{1b}");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn submitted_input_round_trips_through_exchange_service() {
        let mut app = create_test_app();
        let (dispatcher, mut action_rx) = new_dispatcher();
        let (service, mut outcome_rx) = ExchangeService::new(Arc::new(CannedBackend));
        let size = Size::new(80, 24);
        let ctx = AppActionContext {
            term_width: 80,
            term_height: 24,
        };

        dispatcher.dispatch_many(
            [
                AppAction::InsertIntoInput {
                    text: "Article 19".to_string(),
                },
                AppAction::SubmitInput,
            ],
            ctx,
        );
        assert!(drain_action_queue(&mut app, &service, &mut action_rx));
        assert!(app.session.is_pending());

        let outcome = outcome_rx.recv().await.expect("exchange should settle");
        dispatcher.dispatch(AppAction::ExchangeSettled { outcome }, ctx);
        assert!(drain_action_queue(&mut app, &service, &mut action_rx));

        assert!(!app.session.is_pending());
        let texts: Vec<_> = app.session.messages().iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["Article 19", "You asked: Article 19"]);
        assert!(!process_exchange_outcomes(&dispatcher, &mut outcome_rx, size));
    }
}
