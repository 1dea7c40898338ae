//! TUI-less "say" command

use std::error::Error;

use tracing::info;

use crate::core::backend::{ChatBackend, HttpBackend};
use crate::core::config::data::ClientSettings;
use crate::core::notification::Notification;
use crate::core::session::ChatSession;

/// Exit status when the exchange failed and the placeholder was printed.
pub const EXIT_EXCHANGE_FAILED: i32 = 1;
/// Exit status for a missing or blank prompt.
pub const EXIT_USAGE: i32 = 2;

/// Result of a single non-interactive exchange.
#[derive(Debug, PartialEq, Eq)]
pub enum SayOutcome {
    Blank,
    Replied {
        text: String,
        failure: Option<Notification>,
    },
}

/// Run one exchange through a fresh session.
pub async fn say_once(backend: &dyn ChatBackend, prompt: &str) -> SayOutcome {
    let mut session = ChatSession::new();
    let failure = session.send_message(backend, prompt).await;

    match session.messages().last() {
        Some(reply) if !reply.is_user() => SayOutcome::Replied {
            text: reply.text().to_string(),
            failure,
        },
        _ => SayOutcome::Blank,
    }
}

pub async fn run_say(prompt: Vec<String>, settings: ClientSettings) -> Result<(), Box<dyn Error>> {
    let prompt = prompt.join(" ");
    let backend = HttpBackend::new(settings.endpoint, settings.request_timeout)?;
    info!(endpoint = backend.endpoint(), "sending one-shot prompt");

    match say_once(&backend, &prompt).await {
        SayOutcome::Blank => {
            eprintln!("Usage: dastur say <prompt>");
            std::process::exit(EXIT_USAGE);
        }
        SayOutcome::Replied { text, failure } => {
            println!("{text}");
            if let Some(notification) = failure {
                eprintln!(
                    "❌ {}: {}",
                    notification.title(),
                    notification.description()
                );
                std::process::exit(EXIT_EXCHANGE_FAILED);
            }
            Ok(())
        }
    }
}
