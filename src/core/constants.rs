//! Shared constants used across the application

/// Endpoint used when neither flags, environment nor config name one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/chat";

/// Environment variable consulted for the endpoint before the config file.
pub const ENDPOINT_ENV_VAR: &str = "DASTUR_ENDPOINT";

/// Environment variable holding the tracing filter directives.
pub const LOG_FILTER_ENV_VAR: &str = "DASTUR_LOG";

/// Reply shown when the backend answers without usable `response` text.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't process your request at the moment.";

/// Reply shown when the exchange with the backend fails for any reason.
pub const BACKEND_UNAVAILABLE_REPLY: &str = "I'm a Pakistan Constitution chatbot. Your backend API is not connected yet. Please set up your Python backend with the '/api/chat' endpoint to start receiving responses about Pakistan's Constitution.";

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_TOAST_SECS: u64 = 4;

/// Upper bound on toasts drawn at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

pub const APP_TITLE: &str = "Pakistan Constitution Bot";
pub const APP_FOOTER: &str = "Constitutional AI Assistant";
pub const INPUT_PLACEHOLDER: &str = "Ask anything about Pakistan's Constitution...";

pub const WELCOME_HEADING: &str = "Hey. Ready to dive in?";
pub const WELCOME_BLURB: &str = "Ask me anything about Pakistan's Constitution. I'm here to help you understand constitutional law, rights, and governance.";
pub const WELCOME_SUGGESTIONS: [&str; 3] = [
    "Ask about fundamental rights",
    "Inquire about government structure",
    "Inquire about laws",
];
