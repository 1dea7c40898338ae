//! Handlers for each configuration key.

use super::{success_set, success_unset, SettingError, SettingHandler};
use crate::core::config::data::Config;
use crate::core::constants::DEFAULT_ENDPOINT;
use crate::utils::url::parse_endpoint;

/// Handler for the `endpoint` setting.
pub struct EndpointHandler;

impl SettingHandler for EndpointHandler {
    fn key(&self) -> &'static str {
        "endpoint"
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(raw) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: "To set the chat endpoint, specify its full URL:",
                example: "dastur set endpoint http://127.0.0.1:8000/api/chat",
            });
        };

        let endpoint = parse_endpoint(raw).map_err(SettingError::InvalidEndpoint)?;
        let message = success_set(self.key(), &endpoint);
        config.endpoint = Some(endpoint);
        Ok(message)
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        config.endpoint = None;
        Ok(success_unset(self.key()))
    }

    fn format(&self, config: &Config) -> String {
        match &config.endpoint {
            Some(endpoint) => format!("  endpoint: {endpoint}"),
            None => format!("  endpoint: (unset, default: {DEFAULT_ENDPOINT})"),
        }
    }
}

/// Data-driven handler for settings measured in whole seconds.
pub struct SecondsHandler {
    key: &'static str,
    hint: &'static str,
    example: &'static str,
    default_display: &'static str,
    get: fn(&Config) -> Option<u64>,
    set_field: fn(&mut Config, Option<u64>),
}

impl SettingHandler for SecondsHandler {
    fn key(&self) -> &'static str {
        self.key
    }

    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError> {
        let Some(raw) = args.first() else {
            return Err(SettingError::MissingArgs {
                hint: self.hint,
                example: self.example,
            });
        };

        let secs = raw
            .trim()
            .trim_end_matches('s')
            .parse::<u64>()
            .map_err(|_| SettingError::InvalidSeconds(raw.clone()))?;
        (self.set_field)(config, Some(secs));
        Ok(success_set(self.key, &format!("{secs}s")))
    }

    fn unset(&self, config: &mut Config) -> Result<String, SettingError> {
        (self.set_field)(config, None);
        Ok(format!(
            "{} (will use default: {})",
            success_unset(self.key),
            self.default_display
        ))
    }

    fn format(&self, config: &Config) -> String {
        match (self.get)(config) {
            Some(secs) => format!("  {}: {secs}s", self.key),
            None => format!("  {}: (unset, default: {})", self.key, self.default_display),
        }
    }
}

/// Create a handler for the `request-timeout` setting. Zero disables the timeout.
pub fn request_timeout_handler() -> SecondsHandler {
    SecondsHandler {
        key: "request-timeout",
        hint: "To set a request timeout, specify seconds (0 waits forever):",
        example: "dastur set request-timeout 60",
        default_display: "none",
        get: |c| c.request_timeout_secs,
        set_field: |c, v| c.request_timeout_secs = v,
    }
}

/// Create a handler for the `toast-duration` setting.
pub fn toast_duration_handler() -> SecondsHandler {
    SecondsHandler {
        key: "toast-duration",
        hint: "To set how long notifications stay visible, specify seconds:",
        example: "dastur set toast-duration 6",
        default_display: "4s",
        get: |c| c.toast_duration_secs,
        set_field: |c, v| c.toast_duration_secs = v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::settings::SettingRegistry;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn endpoint_is_validated_and_kept_as_typed() {
        let registry = SettingRegistry::new();
        let handler = registry.get("endpoint").unwrap();
        let mut config = Config::default();

        let message = handler
            .set(&args(&[" http://localhost:8000/api/chat/ "]), &mut config)
            .unwrap();

        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8000/api/chat/")
        );
        assert!(message.contains("http://localhost:8000/api/chat/"));

        let err = handler.set(&args(&["localhost"]), &mut config).unwrap_err();
        assert!(matches!(err, SettingError::InvalidEndpoint(_)));
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8000/api/chat/")
        );
    }

    #[test]
    fn seconds_accept_optional_suffix() {
        let registry = SettingRegistry::new();
        let mut config = Config::default();

        registry
            .get("request-timeout")
            .unwrap()
            .set(&args(&["30s"]), &mut config)
            .unwrap();
        registry
            .get("toast-duration")
            .unwrap()
            .set(&args(&["6"]), &mut config)
            .unwrap();

        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.toast_duration_secs, Some(6));
    }

    #[test]
    fn invalid_seconds_are_rejected() {
        let handler = request_timeout_handler();
        let mut config = Config::default();
        assert_eq!(
            handler.set(&args(&["soon"]), &mut config),
            Err(SettingError::InvalidSeconds("soon".to_string()))
        );
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn missing_value_reports_example() {
        let handler = EndpointHandler;
        let mut config = Config::default();
        assert!(matches!(
            handler.set(&[], &mut config),
            Err(SettingError::MissingArgs { .. })
        ));
    }

    #[test]
    fn unset_restores_default_display() {
        let registry = SettingRegistry::new();
        let mut config = Config {
            endpoint: Some("http://x.example/api/chat".to_string()),
            request_timeout_secs: Some(5),
            toast_duration_secs: Some(9),
        };

        for key in registry.keys_display_order().to_vec() {
            registry.get(key).unwrap().unset(&mut config).unwrap();
        }

        assert_eq!(config, Config::default());
        assert_eq!(
            registry.format_all(&config),
            vec![
                format!("  endpoint: (unset, default: {DEFAULT_ENDPOINT})"),
                "  request-timeout: (unset, default: none)".to_string(),
                "  toast-duration: (unset, default: 4s)".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_key_is_an_error() {
        let registry = SettingRegistry::new();
        assert!(matches!(
            registry.get("theme"),
            Err(SettingError::UnknownKey(key)) if key == "theme"
        ));
    }
}
