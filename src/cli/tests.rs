use super::*;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn no_subcommand_defaults_to_chat() {
    let args = parse_args(&["dastur"]);
    assert!(args.command.is_none());
    assert_eq!(args.command.unwrap_or(Commands::Chat), Commands::Chat);
}

#[test]
fn say_collects_every_word() {
    let args = parse_args(&["dastur", "say", "what", "is", "--article", "25?"]);
    assert_eq!(
        args.command,
        Some(Commands::Say {
            prompt: vec![
                "what".to_string(),
                "is".to_string(),
                "--article".to_string(),
                "25?".to_string(),
            ],
        })
    );
}

#[test]
fn global_flags_parse_after_subcommand() {
    let args = parse_args(&[
        "dastur",
        "chat",
        "--endpoint",
        "http://localhost:9000/api/chat",
        "--log-file",
        "/tmp/dastur.log",
    ]);
    assert_eq!(args.command, Some(Commands::Chat));
    assert_eq!(
        args.endpoint.as_deref(),
        Some("http://localhost:9000/api/chat")
    );
    assert_eq!(args.log_file, Some(PathBuf::from("/tmp/dastur.log")));
}

#[test]
fn set_and_unset_parse_key_and_value() {
    let args = parse_args(&["dastur", "set", "request-timeout", "30"]);
    assert_eq!(
        args.command,
        Some(Commands::Set {
            key: "request-timeout".to_string(),
            value: vec!["30".to_string()],
        })
    );

    let args = parse_args(&["dastur", "unset", "endpoint"]);
    assert_eq!(
        args.command,
        Some(Commands::Unset {
            key: "endpoint".to_string(),
        })
    );
}

#[test]
fn apply_set_updates_config() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    let message = apply_set(
        &registry,
        &mut config,
        "endpoint",
        &["https://example.com/api/chat".to_string()],
    )
    .expect("endpoint should be accepted");

    assert!(message.contains("https://example.com/api/chat"));
    assert_eq!(
        config.endpoint.as_deref(),
        Some("https://example.com/api/chat")
    );

    apply_unset(&registry, &mut config, "endpoint").expect("unset should succeed");
    assert_eq!(config.endpoint, None);
}

#[test]
fn apply_set_rejects_unknown_key_without_touching_config() {
    let registry = SettingRegistry::new();
    let mut config = Config::default();

    let err = apply_set(&registry, &mut config, "theme", &["dark".to_string()])
        .expect_err("unknown key should fail");

    assert_eq!(err, SettingError::UnknownKey("theme".to_string()));
    assert_eq!(config, Config::default());
}
