use clap::{CommandFactory, Parser};
use flashcard_api::cli::args::Args;
use flashcard_api::config::ServerConfig;
use std::ffi::OsStr;
use std::path::PathBuf;

#[test]
fn given_all_flags_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "flashcard-api",
        "--database",
        "/tmp/cards.db",
        "--host",
        "127.0.0.1",
        "--port",
        "8080",
        "--cors-origin",
        "https://cards.example",
        "-vv",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.database, PathBuf::from("/tmp/cards.db"));
    assert_eq!(parsed.host, "127.0.0.1");
    assert_eq!(parsed.port, 8080);
    assert_eq!(parsed.cors_origin, "https://cards.example");
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_short_flags_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["flashcard-api", "-d", "cards.db", "-p", "4000", "-v"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.database, PathBuf::from("cards.db"));
    assert_eq!(parsed.port, 4000);
    assert_eq!(parsed.verbose, 1);
}

#[test]
fn given_non_numeric_port_when_parsing_then_fails() {
    // Arrange
    let args = vec!["flashcard-api", "--port", "http"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail with non-numeric port");
}

#[test]
fn given_unknown_positional_when_parsing_then_fails() {
    // Arrange
    let args = vec!["flashcard-api", "serve"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail with unexpected argument");
}

#[test]
fn given_arguments_when_inspecting_then_each_has_environment_fallback() {
    // Arrange
    let command = Args::command();
    let env_of = |id: &str| {
        command
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(OsStr::to_os_string)
    };

    // Assert
    assert_eq!(env_of("database"), Some("DB_NAME".into()));
    assert_eq!(env_of("host"), Some("HOST".into()));
    assert_eq!(env_of("port"), Some("PORT".into()));
    assert_eq!(env_of("cors_origin"), Some("CORS_ORIGIN".into()));
}

#[test]
fn given_parsed_args_when_building_config_then_copies_settings() {
    // Arrange
    let parsed = Args::try_parse_from(vec![
        "flashcard-api",
        "-d",
        "cards.db",
        "--host",
        "127.0.0.1",
        "-p",
        "9000",
        "--cors-origin",
        "http://localhost:5173",
    ])
    .unwrap();

    // Act
    let config = ServerConfig::from(&parsed);

    // Assert
    assert_eq!(config.database, PathBuf::from("cards.db"));
    assert_eq!(config.socket_addr(), "127.0.0.1:9000");
    assert_eq!(config.cors_origin, "http://localhost:5173");
    assert!(config.cors_layer().is_ok());
}

#[test]
fn given_args_definition_when_validating_then_is_consistent() {
    Args::command().debug_assert();
}
