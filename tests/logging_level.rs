// tests/logging_level.rs

use fork_cmd::cli::LogLevel;
use fork_cmd::logging::resolve_level;
use tracing::Level;

#[test]
fn cli_flag_wins_over_env() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), Level::TRACE);
}

#[test]
fn env_is_used_without_flag() {
    assert_eq!(resolve_level(None, Some("debug")), Level::DEBUG);
    assert_eq!(resolve_level(None, Some(" WARN ")), Level::WARN);
}

#[test]
fn falls_back_to_info() {
    assert_eq!(resolve_level(None, None), Level::INFO);
    assert_eq!(resolve_level(None, Some("chatty")), Level::INFO);
}
