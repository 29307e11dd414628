//! Tests for the process-wide facade.
//!
//! Every test swaps the active logger, so they run one at a time behind
//! `LOCK`.

use std::sync::{Arc, Mutex, MutexGuard};

use clap::Command;
use logshim::cli::{bind_flags, parse_flags};
use logshim::infrastructure::logging::Record;
use logshim::{kv, CaptureLogger, Level, LogFormat, Logger, Value};

static LOCK: Mutex<()> = Mutex::new(());

/// Install a fresh capture logger as the active logger
fn capture(verbosity: u8) -> (MutexGuard<'static, ()>, CaptureLogger) {
    let guard = LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let logger = CaptureLogger::new();
    logger.set_log_level(verbosity);
    logshim::set_logger(Arc::new(logger.clone()));
    (guard, logger)
}

#[test]
fn test_leveled_functions_forward_to_active_logger() {
    let (_guard, logger) = capture(2);

    logshim::tracef!("t {}", 1);
    logshim::debugf!("d {}", 2);
    logshim::infof!("i {}", 3);
    logshim::warnf!("w {}", 4);
    logshim::errorf!("e {}", 5);

    let levels: Vec<Level> = logger.records().iter().map(|r| r.level).collect();
    assert_eq!(
        levels,
        vec![Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error]
    );
    assert_eq!(logger.messages(), vec!["t 1", "d 2", "i 3", "w 4", "e 5"]);
}

#[test]
fn test_default_verbosity_hides_debug_and_trace() {
    let (_guard, logger) = capture(0);

    logshim::tracef(format_args!("hidden"));
    logshim::debugf(format_args!("hidden"));
    logshim::infof(format_args!("shown"));

    assert!(!logshim::is_trace_enabled());
    assert!(!logshim::is_debug_enabled());
    assert_eq!(logger.messages(), vec!["shown"]);
}

#[test]
fn test_parse_flags_configures_active_logger() {
    let (_guard, logger) = capture(0);
    let matches = bind_flags(Command::new("app"))
        .try_get_matches_from(["app", "-v", "-v", "-v"])
        .unwrap();

    parse_flags(&matches);

    assert_eq!(logger.verbosity(), 3);
    assert!(logshim::is_trace_enabled());
    assert!(logshim::is_debug_enabled());
    assert_eq!(logger.format(), LogFormat::Pretty);
}

#[test]
fn test_parse_flags_json_logs_selects_json() {
    let (_guard, logger) = capture(0);
    let matches = bind_flags(Command::new("app"))
        .try_get_matches_from(["app", "--json-logs"])
        .unwrap();

    parse_flags(&matches);

    assert_eq!(logger.format(), LogFormat::Json);
    assert_eq!(logger.verbosity(), 0);
}

#[test]
fn test_parse_flags_without_bound_flags_resets_to_zero() {
    let (_guard, logger) = capture(2);
    let matches = Command::new("app").try_get_matches_from(["app"]).unwrap();

    parse_flags(&matches);

    assert_eq!(logger.verbosity(), 0);
    assert!(!logshim::is_trace_enabled());
}

#[test]
fn test_secretf_scrubs_before_emitting() {
    let (_guard, logger) = capture(2);

    logshim::secretf!(
        "host: {}\napi_secret: {}\ntoken=",
        "example.com",
        "abcdef123"
    );

    let records = logger.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Trace);
    assert_eq!(
        records[0].message,
        "host: example.com\napi_secret:****3\ntoken=\n"
    );
}

#[test]
fn test_secretf_treats_scrubbed_text_as_literal() {
    let (_guard, logger) = capture(2);

    logshim::secretf!("note = {}", "{} %s {x}");

    assert_eq!(logger.messages(), vec!["note = {} %s {x}\n"]);
}

#[test]
fn test_secretf_silent_when_trace_disabled() {
    let (_guard, logger) = capture(1);

    logshim::secretf!("password: {}", "hunter2");

    assert!(logger.records().is_empty());
}

#[test]
fn test_prettyf_renders_debug_output() {
    #[derive(Debug)]
    #[allow(dead_code)]
    struct Endpoint {
        host: &'static str,
        port: u16,
    }

    let (_guard, logger) = capture(2);
    logshim::prettyf(
        "endpoint:",
        &Endpoint {
            host: "localhost",
            port: 8080,
        },
    );

    let messages = logger.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("endpoint: Endpoint {\n"));
    assert!(messages[0].contains("port: 8080"));
}

#[test]
fn test_with_values_derives_without_mutating_active() {
    let (_guard, logger) = capture(0);

    let derived = logshim::with_values(kv! { "request_id" => "r-1", "attempt" => 2u8 });
    derived.info(format_args!("scoped"));
    logshim::infof!("unscoped");

    let records: Vec<Record> = logger.records();
    assert_eq!(records[0].fields.get("request_id"), Some(&Value::Str("r-1".into())));
    assert_eq!(records[0].fields.get("attempt"), Some(&Value::UInt(2)));
    assert!(records[1].fields.is_empty());
}

#[test]
fn test_standard_logger_is_the_active_logger() {
    let (_guard, logger) = capture(0);

    logshim::standard_logger().warn(format_args!("via value"));

    assert_eq!(logger.messages(), vec!["via value"]);
}

#[test]
fn test_set_logger_replaces_previous() {
    let (_guard, first) = capture(0);
    let second = CaptureLogger::new();
    logshim::set_logger(Arc::new(second.clone()));

    logshim::infof!("to second");

    assert!(first.records().is_empty());
    assert_eq!(second.messages(), vec!["to second"]);
}
