// Installs the global tracing subscriber, so it lives in its own test
// binary and runs as a single test.

use logshim::domain::LoggingError;
use logshim::{LogConfig, LogFormat, Logger};

#[test]
fn test_init_installs_once_and_switches_format() {
    let config = LogConfig {
        verbosity: 1,
        format: LogFormat::Pretty,
        ansi: false,
    };

    logshim::init(&config).expect("first install should succeed");

    let active = logshim::standard_logger();
    assert_eq!(active.verbosity(), 1);
    assert!(logshim::is_debug_enabled());
    assert!(!logshim::is_trace_enabled());

    // Reloading the output layer must not disturb emission
    active.set_format(LogFormat::Json);
    logshim::infof!("after switching to json");
    active.set_format(LogFormat::Pretty);

    let second = logshim::init(&LogConfig::default());
    assert!(matches!(second, Err(LoggingError::AlreadyInstalled(_))));

    // A failed init leaves the attached logger active
    assert_eq!(logshim::standard_logger().verbosity(), 1);
}
