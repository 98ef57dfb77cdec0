use jobrelay::setup_logging;

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging(true, true);
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_twice_is_harmless() {
    // A second subscriber install must not panic
    let result = std::panic::catch_unwind(|| {
        setup_logging(false, false);
        setup_logging(false, true);
    });

    assert!(result.is_ok(), "repeated setup_logging should not panic");
}
