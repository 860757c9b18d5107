//! Tests for logger initialisation

#[cfg(test)]
mod tests {
    use unshred::io::logging::{default_filter, init_logging};

    // Tests the filter selected by the quiet and verbose flags
    // Verified by letting verbosity override quiet
    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, 0), "info");
        assert_eq!(default_filter(false, 1), "debug");
        assert_eq!(default_filter(false, 2), "trace");
        assert_eq!(default_filter(false, 9), "trace");
        assert_eq!(default_filter(true, 0), "warn");
        assert_eq!(default_filter(true, 2), "warn");
    }

    // Tests a second initialisation leaves the first logger in place
    // Verified by panicking on repeated initialisation
    #[test]
    fn test_repeated_initialisation() {
        let _first = init_logging(true, 0);
        assert!(!init_logging(false, 1));
        log::debug!("logger still usable after repeated initialisation");
    }
}
