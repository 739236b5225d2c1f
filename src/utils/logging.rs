use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub fn parse_level(level: &str) -> LibraryResult<Level> {
    Level::from_str(level).map_err(|err| LibraryError::runtime(
        format!("invalid log level {:?}: {}", level, err).as_str(), Some("config".to_string())))
}

/// Installs the global subscriber for the configured level and format. Fails if
/// the level is invalid or a subscriber is already installed.
pub fn setup_tracing(config: &Configuration) -> LibraryResult<()> {
    let level = parse_level(config.log_level.as_str())?;
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false);
    let res = if config.json_logs {
        builder.with_ansi(false).json().try_init()
    } else {
        builder.try_init()
    };
    res.map_err(|err| LibraryError::runtime(
        format!("failed to install tracing subscriber {}", err).as_str(), None))
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::utils::logging::{parse_level, setup_tracing};

    #[test]
    fn test_should_parse_level() {
        assert_eq!(Level::DEBUG, parse_level("debug").expect("should parse level"));
        assert_eq!(Level::WARN, parse_level("WARN").expect("should parse level"));
        assert!(matches!(parse_level("loud"), Err(LibraryError::Runtime { .. })));
    }

    #[test]
    fn test_should_reject_invalid_level_before_installing() {
        let mut config = Configuration::new("test");
        config.log_level = "loud".to_string();
        assert!(setup_tracing(&config).is_err());
    }

    #[test]
    fn test_should_install_once() {
        let config = Configuration::new("test");
        let _ = setup_tracing(&config);
        assert!(matches!(setup_tracing(&config), Err(LibraryError::Runtime { .. })));
    }
}
