//! Error types for Horizon Board.
//!
//! Only two kinds of failure exist: a configuration the grid cannot honor, and
//! a host that breaks its side of the item-factory contract. Both are fatal to
//! the pass that hit them and are surfaced to the host unchanged.

use thiserror::Error;

/// The main error type for Horizon Board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The grid configuration is invalid.
    #[error("invalid board configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// The host item factory returned no instance for a position.
    #[error("item factory returned no instance for position {position}")]
    MissingItem {
        /// The position that was requested.
        position: usize,
    },

    /// Timer-related error.
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),
}

/// Configuration errors.
///
/// These are never clamped or corrected; the caller receives them at the
/// point the bad value is used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The column count is below one.
    #[error("column count must be at least 1, got {0}")]
    ColumnCount(usize),

    /// A spacing value is negative or not finite.
    #[error("{name} must be a non-negative finite length, got {value}")]
    Spacing {
        /// Which spacing was rejected.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Attribute text could not be parsed.
    #[error("failed to parse board attributes: {0}")]
    Parse(String),
}

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("invalid or expired timer ID")]
    InvalidTimerId,
}

/// A specialized Result type for Horizon Board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: BoardError = ConfigError::ColumnCount(0).into();
        assert!(matches!(err, BoardError::Configuration(ConfigError::ColumnCount(0))));
        assert_eq!(
            err.to_string(),
            "invalid board configuration: column count must be at least 1, got 0"
        );
    }

    #[test]
    fn test_missing_item_message() {
        let err = BoardError::MissingItem { position: 7 };
        assert_eq!(err.to_string(), "item factory returned no instance for position 7");
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err: BoardError = TimerError::InvalidTimerId.into();
        assert!(err.source().is_some());
        assert!(BoardError::MissingItem { position: 0 }.source().is_none());
    }
}
