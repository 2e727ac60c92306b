use std::path::PathBuf;

use crate::game::MoveError;

/// Errors that can occur when assigning players their counters.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("too many players: only {available} distinct symbols are available")]
    SymbolsExhausted { available: usize },
}

/// Errors an agent can hit while choosing a column.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no legal column left to play")]
    NoLegalColumns,

    #[error("input closed before a valid column was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that stop a game in progress.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{player} could not choose a move: {source}")]
    Agent {
        player: &'static str,
        source: AgentError,
    },

    #[error("{player} chose illegal column {column} ({reason:?})")]
    IllegalMove {
        player: &'static str,
        column: usize,
        reason: MoveError,
    },

    #[error("seat error: {0}")]
    Player(#[from] PlayerError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_error_display() {
        let err = PlayerError::SymbolsExhausted { available: 3 };
        assert_eq!(
            err.to_string(),
            "too many players: only 3 distinct symbols are available"
        );
    }

    #[test]
    fn test_session_error_display() {
        let err = SessionError::IllegalMove {
            player: "Blue",
            column: 4,
            reason: MoveError::ColumnFull,
        };
        assert_eq!(err.to_string(), "Blue chose illegal column 4 (ColumnFull)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.seats must hold 2 or 3 entries".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.seats must hold 2 or 3 entries"
        );
    }
}
