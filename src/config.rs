use std::fs;
use std::io;
use std::path::Path;

use log::warn;

use crate::ai::{Agent, BotAgent};
use crate::error::ConfigError;
use crate::game::{effective_run_length, Symbol, DEFAULT_RUN_LENGTH};

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    Human,
    Bot,
}

/// Settings for a single game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Counters in a row needed to win, 2 to 7. Anything else plays as 4.
    pub run_length: usize,
    /// Seats in turn order; the first seat plays Red.
    pub seats: Vec<SeatKind>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            run_length: DEFAULT_RUN_LENGTH,
            seats: vec![SeatKind::Human, SeatKind::Bot, SeatKind::Bot],
        }
    }
}

impl GameConfig {
    /// The run length actually played.
    pub fn effective_run_length(&self) -> usize {
        let run_length = effective_run_length(self.run_length);
        if run_length != self.run_length {
            warn!(
                "run length {} is outside 2..=7, playing with {}",
                self.run_length, run_length
            );
        }
        run_length
    }

    /// Replace every human seat with a bot.
    pub fn bots_only(&mut self) {
        self.seats.fill(SeatKind::Bot);
    }

    /// Build one agent per seat, using `human` for human seats.
    pub fn build_agents(&self, mut human: impl FnMut() -> Box<dyn Agent>) -> Vec<Box<dyn Agent>> {
        self.seats
            .iter()
            .map(|kind| match kind {
                SeatKind::Human => human(),
                SeatKind::Bot => Box::new(BotAgent::new()) as Box<dyn Agent>,
            })
            .collect()
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Read and validate a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but an absent file means the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::metadata(path) {
            Ok(_) => Self::load(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("config file '{}' not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let seats = self.game.seats.len();
        if !(2..=Symbol::ALL.len()).contains(&seats) {
            return Err(ConfigError::Validation(format!(
                "game.seats must hold 2 or 3 entries, got {seats}"
            )));
        }
        Ok(())
    }

    /// The configuration rendered back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.run_length, 4);
        assert_eq!(
            config.game.seats,
            vec![SeatKind::Human, SeatKind::Bot, SeatKind::Bot]
        );
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.run_length, DEFAULT_RUN_LENGTH);
        assert_eq!(config.game.seats.len(), 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
run_length = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.run_length, 5);
        assert_eq!(config.game.seats.len(), 3);
    }

    #[test]
    fn test_seat_kinds_parse_lowercase() {
        let toml_str = r#"
[game]
seats = ["bot", "human"]
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.seats, vec![SeatKind::Bot, SeatKind::Human]);
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_four_seats() {
        let mut config = AppConfig::default();
        config.game.seats.push(SeatKind::Bot);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_single_seat() {
        let mut config = AppConfig::default();
        config.game.seats.truncate(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_run_length_falls_back() {
        let mut config = GameConfig::default();
        config.run_length = 9;
        assert_eq!(config.effective_run_length(), 4);
        config.run_length = 2;
        assert_eq!(config.effective_run_length(), 2);
    }

    #[test]
    fn test_bots_only_and_build_agents() {
        let mut config = GameConfig::default();
        config.bots_only();
        assert!(config.seats.iter().all(|&k| k == SeatKind::Bot));

        let agents = config.build_agents(|| unreachable!("no human seats"));
        assert_eq!(agents.len(), 3);
        assert!(agents.iter().all(|a| !a.is_human()));
    }

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.game.run_length, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect-n.toml");
        std::fs::write(&path, "[game]\nrun_length = 3\nseats = [\"human\", \"bot\"]\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.run_length, 3);
        assert_eq!(config.game.seats, vec![SeatKind::Human, SeatKind::Bot]);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nseats = []\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_written_config_reads_back() {
        let mut original = AppConfig::default();
        original.game.run_length = 6;
        original.game.seats = vec![SeatKind::Bot, SeatKind::Bot];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        std::fs::write(&path, original.to_toml().unwrap()).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.game.run_length, 6);
        assert_eq!(loaded.game.seats, original.game.seats);
    }
}
