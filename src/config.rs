use std::path::Path;

use crate::board::Board;
use crate::error::ConfigError;
use crate::game::{Controller, EngineController, Game, RandomController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    Human,
    Engine,
    Random,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub controller: ControllerKind,
}

/// Board geometry and seating, loadable from JSON.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: usize,
    pub run_length: usize,
    pub players: Vec<PlayerConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            size: 3,
            run_length: 3,
            players: vec![
                PlayerConfig { name: "X".into(), controller: ControllerKind::Human },
                PlayerConfig { name: "O".into(), controller: ControllerKind::Engine },
            ],
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::Validation("players must not be empty".into()));
        }
        Board::new(self.size, self.run_length)?;
        Ok(())
    }

    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Ok(Board::new(self.size, self.run_length)?)
    }

    pub fn new_game(&self) -> Result<Game, ConfigError> {
        self.validate()?;
        Game::new(self.new_board()?, self.players.len())
    }

    /// Automated controllers per seat; `None` for human seats. Seeds derive from `seed`.
    pub fn controllers(&self, seed: u64) -> Vec<Option<Box<dyn Controller>>> {
        self.players.iter().enumerate().map(|(i, p)| -> Option<Box<dyn Controller>> {
            let s = seed.wrapping_add(i as u64);
            match p.controller {
                ControllerKind::Human => None,
                ControllerKind::Engine => Some(Box::new(EngineController::new(s))),
                ControllerKind::Random => Some(Box::new(RandomController::new(s))),
            }
        }).collect()
    }
}
