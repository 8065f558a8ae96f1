//! Match configuration.
//!
//! The rule constants below are the defaults of `MatchConfig`. Presentation
//! collaborators read the grid and cell constants to lay out the board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Columns per player grid. Columns are the combat lanes.
pub const GRID_SIZE: u8 = 4;

/// Rows per player grid.
pub const GRID_ROWS: u8 = 2;

/// Ceiling for a player's max DP.
pub const MAX_DP: u32 = 10;

/// DP and max DP at match start.
pub const STARTING_DP: u32 = 1;

/// Cards dealt to each hand at match start.
pub const INITIAL_HAND_SIZE: usize = 5;

/// Hand capacity; phase-boundary draws are skipped at capacity.
pub const MAX_HAND_SIZE: usize = 5;

/// Number of definitions in the master catalog.
pub const CATALOG_SIZE: usize = 26;

/// Pause between entering the end phase and resolving combat.
pub const COMBAT_DELAY: Duration = Duration::from_millis(100);

/// World-space width of one grid cell. Presentation only.
pub const CELL_WIDTH: f32 = 2.4;

/// World-space depth of one grid cell. Presentation only.
pub const CELL_HEIGHT: f32 = 3.4;

/// When combat runs after player 2 ends their phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatTiming {
    /// Resolve inside `end_phase`.
    Immediate,
    /// Arm a timer; `GameStore::advance_clock` fires it.
    Deferred(Duration),
}

impl Default for CombatTiming {
    fn default() -> Self {
        CombatTiming::Deferred(COMBAT_DELAY)
    }
}

/// Tunable match parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Columns per grid (lanes).
    pub grid_size: u8,

    /// Max DP ceiling.
    pub max_dp: u32,

    /// DP and max DP each player starts with.
    pub starting_dp: u32,

    /// Cards dealt per hand on initialization.
    pub initial_hand_size: usize,

    /// Hand capacity for phase-boundary draws.
    pub max_hand_size: usize,

    /// Upper bound on catalog entries (short template tables truncate).
    pub catalog_size: usize,

    /// Synchronous or deferred combat.
    pub combat_timing: CombatTiming,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_dp: MAX_DP,
            starting_dp: STARTING_DP,
            initial_hand_size: INITIAL_HAND_SIZE,
            max_hand_size: MAX_HAND_SIZE,
            catalog_size: CATALOG_SIZE,
            combat_timing: CombatTiming::default(),
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the combat timing.
    #[must_use]
    pub fn with_combat_timing(mut self, timing: CombatTiming) -> Self {
        self.combat_timing = timing;
        self
    }

    /// Set the number of lanes.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: u8) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the catalog size.
    #[must_use]
    pub fn with_catalog_size(mut self, size: usize) -> Self {
        self.catalog_size = size;
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be at least 1".into()));
        }
        if self.max_dp == 0 || self.max_dp > MAX_DP {
            return Err(ConfigError::Invalid(format!(
                "max_dp must be in 1..={MAX_DP}, got {}",
                self.max_dp
            )));
        }
        if self.starting_dp == 0 || self.starting_dp > self.max_dp {
            return Err(ConfigError::Invalid(format!(
                "starting_dp must be in 1..={}, got {}",
                self.max_dp, self.starting_dp
            )));
        }
        if self.initial_hand_size > self.max_hand_size {
            return Err(ConfigError::Invalid(format!(
                "initial_hand_size {} exceeds max_hand_size {}",
                self.initial_hand_size, self.max_hand_size
            )));
        }
        Ok(())
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
