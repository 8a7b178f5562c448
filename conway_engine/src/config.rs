// config.rs - Construction-time settings shared by the engine and the window

use std::time::Duration;

use crate::ConfigError;

/// Cells per side of the default playing area.
pub const DEFAULT_GRID_SIZE: usize = 40;
/// Pixels per cell on screen.
pub const DEFAULT_CELL_SCALE: f32 = 15.0;
pub const DEFAULT_INTERVAL_MS: u64 = 100;
pub const MIN_INTERVAL_MS: u64 = 20;
pub const MAX_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub grid_size: usize,
    pub cell_scale: f32,
    pub default_interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_scale: DEFAULT_CELL_SCALE,
            default_interval_ms: DEFAULT_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            max_interval_ms: MAX_INTERVAL_MS,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 3 {
            return Err(ConfigError::Invalid("grid_size must be at least 3"));
        }
        if !(self.cell_scale.is_finite() && self.cell_scale > 0.0) {
            return Err(ConfigError::Invalid("cell_scale must be a positive number"));
        }
        if self.min_interval_ms == 0 {
            return Err(ConfigError::Invalid("min_interval_ms must be non-zero"));
        }
        if self.min_interval_ms > self.max_interval_ms {
            return Err(ConfigError::Invalid(
                "min_interval_ms must not exceed max_interval_ms",
            ));
        }
        if !(self.min_interval_ms..=self.max_interval_ms).contains(&self.default_interval_ms) {
            return Err(ConfigError::Invalid(
                "default_interval_ms must lie within the interval bounds",
            ));
        }
        Ok(())
    }

    /// Clamps a requested step interval into the configured bounds.
    pub fn clamp_interval(&self, millis: u64) -> Duration {
        Duration::from_millis(millis.clamp(self.min_interval_ms, self.max_interval_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.grid_size, 40);
    }

    #[test]
    fn rejects_tiny_grid_and_bad_scale() {
        let tiny = LifeConfig { grid_size: 2, ..LifeConfig::default() };
        assert!(tiny.validate().is_err());

        let flat = LifeConfig { cell_scale: 0.0, ..LifeConfig::default() };
        assert!(flat.validate().is_err());

        let nan = LifeConfig { cell_scale: f32::NAN, ..LifeConfig::default() };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_inverted_or_excluding_bounds() {
        let inverted = LifeConfig {
            min_interval_ms: 600,
            ..LifeConfig::default()
        };
        assert!(inverted.validate().is_err());

        let outside = LifeConfig {
            default_interval_ms: 1_000,
            ..LifeConfig::default()
        };
        assert_eq!(
            outside.validate(),
            Err(ConfigError::Invalid(
                "default_interval_ms must lie within the interval bounds"
            ))
        );
    }

    #[test]
    fn clamp_interval_respects_bounds() {
        let config = LifeConfig::default();
        assert_eq!(config.clamp_interval(5), Duration::from_millis(20));
        assert_eq!(config.clamp_interval(250), Duration::from_millis(250));
        assert_eq!(config.clamp_interval(10_000), Duration::from_millis(500));
    }
}
