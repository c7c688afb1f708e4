//! Runtime settings
//!
//! There is deliberately no CLI or environment surface; the defaults are the
//! game. The struct exists so the driver and tests can vary the score file
//! location and the run seed.

use std::path::PathBuf;

use crate::consts::TICK_HZ;

/// Driver-level knobs
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the high score record lives
    pub score_path: PathBuf,
    /// Tick rate of the main loop (Hz)
    pub tick_hz: u32,
    /// Fixed seed; None derives one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            score_path: PathBuf::from("score.json"),
            tick_hz: TICK_HZ,
            seed: None,
        }
    }
}

impl Settings {
    /// Seed to use for the next run
    pub fn run_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_wins() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(settings.run_seed(), 42);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_hz, TICK_HZ);
        assert_eq!(settings.score_path, PathBuf::from("score.json"));
    }
}
