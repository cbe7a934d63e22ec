//! Engine configuration.
//!
//! Plain `Default`-able structs; hosts build one at startup and hand the pieces
//! to the subsystems that need them.

use crate::audio::AudioVolumes;
use crate::logging::{init_logging, LoggingConfig};
use crate::time::{ClockConfig, FrameClock};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub logging: LoggingConfig,
    pub clock: ClockConfig,
    /// Initial mixer levels.
    pub audio: AudioVolumes,
}

impl EngineConfig {
    /// Installs the logger and builds the update clock.
    pub fn start(&self) -> FrameClock {
        init_logging(self.logging.clone());
        log::debug!("engine config: {:?}", self.clock);
        FrameClock::with_config(self.clock)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn start_uses_configured_clamps() {
        let cfg = EngineConfig {
            clock: ClockConfig {
                dt_min: Duration::from_millis(1),
                dt_max: Duration::from_millis(50),
            },
            ..Default::default()
        };
        let clock = cfg.start();
        assert_eq!(clock.config().dt_max, Duration::from_millis(50));
    }

    #[test]
    fn defaults_are_full_volume() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.audio.effective(crate::audio::SoundCategory::Effects), 1.0);
        assert!(!cfg.audio.is_muted());
    }
}
