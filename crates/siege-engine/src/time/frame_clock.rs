use std::time::{Duration, Instant};

/// Timing snapshot for one update tick.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Timestamp the tick was taken at.
    pub now: Instant,

    /// Monotonic tick counter.
    pub frame_index: u64,
}

/// Delta-time clamps applied by `FrameClock`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Lower bound; keeps tight loops from producing zero deltas.
    pub dt_min: Duration,
    /// Upper bound; a debugger stop or minimized window must not fast-forward
    /// every animation by the whole stall.
    pub dt_max: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }
}

/// Update clock producing clamped `FrameTime` snapshots.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    config: ClockConfig,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_config(ClockConfig::default())
    }

    pub fn with_config(config: ClockConfig) -> Self {
        Self::starting_at(Instant::now(), config)
    }

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant, config: ClockConfig) -> Self {
        debug_assert!(config.dt_min <= config.dt_max);
        Self {
            last: start,
            frame_index: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> ClockConfig {
        self.config
    }

    /// Rebaselines the clock, e.g. when the game resumes from a pause menu.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Ticks using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Ticks as if the current time were `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.config.dt_min, self.config.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
