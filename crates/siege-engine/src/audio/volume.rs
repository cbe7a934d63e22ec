use std::fmt;

/// Volume category exposed to the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SoundCategory {
    Master,
    Music,
    Effects,
}

impl SoundCategory {
    pub const ALL: [SoundCategory; 3] = [
        SoundCategory::Master,
        SoundCategory::Music,
        SoundCategory::Effects,
    ];
}

impl fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoundCategory::Master => "master",
            SoundCategory::Music => "music",
            SoundCategory::Effects => "effects",
        };
        f.write_str(name)
    }
}

/// Receiver of effective volume levels (the host's audio engine).
pub trait AudioSink {
    fn set_volume(&mut self, category: SoundCategory, volume: f32);
}

/// Player volume settings, each in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AudioVolumes {
    master: f32,
    music: f32,
    effects: f32,
    muted: bool,
}

impl Default for AudioVolumes {
    fn default() -> Self {
        Self {
            master: 1.0,
            music: 1.0,
            effects: 1.0,
            muted: false,
        }
    }
}

impl AudioVolumes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored setting for `category`, ignoring mute.
    pub fn get(&self, category: SoundCategory) -> f32 {
        match category {
            SoundCategory::Master => self.master,
            SoundCategory::Music => self.music,
            SoundCategory::Effects => self.effects,
        }
    }

    /// Sets a category, clamping to `[0, 1]`. NaN becomes 0.
    pub fn set(&mut self, category: SoundCategory, volume: f32) {
        let v = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };
        if v != volume {
            log::warn!("AudioVolumes: {category} volume {volume} clamped to {v}");
        }

        match category {
            SoundCategory::Master => self.master = v,
            SoundCategory::Music => self.music = v,
            SoundCategory::Effects => self.effects = v,
        }
    }

    /// Level actually sent to the mixer: master scales the other categories.
    pub fn effective(&self, category: SoundCategory) -> f32 {
        if self.muted {
            return 0.0;
        }
        match category {
            SoundCategory::Master => self.master,
            other => self.master * self.get(other),
        }
    }

    /// Silences output without losing the stored settings.
    pub fn mute(&mut self) {
        self.muted = true;
    }

    pub fn unmute(&mut self) {
        self.muted = false;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Pushes every effective level into `sink`.
    pub fn apply(&self, sink: &mut impl AudioSink) {
        for category in SoundCategory::ALL {
            sink.set_volume(category, self.effective(category));
        }
    }
}
