//! Background-music playback controller.
//!
//! Tracks volume, the last audible level (so unmuting restores the user's
//! preference) and the lazy-start latch for the visualizer. The controller
//! never touches the audio element itself; it tells the caller what to do.

/// Restored on unmute when no audible level was ever recorded.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Discrete state of the mute button glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            VolumeIcon::Muted => "\u{1F507}",
            VolumeIcon::Low => "\u{1F509}",
            VolumeIcon::High => "\u{1F50A}",
        }
    }
}

/// Actions the host must perform after `ensure_started`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartActions {
    /// Call `play()` on the audio element.
    pub start_playback: bool,
    /// Build the analyser graph and start the bar loop (at most once, ever).
    pub init_visualizer: bool,
}

#[derive(Clone, Debug)]
pub struct Playback {
    volume: f32,
    last_audible: f32,
    playing: bool,
    visualizer_ready: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}

impl Playback {
    pub fn new(initial_volume: f32) -> Self {
        let volume = initial_volume.clamp(0.0, 1.0);
        Self {
            volume,
            last_audible: if volume > 0.0 { volume } else { DEFAULT_VOLUME },
            playing: false,
            visualizer_ready: false,
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn visualizer_ready(&self) -> bool {
        self.visualizer_ready
    }

    pub fn icon(&self) -> VolumeIcon {
        if self.volume == 0.0 {
            VolumeIcon::Muted
        } else if self.volume < 0.5 {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }

    /// Slider handler. Muting via the slider keeps `last_audible` intact.
    pub fn set_volume(&mut self, volume: f32) -> VolumeIcon {
        self.volume = volume.clamp(0.0, 1.0);
        if self.volume > 0.0 {
            self.last_audible = self.volume;
        }
        self.icon()
    }

    /// Mute-button handler: audible → 0, muted → last audible level.
    /// Returns the new volume so the caller can sync element and slider.
    pub fn toggle_mute(&mut self) -> f32 {
        if self.volume > 0.0 {
            self.volume = 0.0;
        } else {
            self.volume = if self.last_audible > 0.0 {
                self.last_audible
            } else {
                DEFAULT_VOLUME
            };
        }
        self.volume
    }

    /// Lazy start on first interaction. Playback is re-attempted whenever a
    /// previous attempt failed; the visualizer latch flips exactly once and
    /// never resets.
    pub fn ensure_started(&mut self) -> StartActions {
        let mut actions = StartActions::default();
        if !self.playing {
            self.playing = true;
            actions.start_playback = true;
        }
        if !self.visualizer_ready {
            self.visualizer_ready = true;
            actions.init_visualizer = true;
        }
        actions
    }

    /// The runtime rejected `play()` (autoplay policy etc). Clear the playing
    /// flag so the next click retries; the visualizer latch stays set.
    pub fn start_failed(&mut self) {
        self.playing = false;
    }
}
