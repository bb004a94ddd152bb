//! Slideshow playback state: whether the timer runs and how fast.

use crate::config::{CUSTOM_SPEED_RANGE, SPEED_FAST_SECS, SPEED_MEDIUM_SECS, SPEED_SLOW_SECS};
use std::time::Duration;

/// Interval between automatic advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideshowSpeed {
    Fast,
    #[default]
    Medium,
    Slow,
    /// User-chosen interval in whole seconds.
    Custom(u32),
}

impl SlideshowSpeed {
    /// Maps the speed selector's index (fast, medium, slow, custom) to a speed.
    ///
    /// `custom_secs` is only consulted for the custom entry and is clamped into range.
    pub fn from_index(index: i32, custom_secs: i32) -> Self {
        match index {
            0 => SlideshowSpeed::Fast,
            1 => SlideshowSpeed::Medium,
            2 => SlideshowSpeed::Slow,
            _ => SlideshowSpeed::custom(custom_secs),
        }
    }

    /// A custom speed with the seconds clamped to the allowed range.
    pub fn custom(secs: i32) -> Self {
        let secs = u32::try_from(secs).unwrap_or(0).clamp(
            *CUSTOM_SPEED_RANGE.start(),
            *CUSTOM_SPEED_RANGE.end(),
        );
        SlideshowSpeed::Custom(secs)
    }

    /// Position in the speed selector.
    pub fn index(self) -> i32 {
        match self {
            SlideshowSpeed::Fast => 0,
            SlideshowSpeed::Medium => 1,
            SlideshowSpeed::Slow => 2,
            SlideshowSpeed::Custom(_) => 3,
        }
    }

    pub fn interval(self) -> Duration {
        let secs = match self {
            SlideshowSpeed::Fast => SPEED_FAST_SECS,
            SlideshowSpeed::Medium => SPEED_MEDIUM_SECS,
            SlideshowSpeed::Slow => SPEED_SLOW_SECS,
            SlideshowSpeed::Custom(secs) => secs,
        };
        Duration::from_secs(secs.into())
    }
}

#[derive(Debug, Default)]
pub struct SlideshowState {
    playing: bool,
    speed: SlideshowSpeed,
}

impl SlideshowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(&self) -> SlideshowSpeed {
        self.speed
    }

    /// Flips between playing and paused, returning the new playing flag.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Forces playback off. Returns true if it was playing.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.playing, false)
    }

    /// Changes the speed. Returns true when the running timer must be re-armed.
    pub fn set_speed(&mut self, speed: SlideshowSpeed) -> bool {
        let changed = self.speed != speed;
        self.speed = speed;
        changed && self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_map_to_intervals() {
        assert_eq!(SlideshowSpeed::Fast.interval(), Duration::from_secs(2));
        assert_eq!(SlideshowSpeed::Medium.interval(), Duration::from_secs(5));
        assert_eq!(SlideshowSpeed::Slow.interval(), Duration::from_secs(10));
        assert_eq!(SlideshowSpeed::Custom(42).interval(), Duration::from_secs(42));
    }

    #[test]
    fn selector_index_round_trips() {
        for speed in [
            SlideshowSpeed::Fast,
            SlideshowSpeed::Medium,
            SlideshowSpeed::Slow,
            SlideshowSpeed::Custom(7),
        ] {
            assert_eq!(SlideshowSpeed::from_index(speed.index(), 7), speed);
        }
    }

    #[test]
    fn custom_seconds_are_clamped() {
        assert_eq!(SlideshowSpeed::custom(0), SlideshowSpeed::Custom(1));
        assert_eq!(SlideshowSpeed::custom(-5), SlideshowSpeed::Custom(1));
        assert_eq!(SlideshowSpeed::custom(61), SlideshowSpeed::Custom(60));
        assert_eq!(SlideshowSpeed::custom(30), SlideshowSpeed::Custom(30));
    }

    #[test]
    fn default_is_paused_at_medium() {
        let mut state = SlideshowState::new();
        assert_eq!(state.speed(), SlideshowSpeed::Medium);
        assert!(!state.stop());
    }

    #[test]
    fn toggle_and_stop() {
        let mut state = SlideshowState::new();
        assert!(state.toggle());
        assert!(state.stop());
        assert!(!state.stop());
        assert!(state.toggle());
        assert!(!state.toggle());
    }

    #[test]
    fn speed_change_rearms_only_while_playing() {
        let mut state = SlideshowState::new();
        assert!(!state.set_speed(SlideshowSpeed::Fast));

        state.toggle();
        assert!(state.set_speed(SlideshowSpeed::Slow));
        assert!(!state.set_speed(SlideshowSpeed::Slow));
    }
}
