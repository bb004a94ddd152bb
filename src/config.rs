//! Application configuration constants.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "bmp"];

/// Slideshow preset intervals, in seconds.
pub const SPEED_FAST_SECS: u32 = 2;
pub const SPEED_MEDIUM_SECS: u32 = 5;
pub const SPEED_SLOW_SECS: u32 = 10;

/// Allowed range for a user-chosen slideshow interval, in seconds.
pub const CUSTOM_SPEED_RANGE: RangeInclusive<u32> = 1..=60;

/// Number of decoded images kept in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 10;

/// Delay before re-rendering after entering fullscreen, so the image area has its new size.
pub const FULLSCREEN_REDISPLAY_DELAY: Duration = Duration::from_millis(150);
