//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: async work that must stay on the main thread (the folder dialog)
//! - `rayon::spawn`: CPU-heavy work (directory scans, image decoding and resizing, preloading)
//! - `slint::invoke_from_event_loop`: hands rayon results back to the UI thread
//! - `slint::Timer`: slideshow ticks, fired on the UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{open_directory_path, setup_handlers};
pub use state_helpers::*;
