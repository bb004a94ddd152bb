//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for decoding and resizing, then `slint::invoke_from_event_loop`
//! to update the UI from the background thread.

use crate::error::Result;
use crate::image_cache::ImageCache;
use crate::image_loader::{self, DecodedImage};
use crate::services::NavigationService;
use crate::ui::state_helpers;
use log::debug;
use slint::ComponentHandle;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Returns the full-resolution image, from the cache when possible.
fn fetch_decoded(path: &Path, cache: &Arc<Mutex<ImageCache>>) -> Result<DecodedImage> {
    if let Some(cached) = cache.lock().ok().and_then(|mut c| c.get(path)) {
        return Ok(cached);
    }

    let decoded = image_loader::load_image_blocking(path)?;
    if let Ok(mut cache) = cache.lock() {
        cache.put(path.to_path_buf(), decoded.clone());
    }
    Ok(decoded)
}

/// Loads `path` in a background thread, scales it into `area` and shows it.
///
/// Results for a path that is no longer current (the user moved on while decoding)
/// are dropped. Failures leave the slot empty and put the error in the status line.
pub fn load_and_display_image(
    ui: slint::Weak<crate::AppWindow>,
    path: PathBuf,
    area: (u32, u32),
    navigation: NavigationService,
    cache: Arc<Mutex<ImageCache>>,
    error_prefix: &'static str,
) {
    rayon::spawn(move || {
        let result = fetch_decoded(&path, &cache)
            .and_then(|decoded| image_loader::scale_to_area(decoded, area));

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            if navigation.current_path().as_deref() != Some(path.as_path()) {
                debug!("Dropping stale load of {}", path.display());
                return;
            }

            match result {
                Ok(scaled) => {
                    let image = image_loader::create_slint_image(&scaled);
                    state_helpers::set_displayed_image(&ui, image);
                }
                Err(e) => {
                    state_helpers::clear_displayed_image(&ui);
                    state_helpers::set_error_with_prefix(&ui, error_prefix, e.to_string());
                }
            }
            state_helpers::set_navigation_info(&ui, &navigation.info());

            preload_adjacent_images(&navigation, cache);
        });
    });
}

/// Shows whatever is current, scaled into `area`. Clears the view when nothing is loaded.
pub fn display_current(
    ui: &crate::AppWindow,
    area: (u32, u32),
    navigation: NavigationService,
    cache: Arc<Mutex<ImageCache>>,
    error_prefix: &'static str,
) {
    state_helpers::set_navigation_info(ui, &navigation.info());
    match navigation.current_path() {
        Some(path) => {
            load_and_display_image(ui.as_weak(), path, area, navigation, cache, error_prefix)
        }
        None => state_helpers::clear_displayed_image(ui),
    }
}

/// Decodes the next and previous images into the cache ahead of time.
fn preload_adjacent_images(navigation: &NavigationService, cache: Arc<Mutex<ImageCache>>) {
    let (next_path, prev_path) = navigation.adjacent_paths();

    for path in [next_path, prev_path].into_iter().flatten() {
        let should_load = cache
            .lock()
            .ok()
            .map(|c| !c.contains(&path))
            .unwrap_or(false);

        if should_load {
            let cache = cache.clone();
            rayon::spawn(move || {
                // Errors surface when the image is actually shown.
                let _ = fetch_decoded(&path, &cache);
            });
        }
    }
}
