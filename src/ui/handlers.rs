//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (open_directory, next_image, delete_image, etc.)
//! using the appropriate threading model for each operation type.

use crate::config::FULLSCREEN_REDISPLAY_DELAY;
use crate::services::SlideshowService;
use crate::state::{
    AppState, FullscreenTransition, RestoreAction, SlideshowSpeed, WindowSnapshot,
};
use crate::ui::image_display::{display_current, load_and_display_image};
use crate::ui::state_helpers;
use log::info;
use rfd::AsyncFileDialog;
use slint::{ComponentHandle, PhysicalPosition, PhysicalSize};
use std::path::PathBuf;

const FULLSCREEN_NEEDS_IMAGES: &str =
    "Open a directory with images before entering fullscreen mode.";

/// Builds the slideshow service whose tick is the same as pressing "next".
fn slideshow_service(ui: &crate::AppWindow, state: &AppState) -> SlideshowService {
    let ui_handle = ui.as_weak();
    SlideshowService::new(
        state.slideshow.clone(),
        state.slideshow_timer.clone(),
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::Logic>().invoke_next_image();
            }
        },
    )
}

/// Scans `dir` in the background, shuffles it and shows the first image.
///
/// Playback is stopped first, since the old sequence is about to disappear.
pub fn open_directory_path(ui: &crate::AppWindow, state: &AppState, dir: PathBuf) {
    slideshow_service(ui, state).stop();
    state_helpers::set_playing(ui, false);

    let recursive = ui.global::<crate::ViewState>().get_recursive();
    let ui_handle = ui.as_weak();
    let navigation = state.navigation_service();
    let cache = state.image_cache.clone();

    // Directory walks can be slow (recursive), so scan off the UI thread.
    rayon::spawn(move || {
        let result = navigation.open_directory(&dir, recursive);
        if result.is_ok() {
            if let Ok(mut cache) = cache.lock() {
                cache.clear();
            }
        }

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            // A Play press may have landed while the scan ran.
            if !navigation.has_images() {
                ui.global::<crate::Logic>().invoke_stop_slideshow();
            }

            match result {
                Ok(0) => {
                    state_helpers::set_navigation_info(&ui, &navigation.info());
                    state_helpers::clear_displayed_image(&ui);
                    state_helpers::show_notice(
                        &ui,
                        "No Images",
                        &format!(
                            "No images were found in '{}'. Choose another directory.",
                            dir.display()
                        ),
                    );
                }
                Ok(_) => {
                    let area = state_helpers::image_area_size(&ui);
                    display_current(&ui, area, navigation, cache, "Failed to load image");
                }
                Err(e) => {
                    state_helpers::set_error_with_prefix(
                        &ui,
                        "Failed to open directory",
                        e.to_string(),
                    );
                }
            }
        });
    });
}

fn capture_window(ui: &crate::AppWindow) -> WindowSnapshot {
    let window = ui.window();
    let position = window.position();
    let size = window.size();
    WindowSnapshot {
        position: (position.x, position.y),
        size: (size.width, size.height),
        maximized: window.is_maximized(),
        image_area: state_helpers::image_area_size(ui),
    }
}

fn apply_fullscreen_transition(
    ui: &crate::AppWindow,
    state: &AppState,
    transition: FullscreenTransition,
) {
    let view_state = ui.global::<crate::ViewState>();
    let window = ui.window();

    match transition {
        FullscreenTransition::Refused => {
            state_helpers::show_notice(ui, "Error", FULLSCREEN_NEEDS_IMAGES);
        }
        FullscreenTransition::Enter => {
            info!("Entering fullscreen");
            view_state.set_fullscreen(true);
            window.set_fullscreen(true);

            // The image area only has its fullscreen size after the next layout pass.
            let ui_handle = ui.as_weak();
            let navigation = state.navigation_service();
            let cache = state.image_cache.clone();
            slint::Timer::single_shot(FULLSCREEN_REDISPLAY_DELAY, move || {
                if let Some(ui) = ui_handle.upgrade() {
                    let area = state_helpers::image_area_size(&ui);
                    display_current(&ui, area, navigation, cache, "Failed to load image");
                }
            });
        }
        FullscreenTransition::Leave(snapshot) => {
            info!("Leaving fullscreen");
            // Render at the windowed size first, so the image does not hold the
            // window open at fullscreen dimensions.
            let area = snapshot
                .map(|s| s.image_area)
                .unwrap_or_else(|| state_helpers::image_area_size(ui));
            display_current(
                ui,
                area,
                state.navigation_service(),
                state.image_cache.clone(),
                "Failed to load image",
            );

            view_state.set_fullscreen(false);
            window.set_fullscreen(false);

            match snapshot.map(|s| s.restore_action()) {
                Some(RestoreAction::Maximize) => window.set_maximized(true),
                Some(RestoreAction::Geometry { position, size }) => {
                    window.set_maximized(false);
                    window.set_position(PhysicalPosition::new(position.0, position.1));
                    window.set_size(PhysicalSize::new(size.0, size.1));
                }
                None => {}
            }
        }
    }
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and shared application state, then registers
/// callbacks for directory selection, navigation, playback and display mode.
pub fn setup_handlers(ui: &crate::AppWindow, state: AppState) {
    let logic = ui.global::<crate::Logic>();

    // Directory selection handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    logic.on_open_directory({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new()
                    .set_title("Choose directory")
                    .pick_folder()
                    .await
                else {
                    return;
                };

                if let Some(ui) = ui_handle.upgrade() {
                    open_directory_path(&ui, &state, folder.path().to_path_buf());
                }
            });
        }
    });

    // Next image handler; also the slideshow tick
    logic.on_next_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let navigation = state.navigation_service();
            if let Some(path) = navigation.next() {
                load_and_display_image(
                    ui_handle.clone(),
                    path,
                    state_helpers::image_area_size(&ui),
                    navigation,
                    state.image_cache.clone(),
                    "Failed to load next image",
                );
            }
        }
    });

    // Previous image handler
    logic.on_prev_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let navigation = state.navigation_service();
            if let Some(path) = navigation.previous() {
                load_and_display_image(
                    ui_handle.clone(),
                    path,
                    state_helpers::image_area_size(&ui),
                    navigation,
                    state.image_cache.clone(),
                    "Failed to load previous image",
                );
            }
        }
    });

    logic.on_toggle_slideshow({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            if !state.navigation_service().has_images() {
                return;
            }
            let playing = slideshow_service(&ui, &state).toggle();
            state_helpers::set_playing(&ui, playing);
        }
    });

    logic.on_stop_slideshow({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                slideshow_service(&ui, &state).stop();
                state_helpers::set_playing(&ui, false);
            }
        }
    });

    logic.on_delete_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let navigation = state.navigation_service();
            let Some(deleted) = navigation.current_path() else {
                return;
            };

            match navigation.delete_current() {
                Ok(next) => {
                    if let Ok(mut cache) = state.image_cache.lock() {
                        cache.remove(&deleted);
                    }
                    if next.is_none() {
                        slideshow_service(&ui, &state).stop();
                        state_helpers::set_playing(&ui, false);
                    }
                    display_current(
                        &ui,
                        state_helpers::image_area_size(&ui),
                        navigation,
                        state.image_cache.clone(),
                        "Failed to load image",
                    );
                }
                Err(e) => {
                    state_helpers::set_error_with_prefix(
                        &ui,
                        "Failed to delete image",
                        e.to_string(),
                    );
                }
            }
        }
    });

    logic.on_toggle_fullscreen({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let has_images = state.navigation_service().has_images();
            let transition = state
                .fullscreen
                .borrow_mut()
                .toggle(has_images, || capture_window(&ui));
            apply_fullscreen_transition(&ui, &state, transition);
        }
    });

    logic.on_exit_fullscreen({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let transition = state.fullscreen.borrow_mut().exit();
            if let Some(transition) = transition {
                apply_fullscreen_transition(&ui, &state, transition);
            }
        }
    });

    logic.on_set_speed({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let view_state = ui.global::<crate::ViewState>();
            let speed = SlideshowSpeed::from_index(index, view_state.get_custom_seconds());
            view_state.set_speed_index(speed.index());
            slideshow_service(&ui, &state).set_speed(speed);
        }
    });

    logic.on_set_custom_speed({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |seconds| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let speed = SlideshowSpeed::custom(seconds);
            let view_state = ui.global::<crate::ViewState>();
            if let SlideshowSpeed::Custom(clamped) = speed {
                view_state.set_custom_seconds(clamped as i32);
            }
            if view_state.get_speed_index() == speed.index() {
                slideshow_service(&ui, &state).set_speed(speed);
            }
        }
    });

    logic.on_set_recursive({
        let ui_handle = ui.as_weak();
        move |recursive| {
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::ViewState>().set_recursive(recursive);
            }
        }
    });

    logic.on_quit(|| {
        let _ = slint::quit_event_loop();
    });
}
