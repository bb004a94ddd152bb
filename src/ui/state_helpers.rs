//! Helper functions to set multiple ViewState properties in a grouped manner.

use crate::services::NavigationInfo;
use log::error;
use slint::ComponentHandle;

/// Sets status line, window title and control availability from the navigation state.
///
/// Groups: status-text, directory, has-images
pub fn set_navigation_info(ui: &crate::AppWindow, info: &NavigationInfo) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_status_text(info.status_text.as_str().into());
    let directory = info
        .directory
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();
    view_state.set_directory(directory.into());
    view_state.set_has_images(info.position.is_some());
}

/// Shows a freshly rendered image and clears any previous error.
///
/// Groups: current-image, image-loaded, error-message
pub fn set_displayed_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_image(image);
    view_state.set_image_loaded(true);
    view_state.set_error_message("".into());
}

/// Removes the displayed image, e.g. after the last one was deleted.
pub fn clear_displayed_image(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_current_image(slint::Image::default());
    view_state.set_image_loaded(false);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

/// Opens the modal notice overlay.
///
/// Groups: notice-title, notice-message
pub fn show_notice(ui: &crate::AppWindow, title: &str, message: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_notice_title(title.into());
    view_state.set_notice_message(message.into());
}

pub fn set_playing(ui: &crate::AppWindow, playing: bool) {
    ui.global::<crate::ViewState>().set_playing(playing);
}

/// Size of the image area in physical pixels, the target for scaling.
pub fn image_area_size(ui: &crate::AppWindow) -> (u32, u32) {
    let scale = ui.window().scale_factor();
    let to_physical = |logical: f32| (logical * scale).round().max(0.0) as u32;
    (
        to_physical(ui.get_image_area_width()),
        to_physical(ui.get_image_area_height()),
    )
}
