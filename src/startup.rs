use slint::ComponentHandle;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::state::AppState;

/// What the command line asked for: `slint-slideshow [--recursive|-r] [DIRECTORY]`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StartupOptions {
    pub directory: Option<PathBuf>,
    pub recursive: bool,
}

/// Parses arguments (without the program name). Unknown flags are ignored and the
/// first non-flag argument is taken as the directory.
pub fn parse_args(args: impl IntoIterator<Item = OsString>) -> StartupOptions {
    let mut options = StartupOptions::default();
    for arg in args {
        let arg_str = arg.to_string_lossy();
        if arg_str == "--recursive" || arg_str == "-r" {
            options.recursive = true;
        } else if arg_str.starts_with('-') {
            log::debug!("Ignoring unknown option {}", arg_str);
        } else if options.directory.is_none() {
            options.directory = Some(PathBuf::from(arg));
        }
    }
    options
}

/// Maps a dropped path to the directory to open: folders open as-is, images open their folder.
fn directory_for_drop(path: &Path) -> Option<PathBuf> {
    if path.is_dir() {
        Some(path.to_path_buf())
    } else if crate::file_utils::is_supported_image(path) {
        path.parent().map(Path::to_path_buf)
    } else {
        None
    }
}

fn setup_drop_hook(app: &crate::AppWindow, app_state: &AppState) {
    use i_slint_backend_winit::WinitWindowAccessor;
    use i_slint_backend_winit::{EventResult, winit::event::WindowEvent};

    let ui_handle = app.as_weak();
    let app_state = app_state.clone();

    app.window().on_winit_window_event(move |_window, event| {
        if let WindowEvent::DroppedFile(path) = event {
            match (directory_for_drop(path), ui_handle.upgrade()) {
                (Some(dir), Some(ui)) => {
                    log::info!("Opening dropped path {}", path.display());
                    crate::ui::open_directory_path(&ui, &app_state, dir);
                }
                _ => log::debug!("Ignoring dropped path {}", path.display()),
            }
        }

        EventResult::Propagate
    });
}

pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    setup_drop_hook(app, app_state);

    let options = parse_args(std::env::args_os().skip(1));
    if options.recursive {
        app.global::<crate::ViewState>().set_recursive(true);
    }

    match options.directory {
        Some(dir) if dir.is_dir() => crate::ui::open_directory_path(app, app_state, dir),
        Some(dir) => crate::ui::set_error_with_prefix(
            app,
            "Failed to open startup directory",
            format!("'{}' is not a directory", dir.display()),
        ),
        None => {}
    }
}
