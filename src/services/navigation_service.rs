//! Service for handling image navigation operations.
//!
//! Wraps the shared `NavigationState` so UI handlers and rayon workers can drive it
//! without touching the lock directly.

use crate::error::Result;
use crate::state::NavigationState;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot of what the status bar and controls need to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationInfo {
    pub status_text: String,
    pub directory: Option<PathBuf>,
    /// One-based position and total, when an image is current.
    pub position: Option<(usize, usize)>,
}

/// Service for managing image navigation.
#[derive(Clone)]
pub struct NavigationService {
    navigation: Arc<Mutex<NavigationState>>,
}

impl NavigationService {
    /// Creates a new navigation service.
    pub fn new(navigation: Arc<Mutex<NavigationState>>) -> Self {
        Self { navigation }
    }

    fn state(&self) -> MutexGuard<'_, NavigationState> {
        self.navigation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads and shuffles `dir`, returning the number of images found.
    ///
    /// The lock is taken only to swap in the finished sequence, so the UI thread is not
    /// held up by a long walk. On a scan error the previous sequence is kept.
    pub fn open_directory(&self, dir: &Path, recursive: bool) -> Result<usize> {
        let mut rng = rand::rng();
        let files = NavigationState::scan_shuffled(dir, recursive, &mut rng)?;
        Ok(self.state().replace_sequence(dir, files))
    }

    /// Navigates to the next image and returns its path.
    pub fn next(&self) -> Option<PathBuf> {
        self.state().next_image()
    }

    /// Navigates to the previous image and returns its path.
    pub fn previous(&self) -> Option<PathBuf> {
        self.state().prev_image()
    }

    /// Deletes the current image; see [`NavigationState::delete_current`].
    pub fn delete_current(&self) -> Result<Option<PathBuf>> {
        self.state().delete_current()
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.state().current_path()
    }

    /// Paths on either side of the current image, for preloading.
    pub fn adjacent_paths(&self) -> (Option<PathBuf>, Option<PathBuf>) {
        let state = self.state();
        (state.peek_next_image(), state.peek_prev_image())
    }

    pub fn has_images(&self) -> bool {
        !self.state().is_empty()
    }

    pub fn info(&self) -> NavigationInfo {
        let state = self.state();
        NavigationInfo {
            status_text: state.status_text(),
            directory: state.current_directory().map(Path::to_path_buf),
            position: state
                .current_index()
                .map(|index| (index + 1, state.image_count())),
        }
    }
}
