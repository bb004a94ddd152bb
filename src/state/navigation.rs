//! Navigation state for the shuffled image sequence and the current position.

use crate::error::Result;
use crate::file_utils;
use log::{debug, info, warn};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Holds the images of the opened directory, in shuffled order, and the current index.
///
/// `current_index` is `Some` exactly when `image_files` is non-empty.
#[derive(Default)]
pub struct NavigationState {
    current_directory: Option<PathBuf>,
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl NavigationState {
    /// Creates a new empty navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `dir` and shuffles what it finds.
    ///
    /// Touches no navigation state, so callers run it without holding the lock and only
    /// lock to install the result with [`NavigationState::replace_sequence`].
    pub fn scan_shuffled<R: Rng + ?Sized>(
        dir: &Path,
        recursive: bool,
        rng: &mut R,
    ) -> Result<Vec<PathBuf>> {
        let start = std::time::Instant::now();
        let mut files = file_utils::scan_directory(dir, recursive)?;
        file_utils::shuffle_paths(&mut files, rng);
        info!(
            "Scanned {} images from {:?} (recursive: {}) in {:?}",
            files.len(),
            dir,
            recursive,
            start.elapsed()
        );
        Ok(files)
    }

    /// Installs a freshly scanned sequence and positions on its first image.
    ///
    /// Returns the number of images.
    pub fn replace_sequence(&mut self, dir: &Path, files: Vec<PathBuf>) -> usize {
        self.current_directory = Some(dir.to_path_buf());
        self.current_index = if files.is_empty() { None } else { Some(0) };
        self.image_files = files;
        self.image_files.len()
    }

    /// Moves one step in `direction`, wrapping at both ends.
    fn navigate_to(&mut self, direction: Direction) -> Option<PathBuf> {
        let Some(index) = self.current_index else {
            warn!("No images available for navigation");
            return None;
        };
        let len = self.image_files.len();

        let new_index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        };
        debug!("Navigate {:?}: {} -> {} of {}", direction, index, new_index, len);

        self.current_index = Some(new_index);
        Some(self.image_files[new_index].clone())
    }

    /// Advances to the next image, wrapping to the first after the last.
    pub fn next_image(&mut self) -> Option<PathBuf> {
        self.navigate_to(Direction::Next)
    }

    /// Steps back to the previous image, wrapping to the last before the first.
    pub fn prev_image(&mut self) -> Option<PathBuf> {
        self.navigate_to(Direction::Previous)
    }

    /// Deletes the current image from disk and drops it from the sequence.
    ///
    /// Returns the image to show next, or `None` once the sequence is empty. If the file
    /// cannot be removed the sequence is left untouched and the error is returned.
    pub fn delete_current(&mut self) -> Result<Option<PathBuf>> {
        let Some(index) = self.current_index else {
            return Ok(None);
        };

        file_utils::delete_file(&self.image_files[index])?;
        let removed = self.image_files.remove(index);
        info!("Deleted {:?}", removed);

        if self.image_files.is_empty() {
            self.current_index = None;
            return Ok(None);
        }

        // Step back onto the predecessor, then advance: the image that followed the
        // deleted one (or the first, after deleting the last) becomes current.
        let len = self.image_files.len();
        self.current_index = Some((index + len - 1) % len);
        Ok(self.next_image())
    }

    /// Returns the path to the next image without moving.
    pub fn peek_next_image(&self) -> Option<PathBuf> {
        let index = self.current_index?;
        let len = self.image_files.len();
        Some(self.image_files[(index + 1) % len].clone())
    }

    /// Returns the path to the previous image without moving.
    pub fn peek_prev_image(&self) -> Option<PathBuf> {
        let index = self.current_index?;
        let len = self.image_files.len();
        Some(self.image_files[(index + len - 1) % len].clone())
    }

    /// Returns the current file path.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.current_index.map(|i| self.image_files[i].clone())
    }

    /// Returns the zero-based index of the current image.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the directory the sequence was loaded from.
    pub fn current_directory(&self) -> Option<&Path> {
        self.current_directory.as_deref()
    }

    pub fn image_count(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Status bar line: the current path followed by "n of total".
    pub fn status_text(&self) -> String {
        match self.current_index {
            Some(index) => format!(
                "{}    {} of {}",
                self.image_files[index].display(),
                index + 1,
                self.image_files.len()
            ),
            None => String::new(),
        }
    }
}
