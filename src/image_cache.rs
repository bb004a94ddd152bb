//! Image cache for fast navigation.
//!
//! Caches full-resolution decoded RGB8 images using an LRU policy, so timer advances and
//! back-and-forth browsing skip the decoder. Scaling happens after the cache lookup, since
//! the display area can change between views.

use crate::image_loader::DecodedImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, DecodedImage>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity (at least one entry).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<DecodedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::info!("Cache HIT: {}", path.display());
        } else {
            log::info!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, image: DecodedImage) {
        log::info!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        self.cache.put(path, image);
    }

    /// Drops the entry for a file that no longer exists.
    pub fn remove(&mut self, path: &Path) {
        self.cache.pop(path);
    }

    /// Forgets everything, e.g. when another directory is opened.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Checks if an image is in the cache.
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(value: u8) -> DecodedImage {
        DecodedImage {
            data: vec![value; 3],
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("a.png"), pixel(1));
        cache.put(PathBuf::from("b.png"), pixel(2));
        assert!(cache.get(Path::new("a.png")).is_some());

        cache.put(PathBuf::from("c.png"), pixel(3));
        assert!(cache.contains(Path::new("a.png")));
        assert!(!cache.contains(Path::new("b.png")));
        assert!(cache.contains(Path::new("c.png")));
    }

    #[test]
    fn remove_and_clear_drop_entries() {
        let mut cache = ImageCache::new(4);
        cache.put(PathBuf::from("a.png"), pixel(1));
        cache.put(PathBuf::from("b.png"), pixel(2));

        cache.remove(Path::new("a.png"));
        assert!(cache.get(Path::new("a.png")).is_none());
        assert_eq!(cache.get(Path::new("b.png")).map(|img| img.data), Some(vec![2; 3]));

        cache.clear();
        assert!(!cache.contains(Path::new("b.png")));
    }

    #[test]
    fn zero_capacity_still_holds_one_image() {
        let mut cache = ImageCache::new(0);
        cache.put(PathBuf::from("a.png"), pixel(1));
        assert!(cache.contains(Path::new("a.png")));
    }
}
