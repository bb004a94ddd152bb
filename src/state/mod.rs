//! State management for the slideshow application.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::image_cache::ImageCache;
use crate::services::NavigationService;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

pub mod fullscreen;
pub mod navigation;
pub mod slideshow;

pub use fullscreen::{FullscreenState, FullscreenTransition, RestoreAction, WindowSnapshot};
pub use navigation::NavigationState;
pub use slideshow::{SlideshowSpeed, SlideshowState};

/// Application-wide state container.
///
/// Navigation and the cache are touched from rayon workers, so they sit behind
/// `Arc<Mutex<_>>`. Slideshow and fullscreen state live on the UI thread only.
#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<Mutex<NavigationState>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
    pub slideshow: Rc<RefCell<SlideshowState>>,
    pub fullscreen: Rc<RefCell<FullscreenState>>,
    /// Timer driving automatic advances.
    pub slideshow_timer: Rc<slint::Timer>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            navigation: Arc::new(Mutex::new(NavigationState::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
            slideshow: Rc::new(RefCell::new(SlideshowState::new())),
            fullscreen: Rc::new(RefCell::new(FullscreenState::new())),
            slideshow_timer: Rc::new(slint::Timer::default()),
        }
    }

    pub fn navigation_service(&self) -> NavigationService {
        NavigationService::new(self.navigation.clone())
    }
}
