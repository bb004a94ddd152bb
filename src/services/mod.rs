//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod navigation_service;
pub mod slideshow_service;

pub use navigation_service::{NavigationInfo, NavigationService};
pub use slideshow_service::SlideshowService;
