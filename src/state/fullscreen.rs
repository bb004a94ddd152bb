//! Fullscreen mode and the window state to return to afterwards.

/// Window properties captured just before going fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Top-left corner in physical pixels.
    pub position: (i32, i32),
    /// Window size in physical pixels.
    pub size: (u32, u32),
    pub maximized: bool,
    /// Size of the image area in physical pixels; used to re-render before the window shrinks.
    pub image_area: (u32, u32),
}

/// How the window should be put back when fullscreen ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreAction {
    Maximize,
    Geometry { position: (i32, i32), size: (u32, u32) },
}

impl WindowSnapshot {
    pub fn restore_action(&self) -> RestoreAction {
        if self.maximized {
            RestoreAction::Maximize
        } else {
            RestoreAction::Geometry {
                position: self.position,
                size: self.size,
            }
        }
    }
}

/// Outcome of a fullscreen toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTransition {
    /// Nothing to show yet, so fullscreen was not entered.
    Refused,
    Enter,
    /// Leave fullscreen and restore the snapshot taken on entry, if any.
    Leave(Option<WindowSnapshot>),
}

#[derive(Debug, Default)]
pub struct FullscreenState {
    fullscreen: bool,
    saved: Option<WindowSnapshot>,
}

impl FullscreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips fullscreen. Entering requires loaded images; `snapshot` is only called when
    /// entering, to capture the window before it changes.
    pub fn toggle(
        &mut self,
        has_images: bool,
        snapshot: impl FnOnce() -> WindowSnapshot,
    ) -> FullscreenTransition {
        if self.fullscreen {
            return self.leave();
        }
        if !has_images {
            return FullscreenTransition::Refused;
        }

        self.saved = Some(snapshot());
        self.fullscreen = true;
        FullscreenTransition::Enter
    }

    /// Leaves fullscreen; used by Escape, which does nothing in windowed mode.
    pub fn exit(&mut self) -> Option<FullscreenTransition> {
        if self.fullscreen {
            Some(self.leave())
        } else {
            None
        }
    }

    fn leave(&mut self) -> FullscreenTransition {
        self.fullscreen = false;
        FullscreenTransition::Leave(self.saved.take())
    }
}
