//! Service driving the slideshow timer.
//!
//! The timer lives on the Slint event loop, so every tick runs on the UI thread
//! alongside key presses and button clicks.

use crate::state::{SlideshowSpeed, SlideshowState};
use log::{debug, info};
use slint::{Timer, TimerMode};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct SlideshowService {
    state: Rc<RefCell<SlideshowState>>,
    timer: Rc<Timer>,
    on_tick: Rc<dyn Fn()>,
}

impl SlideshowService {
    /// Creates a service that calls `on_tick` every interval while playing.
    pub fn new(
        state: Rc<RefCell<SlideshowState>>,
        timer: Rc<Timer>,
        on_tick: impl Fn() + 'static,
    ) -> Self {
        Self {
            state,
            timer,
            on_tick: Rc::new(on_tick),
        }
    }

    /// Starts or pauses playback, returning the new playing flag.
    pub fn toggle(&self) -> bool {
        let playing = self.state.borrow_mut().toggle();
        if playing {
            self.arm();
        } else {
            self.timer.stop();
            info!("Slideshow paused");
        }
        playing
    }

    /// Stops playback if it is running.
    pub fn stop(&self) {
        if self.state.borrow_mut().stop() {
            self.timer.stop();
            info!("Slideshow stopped");
        }
    }

    /// Changes the interval, re-arming the timer when playing.
    pub fn set_speed(&self, speed: SlideshowSpeed) {
        let rearm = self.state.borrow_mut().set_speed(speed);
        debug!("Slideshow speed set to {:?}", speed);
        if rearm {
            self.arm();
        }
    }

    fn arm(&self) {
        let interval = self.state.borrow().speed().interval();
        let on_tick = self.on_tick.clone();
        self.timer.start(TimerMode::Repeated, interval, move || {
            debug!("Slideshow tick");
            on_tick();
        });
        info!("Slideshow playing every {:?}", interval);
    }
}
