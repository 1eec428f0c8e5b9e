//! Delayed Callbacks
//!
//! The error banner dismisses itself after a fixed delay. The scheduler is
//! a trait so tests can fire the callbacks by hand.

use gloo_timers::callback::Timeout;

/// How long an error stays in the banner
pub const ERROR_DELAY_MS: u32 = 3000;

pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

pub trait DismissTimer: Send + Sync {
    /// Run `callback` once after `delay_ms`
    fn schedule(&self, delay_ms: u32, callback: TimerCallback);
}

/// `setTimeout`-backed timer
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl DismissTimer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) {
        // Cancellation happens through the error generation, not the handle
        Timeout::new(delay_ms, callback).forget();
    }
}
