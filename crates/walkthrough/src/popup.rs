//! The info popup attached to one viewpoint.

use walkthrough_core::{PopupOptions, PopupTrigger};

#[derive(Debug, Clone, Copy, PartialEq)]
enum PopupState {
    Hidden,
    Scheduled { at_ms: f64 },
    Visible,
}

/// Visibility of the configured popup.
///
/// Arrival events and the clock drive it. It never touches the camera.
#[derive(Debug, Clone)]
pub struct Popup {
    options: Option<PopupOptions>,
    state: PopupState,
}

impl Popup {
    /// Creates a hidden popup. `None` disables it entirely.
    pub fn new(options: Option<PopupOptions>) -> Self {
        Self {
            options,
            state: PopupState::Hidden,
        }
    }

    /// Reacts to a flight towards `viewpoint` starting at `now_ms`.
    ///
    /// Any visible or pending popup is hidden first.
    pub fn on_flight_started(&mut self, viewpoint: &str, now_ms: f64) {
        self.state = PopupState::Hidden;
        if let Some(options) = &self.options {
            if let PopupTrigger::AfterDelay { millis } = options.trigger {
                if options.viewpoint == viewpoint {
                    self.state = PopupState::Scheduled {
                        at_ms: now_ms + millis,
                    };
                }
            }
        }
    }

    /// Reacts to a flight arriving at `viewpoint`. Returns true if this reveals it.
    pub fn on_arrival(&mut self, viewpoint: &str) -> bool {
        let Some(options) = &self.options else {
            return false;
        };
        if options.trigger == PopupTrigger::OnArrival
            && options.viewpoint == viewpoint
            && self.state != PopupState::Visible
        {
            self.state = PopupState::Visible;
            return true;
        }
        false
    }

    /// Reveals a scheduled popup once its time has come. Returns true if this
    /// reveals it.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.state {
            PopupState::Scheduled { at_ms } if now_ms >= at_ms => {
                self.state = PopupState::Visible;
                true
            }
            _ => false,
        }
    }

    /// Hides the popup and cancels any pending reveal.
    pub fn dismiss(&mut self) {
        self.state = PopupState::Hidden;
    }

    /// The popup content while it is visible.
    pub fn visible(&self) -> Option<&PopupOptions> {
        match self.state {
            PopupState::Visible => self.options.as_ref(),
            _ => None,
        }
    }

    /// Whether a delayed reveal is pending.
    pub fn is_scheduled(&self) -> bool {
        matches!(self.state, PopupState::Scheduled { .. })
    }
}
