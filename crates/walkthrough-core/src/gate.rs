//! Arbitration between manual camera control and scripted flights.

use serde::{Deserialize, Serialize};

/// When the viewer may snap the camera to the current viewpoint after the viewport
/// changes size or orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReframePolicy {
    /// Never reframe automatically.
    Never,
    /// Reframe until the user first moves the camera by hand.
    #[default]
    UntilInteracted,
    /// Always reframe, discarding manual camera changes.
    Always,
}

/// Tracks who owns the camera.
///
/// Two flags live here: whether manual input is currently accepted (false while a
/// flight is in progress) and whether the user has ever moved the camera by hand.
/// The second flag is one-way.
#[derive(Debug, Clone)]
pub struct InteractionGate {
    manual_input_enabled: bool,
    user_interacted: bool,
}

impl Default for InteractionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionGate {
    /// Creates a gate that accepts manual input and has seen none yet.
    pub fn new() -> Self {
        Self {
            manual_input_enabled: true,
            user_interacted: false,
        }
    }

    /// Records that the user moved the camera. Idempotent.
    pub fn mark_user_interacted(&mut self) {
        if !self.user_interacted {
            log::debug!("user took manual camera control");
        }
        self.user_interacted = true;
    }

    /// Whether the user has ever moved the camera by hand.
    pub fn has_user_interacted(&self) -> bool {
        self.user_interacted
    }

    /// Blocks manual input for the duration of a flight.
    pub fn suspend_manual_input(&mut self) {
        self.manual_input_enabled = false;
    }

    /// Hands the camera back to the user.
    pub fn resume_manual_input(&mut self) {
        self.manual_input_enabled = true;
    }

    /// Whether manual input may move the camera right now.
    pub fn manual_input_enabled(&self) -> bool {
        self.manual_input_enabled
    }

    /// Whether a viewport change may reframe the camera under `policy`.
    pub fn allows_auto_reframe(&self, policy: ReframePolicy) -> bool {
        match policy {
            ReframePolicy::Never => false,
            ReframePolicy::UntilInteracted => !self.user_interacted,
            ReframePolicy::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut gate = InteractionGate::new();
        assert!(!gate.has_user_interacted());
        gate.mark_user_interacted();
        gate.mark_user_interacted();
        gate.mark_user_interacted();
        assert!(gate.has_user_interacted());
    }

    #[test]
    fn test_manual_input_toggle() {
        let mut gate = InteractionGate::new();
        assert!(gate.manual_input_enabled());
        gate.suspend_manual_input();
        assert!(!gate.manual_input_enabled());
        gate.resume_manual_input();
        assert!(gate.manual_input_enabled());
    }

    #[test]
    fn test_reframe_policy() {
        let mut gate = InteractionGate::new();
        assert!(gate.allows_auto_reframe(ReframePolicy::UntilInteracted));
        assert!(gate.allows_auto_reframe(ReframePolicy::Always));
        assert!(!gate.allows_auto_reframe(ReframePolicy::Never));

        gate.mark_user_interacted();
        assert!(!gate.allows_auto_reframe(ReframePolicy::UntilInteracted));
        assert!(gate.allows_auto_reframe(ReframePolicy::Always));
    }
}
