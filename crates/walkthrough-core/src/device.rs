//! Device classification for responsive viewpoints.

use serde::{Deserialize, Serialize};

/// Default viewport width (logical pixels) at or below which a portrait viewport
/// counts as mobile.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Which variant of a viewpoint applies to the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Landscape or wide viewports.
    #[default]
    Desktop,
    /// Narrow viewports taller than they are wide.
    MobilePortrait,
}

impl DeviceClass {
    /// Classifies a viewport from its logical size.
    ///
    /// A viewport is mobile-portrait when it is no wider than `breakpoint` and
    /// taller than it is wide.
    pub fn classify(width: f32, height: f32, breakpoint: f32) -> Self {
        if width <= breakpoint && height > width {
            DeviceClass::MobilePortrait
        } else {
            DeviceClass::Desktop
        }
    }

    /// Returns true for [`DeviceClass::MobilePortrait`].
    pub fn is_mobile_portrait(self) -> bool {
        self == DeviceClass::MobilePortrait
    }

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            DeviceClass::Desktop => "desktop",
            DeviceClass::MobilePortrait => "mobile portrait",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let bp = DEFAULT_MOBILE_BREAKPOINT;
        assert_eq!(DeviceClass::classify(390.0, 844.0, bp), DeviceClass::MobilePortrait);
        assert_eq!(DeviceClass::classify(768.0, 1024.0, bp), DeviceClass::MobilePortrait);
        // Phone rotated to landscape
        assert_eq!(DeviceClass::classify(844.0, 390.0, bp), DeviceClass::Desktop);
        // Narrow but square
        assert_eq!(DeviceClass::classify(500.0, 500.0, bp), DeviceClass::Desktop);
        assert_eq!(DeviceClass::classify(1920.0, 1080.0, bp), DeviceClass::Desktop);
    }
}
