//! Configuration options for the walkthrough viewer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::device::DEFAULT_MOBILE_BREAKPOINT;
use crate::easing::Easing;
use crate::error::{Result, WalkthroughError};
use crate::gate::ReframePolicy;
use crate::viewpoint::{self, Viewpoint, ViewpointRegistry};

/// Viewer configuration, usually loaded from a JSON file.
///
/// Missing fields take their default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Duration of a camera flight, in seconds.
    pub transition_seconds: f64,

    /// Easing curve for camera flights.
    pub easing: Easing,

    /// Viewport width (logical pixels) at or below which portrait viewports use the
    /// mobile variant of each viewpoint.
    pub mobile_breakpoint: f32,

    /// Viewpoint the camera starts at.
    pub home_viewpoint: String,

    /// Whether viewport changes snap the camera to the current viewpoint's pose for
    /// the new device class.
    pub reframe_policy: ReframePolicy,

    /// Info popup revealed at one viewpoint. `null` disables it.
    pub popup: Option<PopupOptions>,

    /// Vertical field of view in degrees.
    pub fov_degrees: f32,

    /// Start from a pose fitted to the scene bounds instead of the home viewpoint.
    pub fit_to_scene: bool,

    /// Extra distance factor applied when fitting the scene on mobile viewports.
    pub mobile_fit_margin: f32,

    /// Viewpoints in trigger order.
    pub viewpoints: Vec<Viewpoint>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            transition_seconds: 2.0,
            easing: Easing::InOutCubic,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            home_viewpoint: viewpoint::HOME.to_string(),
            reframe_policy: ReframePolicy::UntilInteracted,
            popup: Some(PopupOptions::default()),
            fov_degrees: 50.0,
            fit_to_scene: false,
            mobile_fit_margin: 1.4,
            viewpoints: viewpoint::preset_viewpoints(),
        }
    }
}

impl Options {
    /// Parses options from a JSON string and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file and validates them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::info!("loaded viewer options from {}", path.display());
        Ok(options)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks numeric ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.transition_seconds.is_finite() || self.transition_seconds < 0.0 {
            return Err(WalkthroughError::InvalidOptions(format!(
                "transition_seconds must be a non-negative number, got {}",
                self.transition_seconds
            )));
        }
        if !(self.mobile_breakpoint.is_finite() && self.mobile_breakpoint > 0.0) {
            return Err(WalkthroughError::InvalidOptions(format!(
                "mobile_breakpoint must be positive, got {}",
                self.mobile_breakpoint
            )));
        }
        if !(self.fov_degrees > 1.0 && self.fov_degrees < 179.0) {
            return Err(WalkthroughError::InvalidOptions(format!(
                "fov_degrees must be between 1 and 179, got {}",
                self.fov_degrees
            )));
        }
        if !(self.mobile_fit_margin.is_finite() && self.mobile_fit_margin > 0.0) {
            return Err(WalkthroughError::InvalidOptions(format!(
                "mobile_fit_margin must be positive, got {}",
                self.mobile_fit_margin
            )));
        }
        if let Some(PopupOptions {
            trigger: PopupTrigger::AfterDelay { millis },
            ..
        }) = &self.popup
        {
            if !millis.is_finite() || *millis < 0.0 {
                return Err(WalkthroughError::InvalidOptions(format!(
                    "popup delay must be a non-negative number, got {millis}"
                )));
            }
        }
        Ok(())
    }

    /// Builds the viewpoint registry and checks that every viewpoint the options
    /// refer to is registered.
    pub fn registry(&self) -> Result<ViewpointRegistry> {
        let registry = ViewpointRegistry::from_viewpoints(self.viewpoints.iter().cloned())?;
        registry.require([self.home_viewpoint.as_str()])?;
        if let Some(popup) = &self.popup {
            registry.require([popup.viewpoint.as_str()])?;
        }
        Ok(registry)
    }
}

/// The info popup attached to one viewpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupOptions {
    /// Viewpoint whose flight reveals the popup.
    pub viewpoint: String,
    /// Popup heading.
    pub title: String,
    /// Popup text.
    #[serde(default)]
    pub body: String,
    /// When the popup appears.
    #[serde(default)]
    pub trigger: PopupTrigger,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            viewpoint: viewpoint::SECONDARY.to_string(),
            title: "Point of interest".to_string(),
            body: String::new(),
            trigger: PopupTrigger::OnArrival,
        }
    }
}

/// When the popup appears after a flight towards its viewpoint starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopupTrigger {
    /// On the frame the camera arrives.
    #[default]
    OnArrival,
    /// A fixed time after the flight starts, whether or not it has arrived.
    AfterDelay {
        /// Delay in milliseconds.
        millis: f64,
    },
}
