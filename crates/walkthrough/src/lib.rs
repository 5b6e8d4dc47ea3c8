//! walkthrough-rs: a 3D walkthrough viewer with preset viewpoints.
//!
//! A user orbits, pans and zooms around a static scene, and preset viewpoints fly
//! the camera to fixed poses along an eased path. An info popup can be attached to
//! one viewpoint.
//!
//! # Quick Start
//!
//! ```no_run
//! use walkthrough::*;
//!
//! fn main() -> Result<()> {
//!     let mut viewer = Walkthrough::new(Options::default())?;
//!     viewer.set_scene_bounds(scene::load_bounds("assets/house.obj")?)?;
//!
//!     // Opens a window; keys 1..9 fly to the viewpoints.
//!     run(viewer)
//! }
//! ```
//!
//! # Embedding
//!
//! Hosts with their own loop own a [`Walkthrough`] value, forward manual input to it
//! and call [`Walkthrough::frame`] once per frame with a millisecond clock:
//!
//! ```
//! use walkthrough::*;
//!
//! let mut viewer = Walkthrough::new(Options::default()).unwrap();
//! viewer.fly_to("Secondary", 0.0).unwrap();
//! assert!(!viewer.orbit(0.1, 0.0)); // locked while flying
//!
//! let frame = viewer.frame(2_000.0);
//! assert_eq!(frame.status, FrameStatus::Arrived("Secondary".into()));
//! assert!(frame.popup_revealed);
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod app;
mod popup;
pub mod scene;
mod viewer;

pub use app::{run, run_with};
pub use popup::Popup;
pub use viewer::{Frame, FrameStatus, Walkthrough};

// Re-export core types
pub use walkthrough_core::{
    error::{Result, WalkthroughError},
    viewpoint::{HOME, SECONDARY},
    DeviceClass, Easing, InteractionGate, Options, Pose, PopupOptions, PopupTrigger,
    ReframePolicy, SceneBounds, Tick, TransitionController, Viewpoint, ViewpointRegistry,
    Mat4, Vec3,
};

// Re-export camera types
pub use walkthrough_camera::Camera;
