//! Core abstractions for walkthrough-rs.
//!
//! This crate holds everything that decides where the camera should be, independent of
//! any window or renderer:
//! - [`Pose`] and [`Viewpoint`] values, looked up through a [`ViewpointRegistry`]
//! - the [`TransitionController`] that flies the camera between poses
//! - the [`InteractionGate`] arbitrating between manual input and scripted flights
//! - viewer [`Options`] loaded from JSON

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bounds;
pub mod device;
pub mod easing;
pub mod error;
pub mod gate;
pub mod options;
pub mod pose;
pub mod transition;
pub mod viewpoint;

pub use bounds::SceneBounds;
pub use device::DeviceClass;
pub use easing::Easing;
pub use error::{Result, WalkthroughError};
pub use gate::{InteractionGate, ReframePolicy};
pub use options::{Options, PopupOptions, PopupTrigger};
pub use pose::Pose;
pub use transition::{Tick, TransitionController};
pub use viewpoint::{Viewpoint, ViewpointRegistry};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec3};
