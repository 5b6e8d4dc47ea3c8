//! Orbit camera for walkthrough-rs.
//!
//! The [`Camera`] is what manual input manipulates and what camera flights write
//! their poses into. It knows nothing about flights itself.

pub mod camera;

pub use camera::Camera;
