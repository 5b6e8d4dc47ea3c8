//! Named camera viewpoints and their registry.

use std::collections::HashMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::device::DeviceClass;
use crate::error::{Result, WalkthroughError};
use crate::pose::Pose;

/// Name of the overview preset.
pub const HOME: &str = "Home";
/// Name of the close-up preset.
pub const SECONDARY: &str = "Secondary";

/// A named pose with an optional variant for mobile-portrait viewports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    /// Unique name used to look the viewpoint up.
    pub name: String,
    /// Button caption; falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Pose used on desktop viewports, and on mobile when no variant is given.
    pub desktop: Pose,
    /// Pose used on mobile-portrait viewports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Pose>,
}

impl Viewpoint {
    /// Creates a viewpoint that looks the same on every device.
    pub fn new(name: impl Into<String>, pose: Pose) -> Self {
        Self {
            name: name.into(),
            label: None,
            desktop: pose,
            mobile: None,
        }
    }

    /// Adds a mobile-portrait variant.
    pub fn with_mobile(mut self, pose: Pose) -> Self {
        self.mobile = Some(pose);
        self
    }

    /// Sets the button caption.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the pose for the given device class.
    pub fn pose_for(&self, device: DeviceClass) -> Pose {
        match device {
            DeviceClass::MobilePortrait => self.mobile.unwrap_or(self.desktop),
            DeviceClass::Desktop => self.desktop,
        }
    }

    /// Caption to show on the trigger for this viewpoint.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Ordered collection of viewpoints, looked up by name.
///
/// Registration order is kept so triggers can be laid out and numbered consistently.
#[derive(Debug, Clone, Default)]
pub struct ViewpointRegistry {
    viewpoints: Vec<Viewpoint>,
    index: HashMap<String, usize>,
}

impl ViewpointRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list, rejecting duplicate names.
    pub fn from_viewpoints(viewpoints: impl IntoIterator<Item = Viewpoint>) -> Result<Self> {
        let mut registry = Self::new();
        for viewpoint in viewpoints {
            registry.register(viewpoint)?;
        }
        Ok(registry)
    }

    /// The stock "Home" overview and "Secondary" close-up presets.
    pub fn presets() -> Self {
        let mut registry = Self::new();
        for viewpoint in preset_viewpoints() {
            registry.push(viewpoint);
        }
        registry
    }

    /// Registers a viewpoint.
    ///
    /// Returns an error if a viewpoint with the same name already exists.
    pub fn register(&mut self, viewpoint: Viewpoint) -> Result<()> {
        if self.index.contains_key(&viewpoint.name) {
            return Err(WalkthroughError::DuplicateViewpoint(viewpoint.name));
        }
        self.push(viewpoint);
        Ok(())
    }

    fn push(&mut self, viewpoint: Viewpoint) {
        self.index
            .insert(viewpoint.name.clone(), self.viewpoints.len());
        self.viewpoints.push(viewpoint);
    }

    /// Gets a viewpoint by name.
    pub fn get(&self, name: &str) -> Option<&Viewpoint> {
        self.index.get(name).map(|&i| &self.viewpoints[i])
    }

    /// Gets the n-th viewpoint in registration order.
    pub fn get_index(&self, index: usize) -> Option<&Viewpoint> {
        self.viewpoints.get(index)
    }

    /// Checks if a viewpoint with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolves a viewpoint name to the pose for the given device class.
    pub fn resolve(&self, name: &str, device: DeviceClass) -> Result<Pose> {
        self.get(name)
            .map(|vp| vp.pose_for(device))
            .ok_or_else(|| WalkthroughError::UnknownViewpoint(name.to_string()))
    }

    /// Fails on the first name that is not registered.
    pub fn require<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for name in names {
            if !self.contains(name) {
                return Err(WalkthroughError::UnknownViewpoint(name.to_string()));
            }
        }
        Ok(())
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.viewpoints.iter().map(|vp| vp.name.as_str())
    }

    /// Viewpoints in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Viewpoint> {
        self.viewpoints.iter()
    }

    /// Returns the number of registered viewpoints.
    pub fn len(&self) -> usize {
        self.viewpoints.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.viewpoints.is_empty()
    }
}

/// Viewpoint definitions backing [`ViewpointRegistry::presets`].
pub fn preset_viewpoints() -> Vec<Viewpoint> {
    vec![
        Viewpoint::new(
            HOME,
            Pose::new(Vec3::new(12.0, 8.0, 12.0), Vec3::new(0.0, 1.0, 0.0)),
        )
        .with_mobile(Pose::new(
            Vec3::new(18.0, 13.0, 18.0),
            Vec3::new(0.0, 1.0, 0.0),
        )),
        Viewpoint::new(
            SECONDARY,
            Pose::new(Vec3::new(-4.0, 2.5, 3.0), Vec3::new(-6.0, 1.2, -1.0)),
        )
        .with_mobile(Pose::new(
            Vec3::new(-3.0, 3.5, 6.0),
            Vec3::new(-6.0, 1.2, -1.0),
        )),
    ]
}
