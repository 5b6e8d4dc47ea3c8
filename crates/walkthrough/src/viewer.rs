//! Viewer state: camera, flights, manual input and popup in one owned value.

use walkthrough_camera::Camera;
use walkthrough_core::{
    DeviceClass, InteractionGate, Options, Pose, PopupOptions, Result, SceneBounds, Tick,
    TransitionController, Viewpoint, ViewpointRegistry, WalkthroughError,
};

use crate::popup::Popup;

/// Viewing direction used when framing the scene from its bounds.
const FIT_DIRECTION: glam::Vec3 = glam::Vec3::new(1.0, 0.6, 1.0);

/// What happened to the camera during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    /// No flight; the camera is under manual control.
    Idle,
    /// A flight moved the camera this frame.
    Flying,
    /// A flight ended this frame at the named viewpoint.
    Arrived(String),
}

/// Result of [`Walkthrough::frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Pose the camera has after this frame.
    pub pose: Pose,
    /// Flight status.
    pub status: FrameStatus,
    /// True on the frame the popup became visible.
    pub popup_revealed: bool,
}

/// A walkthrough session.
///
/// Owns the camera and every piece of state that decides who may move it. The host
/// loop calls [`Walkthrough::frame`] once per frame and forwards manual input to
/// [`Walkthrough::orbit`], [`Walkthrough::pan`] and [`Walkthrough::zoom`]; UI
/// triggers call [`Walkthrough::fly_to`].
#[derive(Debug, Clone)]
pub struct Walkthrough {
    options: Options,
    registry: ViewpointRegistry,
    camera: Camera,
    controller: TransitionController<String>,
    gate: InteractionGate,
    popup: Popup,
    device: DeviceClass,
    viewport: (f32, f32),
    bounds: Option<SceneBounds>,
    current_viewpoint: String,
    pending_reframe: bool,
}

impl Walkthrough {
    /// Creates a session with the camera at the home viewpoint.
    ///
    /// Fails if the options are out of range or refer to unregistered viewpoints.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        let registry = options.registry()?;

        let viewport = (1280.0, 720.0);
        let mut camera = Camera::new(viewport.0 / viewport.1);
        camera.set_fov_degrees(options.fov_degrees);

        let mut walkthrough = Self {
            controller: TransitionController::new(options.easing),
            popup: Popup::new(options.popup.clone()),
            current_viewpoint: options.home_viewpoint.clone(),
            device: DeviceClass::classify(viewport.0, viewport.1, options.mobile_breakpoint),
            options,
            registry,
            camera,
            gate: InteractionGate::new(),
            viewport,
            bounds: None,
            pending_reframe: false,
        };
        let home = walkthrough.framing_pose()?;
        walkthrough.camera.set_pose(home);
        log::info!(
            "walkthrough ready with {} viewpoints, starting at '{}'",
            walkthrough.registry.len(),
            walkthrough.current_viewpoint
        );
        Ok(walkthrough)
    }

    /// Pose the camera should rest at for the current viewpoint and device class.
    fn framing_pose(&self) -> Result<Pose> {
        if self.options.fit_to_scene && self.current_viewpoint == self.options.home_viewpoint {
            if let Some(bounds) = &self.bounds {
                let margin = match self.device {
                    DeviceClass::MobilePortrait => self.options.mobile_fit_margin,
                    DeviceClass::Desktop => 1.0,
                };
                return Ok(bounds.fit_pose(
                    self.camera.fov,
                    self.camera.aspect_ratio,
                    FIT_DIRECTION,
                    margin,
                ));
            }
        }
        self.registry.resolve(&self.current_viewpoint, self.device)
    }

    /// Supplies the bounding volume of the loaded scene.
    ///
    /// Clip planes follow the scene size. With `fit_to_scene` the camera is reframed
    /// around the bounds unless the user already took control.
    pub fn set_scene_bounds(&mut self, bounds: SceneBounds) -> Result<()> {
        self.camera.fit_clip_planes(&bounds);
        self.bounds = Some(bounds);
        if self.options.fit_to_scene && !self.gate.has_user_interacted() && !self.is_flying() {
            let pose = self.framing_pose()?;
            self.camera.set_pose(pose);
        }
        Ok(())
    }

    /// Updates the viewport size in logical pixels.
    ///
    /// Recomputes the device class and, when the reframe policy allows it, snaps the
    /// camera to the current viewpoint's pose for the new device class. During a
    /// flight the reframe is deferred to the arrival frame. Returns true if the
    /// camera was reframed now.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool> {
        if width <= 0.0 || height <= 0.0 {
            return Ok(false);
        }
        self.viewport = (width, height);
        self.camera.set_aspect_ratio(width / height);

        let device = DeviceClass::classify(width, height, self.options.mobile_breakpoint);
        if device != self.device {
            log::info!("viewport is now {}", device.name());
            self.device = device;
        }

        if self.is_flying() {
            self.pending_reframe = true;
            return Ok(false);
        }
        if !self.gate.allows_auto_reframe(self.options.reframe_policy) {
            return Ok(false);
        }
        let pose = self.framing_pose()?;
        self.camera.set_pose(pose);
        log::debug!("reframed camera to '{}'", self.current_viewpoint);
        Ok(true)
    }

    /// Starts a flight to the named viewpoint.
    ///
    /// A flight already in progress is superseded; the new one starts from wherever
    /// the camera currently is.
    pub fn fly_to(&mut self, name: &str, now_ms: f64) -> Result<()> {
        let to = self.registry.resolve(name, self.device)?;
        self.controller.retarget(
            now_ms,
            self.camera.pose(),
            to,
            self.options.transition_seconds,
            Some(name.to_string()),
        );
        self.gate.suspend_manual_input();
        // The destination was just resolved for the current device class.
        self.pending_reframe = false;
        self.popup.on_flight_started(name, now_ms);
        self.current_viewpoint = name.to_string();
        log::info!("flying to '{name}'");
        Ok(())
    }

    /// Starts a flight to the viewpoint at `index` in trigger order.
    pub fn fly_to_index(&mut self, index: usize, now_ms: f64) -> Result<()> {
        let name = self
            .registry
            .get_index(index)
            .map(|vp| vp.name.clone())
            .ok_or_else(|| WalkthroughError::UnknownViewpoint(format!("#{}", index.saturating_add(1))))?;
        self.fly_to(&name, now_ms)
    }

    /// Starts a flight back to the home viewpoint.
    pub fn fly_home(&mut self, now_ms: f64) -> Result<()> {
        let home = self.options.home_viewpoint.clone();
        self.fly_to(&home, now_ms)
    }

    /// Advances the session to `now_ms` and writes the resulting pose to the camera.
    pub fn frame(&mut self, now_ms: f64) -> Frame {
        let status = match self.controller.tick(now_ms) {
            Tick::Idle => FrameStatus::Idle,
            Tick::Moving(pose) => {
                // Manual input stays locked before the scripted pose is written.
                self.gate.suspend_manual_input();
                self.camera.set_pose(pose);
                FrameStatus::Flying
            }
            Tick::Arrived { pose, arrival } => {
                self.gate.resume_manual_input();
                let reframe = std::mem::take(&mut self.pending_reframe)
                    && self.gate.allows_auto_reframe(self.options.reframe_policy);
                let pose = if reframe {
                    // The viewport changed mid-flight; land on the variant for it.
                    self.framing_pose().unwrap_or(pose)
                } else {
                    pose
                };
                self.camera.set_pose(pose);
                let name = arrival.unwrap_or_default();
                log::info!("arrived at '{name}'");
                FrameStatus::Arrived(name)
            }
        };

        let mut popup_revealed = match &status {
            FrameStatus::Arrived(name) => self.popup.on_arrival(name),
            _ => false,
        };
        popup_revealed |= self.popup.poll(now_ms);
        if popup_revealed {
            if let Some(popup) = self.popup.visible() {
                log::info!("showing popup '{}'", popup.title);
            }
        }

        Frame {
            pose: self.camera.pose(),
            status,
            popup_revealed,
        }
    }

    /// Orbits the camera. Ignored while a flight is in progress.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.manual(|camera| camera.orbit(delta_x, delta_y))
    }

    /// Pans the camera. Ignored while a flight is in progress.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) -> bool {
        self.manual(|camera| camera.pan(delta_x, delta_y))
    }

    /// Zooms the camera. Ignored while a flight is in progress.
    pub fn zoom(&mut self, delta: f32) -> bool {
        self.manual(|camera| camera.zoom(delta))
    }

    fn manual(&mut self, apply: impl FnOnce(&mut Camera)) -> bool {
        if !self.gate.manual_input_enabled() {
            log::debug!("manual camera input ignored during flight");
            return false;
        }
        self.gate.mark_user_interacted();
        apply(&mut self.camera);
        true
    }

    /// Records raw pointer input that did not move the camera (a press or a touch).
    pub fn mark_user_interacted(&mut self) {
        if self.gate.manual_input_enabled() {
            self.gate.mark_user_interacted();
        }
    }

    /// Whether the user has ever moved the camera by hand.
    pub fn has_user_interacted(&self) -> bool {
        self.gate.has_user_interacted()
    }

    /// Whether manual input is accepted right now.
    pub fn manual_input_enabled(&self) -> bool {
        self.gate.manual_input_enabled()
    }

    /// Whether a flight is in progress.
    pub fn is_flying(&self) -> bool {
        self.controller.is_active()
    }

    /// The popup content while it is visible.
    pub fn popup(&self) -> Option<&PopupOptions> {
        self.popup.visible()
    }

    /// Hides the popup.
    pub fn dismiss_popup(&mut self) {
        self.popup.dismiss();
    }

    /// The current camera pose as a viewpoint definition named `name`.
    pub fn camera_snapshot(&self, name: &str) -> Viewpoint {
        Viewpoint::new(name, self.camera.pose())
    }

    /// The current camera pose as pretty-printed viewpoint JSON, ready to paste into
    /// the options file.
    pub fn camera_snapshot_json(&self, name: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.camera_snapshot(name))?)
    }

    /// The camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current device class.
    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Viewport size in logical pixels.
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Viewpoint the camera was last sent to.
    pub fn current_viewpoint(&self) -> &str {
        &self.current_viewpoint
    }

    /// Registered viewpoints.
    pub fn registry(&self) -> &ViewpointRegistry {
        &self.registry
    }

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Bounds of the loaded scene, if any.
    pub fn scene_bounds(&self) -> Option<&SceneBounds> {
        self.bounds.as_ref()
    }
}
