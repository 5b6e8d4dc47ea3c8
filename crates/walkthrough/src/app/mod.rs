//! Application window and event loop management.

mod input;

use std::time::Instant;

use winit::{
    dpi::LogicalSize,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::viewer::{Frame, Walkthrough};
use crate::{Result, WalkthroughError};

const WINDOW_TITLE: &str = "walkthrough-rs";

/// Per-frame hook for the embedding renderer.
type FrameHook = Box<dyn FnMut(&Walkthrough, &Frame)>;

/// The walkthrough application state.
pub(crate) struct App {
    walkthrough: Walkthrough,
    on_frame: FrameHook,
    window: Option<Window>,
    clock: Instant,
    // Mouse state for camera control
    mouse_pos: (f64, f64),
    left_mouse_down: bool,
    right_mouse_down: bool,
    shift_down: bool,
    showing_popup: bool,
}

impl App {
    fn new(walkthrough: Walkthrough, on_frame: FrameHook) -> Self {
        Self {
            walkthrough,
            on_frame,
            window: None,
            clock: Instant::now(),
            mouse_pos: (0.0, 0.0),
            left_mouse_down: false,
            right_mouse_down: false,
            shift_down: false,
            showing_popup: false,
        }
    }

    /// Milliseconds since the app started.
    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) {
        let (width, height) = self.walkthrough.viewport();
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(window_attributes) {
            Ok(window) => {
                self.handle_resize(&window);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn handle_resize(&mut self, window: &Window) {
        let size = window.inner_size().to_logical::<f32>(window.scale_factor());
        if let Err(e) = self.walkthrough.resize(size.width, size.height) {
            log::error!("failed to reframe camera: {e}");
        }
    }

    fn fly_to_index(&mut self, index: usize) {
        let now = self.now_ms();
        if let Err(e) = self.walkthrough.fly_to_index(index, now) {
            log::warn!("{e}");
        }
    }

    fn redraw(&mut self) {
        let now = self.now_ms();
        let frame = self.walkthrough.frame(now);
        (self.on_frame)(&self.walkthrough, &frame);

        let popup_title = self.walkthrough.popup().map(|p| p.title.clone());
        if popup_title.is_some() != self.showing_popup {
            self.showing_popup = popup_title.is_some();
            if let Some(window) = &self.window {
                match popup_title {
                    Some(title) => window.set_title(&format!("{WINDOW_TITLE} | {title}")),
                    None => window.set_title(WINDOW_TITLE),
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Opens the viewer window and runs until it is closed.
///
/// Mouse: left drag orbits, right drag or shift + left drag pans, the wheel zooms.
/// Touch navigation is not mapped; a touch only counts as manual interaction.
/// Keys: `1`-`9` fly to the viewpoints in order, `H` flies home, `C` logs the
/// current camera as viewpoint JSON, `Escape` dismisses the popup.
pub fn run(walkthrough: Walkthrough) -> Result<()> {
    run_with(walkthrough, |_, _| {})
}

/// Like [`run`], calling `on_frame` after the camera has been updated each frame.
pub fn run_with(
    walkthrough: Walkthrough,
    on_frame: impl FnMut(&Walkthrough, &Frame) + 'static,
) -> Result<()> {
    let _ = env_logger::try_init();

    let event_loop = EventLoop::new().map_err(|e| WalkthroughError::EventLoop(e.to_string()))?;
    let mut app = App::new(walkthrough, Box::new(on_frame));
    event_loop
        .run_app(&mut app)
        .map_err(|e| WalkthroughError::EventLoop(e.to_string()))?;
    log::info!("walkthrough window closed");
    Ok(())
}
