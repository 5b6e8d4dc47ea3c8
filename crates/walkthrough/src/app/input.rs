use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use super::App;

/// Radians of orbit per pixel of drag.
const ORBIT_SPEED: f32 = 0.005;
/// Pan distance per pixel, relative to the camera-target distance.
const PAN_SPEED: f32 = 0.002;
/// Zoom distance per wheel line, relative to the camera-target distance.
const ZOOM_SPEED: f32 = 0.1;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.create_window(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = self.window.take() {
                    self.handle_resize(&window);
                    self.window = Some(window);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_down = modifiers.state().shift_key();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.left_mouse_down = pressed,
                    MouseButton::Right => self.right_mouse_down = pressed,
                    _ => {}
                }
                if pressed {
                    self.walkthrough.mark_user_interacted();
                }
            }
            WindowEvent::Touch(_) => {
                self.walkthrough.mark_user_interacted();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let delta_x = (position.x - self.mouse_pos.0) as f32;
                let delta_y = (position.y - self.mouse_pos.1) as f32;
                self.mouse_pos = (position.x, position.y);

                let is_rotate = self.left_mouse_down && !self.shift_down;
                let is_pan = self.right_mouse_down || (self.left_mouse_down && self.shift_down);
                if is_rotate {
                    self.walkthrough
                        .orbit(delta_x * ORBIT_SPEED, delta_y * ORBIT_SPEED);
                } else if is_pan {
                    let scale = self.walkthrough.camera().pose().distance() * PAN_SPEED;
                    self.walkthrough.pan(-delta_x * scale, delta_y * scale);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
                };
                let distance = self.walkthrough.camera().pose().distance();
                self.walkthrough.zoom(lines * distance * ZOOM_SPEED);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.handle_key(code);
            }
            _ => {}
        }
    }
}

impl App {
    fn handle_key(&mut self, code: KeyCode) {
        let digit = match code {
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            KeyCode::Digit5 => Some(4),
            KeyCode::Digit6 => Some(5),
            KeyCode::Digit7 => Some(6),
            KeyCode::Digit8 => Some(7),
            KeyCode::Digit9 => Some(8),
            _ => None,
        };
        if let Some(index) = digit {
            self.fly_to_index(index);
            return;
        }

        match code {
            KeyCode::KeyH => {
                let now = self.now_ms();
                if let Err(e) = self.walkthrough.fly_home(now) {
                    log::warn!("{e}");
                }
            }
            KeyCode::KeyC => match self.walkthrough.camera_snapshot_json("Copied") {
                Ok(json) => log::info!("current camera:\n{json}"),
                Err(e) => log::warn!("failed to capture camera: {e}"),
            },
            KeyCode::Escape => self.walkthrough.dismiss_popup(),
            _ => {}
        }
    }
}
