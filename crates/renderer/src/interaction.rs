//! Zoom, pan and pinch state machine
//!
//! One engine per surface. The engine owns its view state exclusively and
//! invokes the supplied callback synchronously after every mutation that
//! changes the visual transform, and never for mutations that don't, so
//! a wheel event clamped at a zoom bound is a strict no-op.
//!
//! Embedders must suppress the platform's default scroll handling before
//! forwarding wheel events; the engine only sees the translated event.

use freq_charts_shared::events::{
    ElementState, InputEvent, MouseButton, MouseScrollDelta, PhysicalPosition, TouchPhase,
    TouchPoint,
};
use freq_charts_shared::{ChartKind, InteractionOptions, ViewState};
use nalgebra_glm as glm;

/// Pinches narrower than this are ignored to keep the zoom ratio finite.
const MIN_PINCH_DISTANCE: f64 = 1.0e-3;

pub type ViewChangeCallback = Box<dyn FnMut(&ViewState)>;

/// Gesture the engine is currently tracking
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Dragging {
        last: PhysicalPosition,
    },
    Pinching {
        baseline_distance: f64,
        baseline_zoom: f64,
    },
}

/// Per-surface interaction controller.
///
/// Constructed per canvas and discarded when the chart kind changes; the
/// `invalidate` flag signals that hand-over to whoever drives the render
/// loop, consumed exactly once per switch.
pub struct InteractionEngine {
    options: InteractionOptions,
    state: ViewState,
    gesture: Gesture,
    cursor: PhysicalPosition,
    invalidated: bool,
    on_view_change: ViewChangeCallback,
}

impl InteractionEngine {
    pub fn new(
        chart_kind: ChartKind,
        options: InteractionOptions,
        on_view_change: ViewChangeCallback,
    ) -> Self {
        Self {
            state: ViewState::new(chart_kind, &options),
            options,
            gesture: Gesture::Idle,
            cursor: PhysicalPosition::new(-1.0, -1.0),
            invalidated: false,
            on_view_change,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.state.chart_kind
    }

    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    /// Route one surface-local input event through the state machine.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseWheel { delta, position } => self.handle_wheel(delta, position),
            InputEvent::CursorMoved { position } => self.handle_cursor_moved(position),
            InputEvent::MouseInput { state, button } => self.handle_mouse_input(state, button),
            InputEvent::CursorLeft => self.end_drag(),
            InputEvent::Touch { phase, touches } => self.handle_touch(phase, &touches),
            InputEvent::DoubleClick => self.reset(),
        }
    }

    /// Explicit zoom-in control. Zooms in place, with no fixed point.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.state.zoom_level * self.options.button_zoom_step);
    }

    /// Explicit zoom-out control.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.state.zoom_level / self.options.button_zoom_step);
    }

    /// Return to the identity view. A no-op when already there.
    pub fn reset(&mut self) {
        if self.state.is_identity() {
            return;
        }
        self.state.zoom_level = 1.0;
        self.state.offset_x = 0.0;
        self.state.offset_y = 0.0;
        self.notify();
    }

    /// Mark this engine for disposal on the next chart-kind switch.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Consume the one-shot invalidation flag.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }

    fn handle_wheel(&mut self, delta: MouseScrollDelta, position: PhysicalPosition) {
        let MouseScrollDelta::PixelDelta(amount) = delta;
        let factor = if amount.y > 0.0 {
            self.options.wheel_zoom_out
        } else {
            self.options.wheel_zoom_in
        };
        self.zoom_about(position, self.state.zoom_level * factor);
        log::debug!("wheel zoom -> {}", self.state.zoom_level);
    }

    fn handle_cursor_moved(&mut self, position: PhysicalPosition) {
        self.cursor = position;
        self.pan_to(position);
    }

    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                self.state.is_dragging = true;
                self.gesture = Gesture::Dragging { last: self.cursor };
            }
            ElementState::Released => self.end_drag(),
        }
    }

    fn handle_touch(&mut self, phase: TouchPhase, touches: &[TouchPoint]) {
        match phase {
            TouchPhase::Started => match touches {
                [single] => {
                    self.state.is_dragging = true;
                    self.gesture = Gesture::Dragging {
                        last: single.position,
                    };
                }
                [first, second, ..] => {
                    let distance = pinch_distance(first, second);
                    if distance < MIN_PINCH_DISTANCE {
                        // degenerate pinch, keep whatever gesture was active
                        return;
                    }
                    self.state.is_dragging = false;
                    self.state.is_pinching = true;
                    self.gesture = Gesture::Pinching {
                        baseline_distance: distance,
                        baseline_zoom: self.state.zoom_level,
                    };
                }
                [] => {}
            },
            TouchPhase::Moved => match (self.gesture, touches) {
                (Gesture::Dragging { .. }, [single]) => self.pan_to(single.position),
                (
                    Gesture::Pinching {
                        baseline_distance,
                        baseline_zoom,
                    },
                    [first, second, ..],
                ) => {
                    let ratio = pinch_distance(first, second) / baseline_distance;
                    let midpoint = pinch_midpoint(first, second);
                    self.zoom_about(midpoint, baseline_zoom * ratio);
                }
                _ => {}
            },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.state.is_dragging = false;
                self.state.is_pinching = false;
                self.gesture = Gesture::Idle;
            }
        }
    }

    /// Pan by the pointer delta while a drag is active.
    fn pan_to(&mut self, position: PhysicalPosition) {
        if let Gesture::Dragging { last } = self.gesture {
            let delta_x = position.x - last.x;
            let delta_y = position.y - last.y;
            self.gesture = Gesture::Dragging { last: position };
            if delta_x == 0.0 && delta_y == 0.0 {
                return;
            }
            self.state.offset_x += delta_x;
            self.state.offset_y += delta_y;
            self.notify();
        }
    }

    fn end_drag(&mut self) {
        self.state.is_dragging = false;
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Zoom toward `anchor`, keeping its content-space point visually
    /// fixed. Clamped-to-unchanged zooms are strict no-ops.
    fn zoom_about(&mut self, anchor: PhysicalPosition, requested_zoom: f64) {
        let new_zoom = self.state.clamp_zoom(requested_zoom);
        if new_zoom == self.state.zoom_level {
            return;
        }

        let ratio = new_zoom / self.state.zoom_level;
        self.state.offset_x = anchor.x - (anchor.x - self.state.offset_x) * ratio;
        self.state.offset_y = anchor.y - (anchor.y - self.state.offset_y) * ratio;
        self.state.zoom_level = new_zoom;
        self.notify();
    }

    /// Zoom in place (button controls).
    fn set_zoom(&mut self, requested_zoom: f64) {
        let new_zoom = self.state.clamp_zoom(requested_zoom);
        if new_zoom == self.state.zoom_level {
            return;
        }
        self.state.zoom_level = new_zoom;
        self.notify();
    }

    fn notify(&mut self) {
        (self.on_view_change)(&self.state);
    }
}

fn pinch_distance(a: &TouchPoint, b: &TouchPoint) -> f64 {
    glm::distance(
        &glm::vec2(a.position.x, a.position.y),
        &glm::vec2(b.position.x, b.position.y),
    )
}

fn pinch_midpoint(a: &TouchPoint, b: &TouchPoint) -> PhysicalPosition {
    PhysicalPosition::new(
        (a.position.x + b.position.x) / 2.0,
        (a.position.y + b.position.y) / 2.0,
    )
}
