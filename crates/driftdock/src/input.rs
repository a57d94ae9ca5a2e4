//! Translation of winit window events into drag signals.
//!
//! One [`WinitDragInput`] follows one widget. It starts a drag when the left
//! mouse button or the first touch goes down on the widget, streams moves of
//! that same pointer, and ends on release.

use crate::position::PointerInput;
use driftdock_core::math::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// Drag lifecycle signal for a [`DragSessionController`](crate::session::DragSessionController).
#[derive(Debug, Clone, PartialEq)]
pub enum DragSignal {
    Start,
    Move(PointerInput),
    End,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePointer {
    Mouse,
    Touch(u64),
}

/// Stateful adapter from winit events to [`DragSignal`]s.
#[derive(Debug, Clone)]
pub struct WinitDragInput {
    scale_factor: f64,
    cursor: Option<Vec2>,
    active: Option<ActivePointer>,
}

impl WinitDragInput {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: None,
            active: None,
        }
    }

    /// Last cursor position in logical pixels.
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    fn to_logical(&self, position: PhysicalPosition<f64>) -> Vec2 {
        let logical = position.to_logical::<f32>(self.scale_factor);
        Vec2::new(logical.x, logical.y)
    }

    /// Feed one window event.
    ///
    /// `hit_test` is asked whether a press at a logical position lands on the
    /// widget; it is only called for presses and touch starts.
    pub fn handle(
        &mut self,
        event: &WindowEvent,
        hit_test: impl FnOnce(Vec2) -> bool,
    ) -> Option<DragSignal> {
        match event {
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = self.to_logical(*position);
                self.cursor = Some(pos);
                (self.active == Some(ActivePointer::Mouse))
                    .then(|| DragSignal::Move(PointerInput::mouse(pos)))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed if self.active.is_none() => {
                    let pos = self.cursor?;
                    if !hit_test(pos) {
                        return None;
                    }
                    self.active = Some(ActivePointer::Mouse);
                    Some(DragSignal::Start)
                }
                ElementState::Released if self.active == Some(ActivePointer::Mouse) => {
                    self.active = None;
                    Some(DragSignal::End)
                }
                _ => None,
            },
            WindowEvent::Touch(touch) => {
                let pos = self.to_logical(touch.location);
                match touch.phase {
                    TouchPhase::Started if self.active.is_none() => {
                        if !hit_test(pos) {
                            return None;
                        }
                        self.active = Some(ActivePointer::Touch(touch.id));
                        Some(DragSignal::Start)
                    }
                    TouchPhase::Moved if self.active == Some(ActivePointer::Touch(touch.id)) => {
                        Some(DragSignal::Move(PointerInput::touch(vec![pos])))
                    }
                    TouchPhase::Ended if self.active == Some(ActivePointer::Touch(touch.id)) => {
                        self.active = None;
                        Some(DragSignal::End)
                    }
                    TouchPhase::Cancelled if self.active == Some(ActivePointer::Touch(touch.id)) => {
                        self.active = None;
                        Some(DragSignal::Cancel)
                    }
                    _ => None,
                }
            }
            WindowEvent::Focused(false) if self.active.is_some() => {
                self.active = None;
                Some(DragSignal::Cancel)
            }
            _ => None,
        }
    }
}

impl Default for WinitDragInput {
    fn default() -> Self {
        Self::new(1.0)
    }
}
