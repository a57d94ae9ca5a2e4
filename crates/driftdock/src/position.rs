//! Clamped position tracking during an active drag.
//!
//! Each move is computed from scratch from the current pointer and the
//! current element rect. The pointer drives the element's center, not the
//! point where the element was grabbed.

use crate::element::ElementSnapshot;
use crate::style::{FloatingElementState, Offset};
use crate::viewport::ViewportContext;
use driftdock_core::math::Vec2;

/// Pointer coordinates carried by a drag or touch event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerInput {
    /// Client coordinates of a mouse / pen pointer.
    pub mouse: Option<Vec2>,
    /// Client coordinates of active touch points; only the first is used.
    pub touches: Vec<Vec2>,
}

impl PointerInput {
    /// Input from a mouse drag event.
    pub fn mouse(position: Vec2) -> Self {
        Self {
            mouse: Some(position),
            touches: Vec::new(),
        }
    }

    /// Input from a touch event.
    pub fn touch(touches: impl Into<Vec<Vec2>>) -> Self {
        Self {
            mouse: None,
            touches: touches.into(),
        }
    }

    /// Client position to track: the first touch point, else the mouse.
    pub fn client_position(&self) -> Option<Vec2> {
        self.touches.first().copied().or(self.mouse)
    }
}

/// Horizontal inset chosen for a drag position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalInset {
    /// Distance from the viewport's left edge.
    Left(f32),
    /// Distance from the viewport's right edge.
    Right(f32),
}

/// Position produced by one drag move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPosition {
    pub top: f32,
    pub horizontal: HorizontalInset,
}

impl DragPosition {
    /// Write the position into the widget state and raise its stacking order.
    pub fn apply(&self, state: &mut FloatingElementState, z_index: i32) {
        state.set_top(Offset::Px(self.top));
        state.set_bottom(Offset::Auto);
        match self.horizontal {
            HorizontalInset::Left(left) => {
                state.set_left(Offset::Px(left));
                state.set_right(Offset::Auto);
            }
            HorizontalInset::Right(right) => {
                state.set_right(Offset::Px(right));
                state.set_left(Offset::Auto);
            }
        }
        state.set_z_index(z_index);
    }

    /// Distance from the viewport's left edge, whichever inset is used.
    pub fn left_in(&self, viewport: &ViewportContext, element_width: f32) -> f32 {
        match self.horizontal {
            HorizontalInset::Left(left) => left,
            HorizontalInset::Right(right) => viewport.width() - right - element_width,
        }
    }
}

/// Compute the clamped position for one drag move.
///
/// The element's top-left corner moves by the offset between the pointer and
/// the element's current center (taken from the on-screen bounding box), then
/// is clamped to the viewport using the untransformed layout size. The side
/// used to express the horizontal position comes from the bounding box as it
/// was before this move. Returns `None` when the event carries no coordinates.
pub fn compute_drag_position(
    pointer: &PointerInput,
    element: &ElementSnapshot,
    viewport: &ViewportContext,
) -> Option<DragPosition> {
    let client = pointer.client_position()?;
    let rect = &element.rect;
    let layout = element.layout_size;
    let origin = rect.origin() + (client - rect.center());
    let clamped = viewport.clamp_origin(origin, layout);

    let horizontal = if viewport.is_left_half(rect) {
        HorizontalInset::Left(clamped.x)
    } else {
        HorizontalInset::Right(viewport.width() - clamped.x - layout.width)
    };

    Some(DragPosition {
        top: clamped.y,
        horizontal,
    })
}
