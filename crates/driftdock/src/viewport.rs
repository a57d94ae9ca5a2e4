//! Viewport geometry for dragging and docking.
//!
//! Answers which horizontal half an element occupies, how far it may be
//! dragged, and whether the viewport counts as desktop or mobile.

use driftdock_core::geometry::{Rect, Size};
use driftdock_core::math::Vec2;

/// Viewports wider than this many pixels are [`ViewportClass::Desktop`].
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// Coarse viewport classification used to pick per-device behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

/// Viewport dimensions in CSS pixels.
///
/// # Examples
/// ```
/// use driftdock::viewport::{ViewportClass, ViewportContext};
/// use driftdock_core::geometry::Rect;
///
/// let ctx = ViewportContext::from_window_size(1024.0, 768.0);
/// assert!(ctx.is_left_half(&Rect::new(0.0, 0.0, 80.0, 80.0)));
/// assert_eq!(ctx.viewport_class(), ViewportClass::Desktop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportContext {
    /// Viewport dimensions (width, height) in pixels
    viewport_size: Vec2,
}

impl ViewportContext {
    /// Create a new viewport context.
    pub fn new(viewport_size: Vec2) -> Self {
        Self { viewport_size }
    }

    /// Create a viewport context from window dimensions.
    pub fn from_window_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::new(width, height))
    }

    /// Get the viewport size.
    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    /// Get the viewport width.
    pub fn width(&self) -> f32 {
        self.viewport_size.x
    }

    /// Get the viewport height.
    pub fn height(&self) -> f32 {
        self.viewport_size.y
    }

    /// Horizontal midpoint of the viewport.
    pub fn center_x(&self) -> f32 {
        self.viewport_size.x / 2.0
    }

    /// True iff the element's horizontal center lies left of the viewport midpoint.
    pub fn is_left_half(&self, rect: &Rect<f32>) -> bool {
        rect.center().x < self.center_x()
    }

    /// Classify the viewport using the default 768 px breakpoint.
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class_at(DEFAULT_MOBILE_BREAKPOINT)
    }

    /// Classify the viewport: wider than `breakpoint` is desktop.
    pub fn viewport_class_at(&self, breakpoint: f32) -> ViewportClass {
        if self.width() > breakpoint {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }

    /// Largest `left`/`top` an element of `size` may take while staying on screen.
    ///
    /// Floored at zero when the element is larger than the viewport.
    pub fn drag_bounds(&self, size: Size<f32>) -> Vec2 {
        Vec2::new(
            (self.width() - size.width).max(0.0),
            (self.height() - size.height).max(0.0),
        )
    }

    /// Clamp a candidate top-left corner into the free-drag bounds.
    pub fn clamp_origin(&self, origin: Vec2, size: Size<f32>) -> Vec2 {
        origin.clamp(Vec2::ZERO, self.drag_bounds(size))
    }
}

impl Default for ViewportContext {
    /// Default viewport context with 1280x720 dimensions.
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}
