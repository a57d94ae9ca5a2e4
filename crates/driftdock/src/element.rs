//! Host-measured geometry of the widget element.

use crate::scale;
use driftdock_core::geometry::{Rect, Size};

/// What the host knows about the widget element at the time of an event.
///
/// `rect` is the on-screen bounding box (after any scale transform) and
/// locates the element's center. `layout_size` is the untransformed size
/// and drives clamping, insets and the retract offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSnapshot {
    pub rect: Rect<f32>,
    pub layout_size: Size<f32>,
    pub transform: Option<String>,
}

impl ElementSnapshot {
    /// Snapshot of an untransformed element.
    pub fn new(rect: Rect<f32>) -> Self {
        Self {
            rect,
            layout_size: rect.size(),
            transform: None,
        }
    }

    /// Set the untransformed layout size.
    pub fn with_layout_size(mut self, layout_size: Size<f32>) -> Self {
        self.layout_size = layout_size;
        self
    }

    /// Attach the element's resolved transform.
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    /// Whether the element is under a non-identity scale.
    pub fn is_scaled(&self) -> bool {
        scale::is_scaled(self.transform.as_deref())
    }
}

impl From<Rect<f32>> for ElementSnapshot {
    fn from(rect: Rect<f32>) -> Self {
        Self::new(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_size_defaults_to_rect_size() {
        let snapshot = ElementSnapshot::new(Rect::new(10.0, 20.0, 80.0, 60.0));
        assert_eq!(snapshot.layout_size, Size::new(80.0, 60.0));
        assert!(!snapshot.is_scaled());
    }

    #[test]
    fn test_scaled_snapshot() {
        let snapshot = ElementSnapshot::new(Rect::new(0.0, 0.0, 80.0, 80.0))
            .with_layout_size(Size::new(100.0, 100.0))
            .with_transform("matrix(0.8, 0, 0, 0.8, 0, 0)");
        assert_eq!(snapshot.layout_size.width, 100.0);
        assert!(snapshot.is_scaled());
    }
}
