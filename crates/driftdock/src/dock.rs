//! Edge docking and the delayed half-width retract.

use crate::element::ElementSnapshot;
use crate::style::{FloatingElementState, Offset, TransformOrigin};
use crate::viewport::ViewportContext;
use driftdock_core::geometry::Rect;
use std::time::Duration;

/// Horizontal edge a widget docks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockEdge {
    Left,
    Right,
}

impl DockEdge {
    /// Edge nearest to the element's horizontal center.
    pub fn nearest(viewport: &ViewportContext, rect: &Rect<f32>) -> Self {
        if viewport.is_left_half(rect) {
            DockEdge::Left
        } else {
            DockEdge::Right
        }
    }

    /// Transform origin that keeps scaling anchored to this edge.
    pub fn transform_origin(&self) -> TransformOrigin {
        match self {
            DockEdge::Left => TransformOrigin::LeftCenter,
            DockEdge::Right => TransformOrigin::RightCenter,
        }
    }

    /// Set the inset for this edge to `value` and release the opposite one.
    fn set_inset(&self, state: &mut FloatingElementState, value: f32) {
        match self {
            DockEdge::Left => {
                state.set_left(Offset::Px(value));
                state.set_right(Offset::Auto);
            }
            DockEdge::Right => {
                state.set_right(Offset::Px(value));
                state.set_left(Offset::Auto);
            }
        }
    }
}

/// Pending retract of a docked widget.
///
/// Counts down with [`update`](Self::update); once elapsed the owner applies
/// it exactly once and drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct RetractTimer {
    /// Time left before the retract fires.
    remaining: Duration,
    /// Edge the widget is docked against.
    edge: DockEdge,
    /// Inset applied on fire (negative half width).
    offset: f32,
    /// Transform origin applied on fire.
    origin: TransformOrigin,
}

impl RetractTimer {
    /// Timer that retracts an element of `width` past `edge` after `delay`.
    ///
    /// A scaled element keeps a centered transform origin so the scale does not
    /// pull it further off-screen.
    pub fn new(delay: Duration, edge: DockEdge, width: f32, scaled: bool) -> Self {
        Self {
            remaining: delay,
            edge,
            offset: -width / 2.0,
            origin: if scaled {
                TransformOrigin::Center
            } else {
                edge.transform_origin()
            },
        }
    }

    /// Advance the countdown.
    pub fn update(&mut self, dt: Duration) {
        self.remaining = self.remaining.saturating_sub(dt);
    }

    /// Check if the delay has elapsed.
    pub fn is_done(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn edge(&self) -> DockEdge {
        self.edge
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn origin(&self) -> TransformOrigin {
        self.origin
    }

    /// Slide the widget half past its docked edge.
    pub fn apply(&self, state: &mut FloatingElementState) {
        state.set_transition_enabled(true);
        self.edge.set_inset(state, self.offset);
        state.set_transform_origin(self.origin);
    }
}

/// Docks the widget to an edge and owns its single pending retract.
#[derive(Debug, Default)]
pub struct EdgeDocker {
    pending: Option<RetractTimer>,
}

impl EdgeDocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the widget flush against `edge`. Idempotent.
    pub fn dock(state: &mut FloatingElementState, edge: DockEdge) {
        edge.set_inset(state, 0.0);
        state.set_transform_origin(edge.transform_origin());
    }

    /// Schedule the half-width retract for a widget docked on `edge`.
    ///
    /// Does nothing when `should_retract` is false. Otherwise any pending
    /// retract is replaced, so a stale timer can never fire.
    pub fn schedule_retract(
        &mut self,
        edge: DockEdge,
        element: &ElementSnapshot,
        should_retract: bool,
        delay: Duration,
    ) {
        if !should_retract {
            return;
        }
        let timer = RetractTimer::new(
            delay,
            edge,
            element.layout_size.width,
            element.is_scaled(),
        );
        tracing::trace!("Retract scheduled in {:?} toward {:?}", delay, edge);
        self.pending = Some(timer);
    }

    /// Cancel the pending retract. Returns `true` if one was pending.
    pub fn cancel_retract(&mut self) -> bool {
        let canceled = self.pending.take().is_some();
        if canceled {
            tracing::trace!("Pending retract canceled");
        }
        canceled
    }

    /// The pending retract, if any.
    pub fn pending(&self) -> Option<&RetractTimer> {
        self.pending.as_ref()
    }

    /// Check if a retract is pending.
    pub fn has_pending_retract(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance the pending retract and apply it once elapsed.
    ///
    /// Returns `true` if the retract fired during this update.
    pub fn update(&mut self, dt: Duration, state: &mut FloatingElementState) -> bool {
        let Some(timer) = self.pending.as_mut() else {
            return false;
        };
        timer.update(dt);
        if !timer.is_done() {
            return false;
        }
        if let Some(timer) = self.pending.take() {
            timer.apply(state);
            tracing::debug!("Widget retracted past {:?} edge by {}px", timer.edge, -timer.offset);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftdock_core::geometry::Size;

    const DELAY: Duration = Duration::from_millis(1500);

    fn snapshot(width: f32) -> ElementSnapshot {
        ElementSnapshot::new(Rect::new(0.0, 100.0, width, 80.0))
    }

    #[test]
    fn test_dock_left() {
        let mut state = FloatingElementState::new();
        state.set_right(Offset::Px(30.0));
        EdgeDocker::dock(&mut state, DockEdge::Left);
        assert_eq!(state.left(), Offset::Px(0.0));
        assert_eq!(state.right(), Offset::Auto);
        assert_eq!(state.transform_origin(), TransformOrigin::LeftCenter);
    }

    #[test]
    fn test_dock_right() {
        let mut state = FloatingElementState::new();
        state.set_left(Offset::Px(30.0));
        EdgeDocker::dock(&mut state, DockEdge::Right);
        assert_eq!(state.right(), Offset::Px(0.0));
        assert_eq!(state.left(), Offset::Auto);
        assert_eq!(state.transform_origin(), TransformOrigin::RightCenter);
    }

    #[test]
    fn test_dock_is_idempotent() {
        let mut once = FloatingElementState::new();
        once.set_top(Offset::Px(50.0));
        EdgeDocker::dock(&mut once, DockEdge::Right);
        let mut twice = once.clone();
        EdgeDocker::dock(&mut twice, DockEdge::Right);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nearest_edge() {
        let vp = ViewportContext::from_window_size(1024.0, 768.0);
        assert_eq!(DockEdge::nearest(&vp, &Rect::new(10.0, 0.0, 80.0, 80.0)), DockEdge::Left);
        assert_eq!(DockEdge::nearest(&vp, &Rect::new(900.0, 0.0, 80.0, 80.0)), DockEdge::Right);
    }

    #[test]
    fn test_no_retract_when_not_requested() {
        let mut docker = EdgeDocker::new();
        docker.schedule_retract(DockEdge::Left, &snapshot(80.0), false, DELAY);
        assert!(!docker.has_pending_retract());
    }

    #[test]
    fn test_retract_fires_after_delay() {
        let mut docker = EdgeDocker::new();
        let mut state = FloatingElementState::new();
        EdgeDocker::dock(&mut state, DockEdge::Left);
        state.set_transition_enabled(false);
        docker.schedule_retract(DockEdge::Left, &snapshot(80.0), true, DELAY);

        assert!(!docker.update(Duration::from_millis(1499), &mut state));
        assert_eq!(state.left(), Offset::Px(0.0));

        assert!(docker.update(Duration::from_millis(1), &mut state));
        assert_eq!(state.left(), Offset::Px(-40.0));
        assert_eq!(state.right(), Offset::Auto);
        assert!(state.transition_enabled());
        assert_eq!(state.transform_origin(), TransformOrigin::LeftCenter);
        assert!(!docker.has_pending_retract());

        // Fires only once.
        assert!(!docker.update(DELAY, &mut state));
    }

    #[test]
    fn test_retract_right_edge_scaled_keeps_center_origin() {
        let mut docker = EdgeDocker::new();
        let mut state = FloatingElementState::new();
        EdgeDocker::dock(&mut state, DockEdge::Right);
        let element = snapshot(120.0).with_transform("matrix(0.8, 0, 0, 0.8, 0, 0)");
        docker.schedule_retract(DockEdge::Right, &element, true, DELAY);

        assert!(docker.update(DELAY, &mut state));
        assert_eq!(state.right(), Offset::Px(-60.0));
        assert_eq!(state.left(), Offset::Auto);
        assert_eq!(state.transform_origin(), TransformOrigin::Center);
    }

    #[test]
    fn test_retract_offset_uses_layout_width_not_scaled_box() {
        let mut docker = EdgeDocker::new();
        let mut state = FloatingElementState::new();
        EdgeDocker::dock(&mut state, DockEdge::Right);
        // 100px element rendered at 80px under scale(0.8).
        let element = ElementSnapshot::new(Rect::new(934.0, 100.0, 80.0, 80.0))
            .with_layout_size(Size::new(100.0, 100.0))
            .with_transform("matrix(0.8, 0, 0, 0.8, 0, 0)");
        docker.schedule_retract(DockEdge::Right, &element, true, DELAY);

        assert!(docker.update(DELAY, &mut state));
        assert_eq!(state.right(), Offset::Px(-50.0));
        assert_eq!(state.transform_origin(), TransformOrigin::Center);
    }

    #[test]
    fn test_retract_malformed_transform_matches_edge_origin() {
        let mut docker = EdgeDocker::new();
        let mut state = FloatingElementState::new();
        let element = snapshot(80.0).with_transform("matrix(oops)");
        docker.schedule_retract(DockEdge::Right, &element, true, DELAY);
        assert!(docker.update(DELAY, &mut state));
        assert_eq!(state.transform_origin(), TransformOrigin::RightCenter);
    }

    #[test]
    fn test_canceled_retract_never_fires() {
        let mut docker = EdgeDocker::new();
        let mut state = FloatingElementState::new();
        EdgeDocker::dock(&mut state, DockEdge::Left);
        let before = state.clone();
        docker.schedule_retract(DockEdge::Left, &snapshot(80.0), true, DELAY);

        assert!(docker.cancel_retract());
        assert!(!docker.cancel_retract());
        assert!(!docker.update(Duration::from_secs(10), &mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rescheduling_replaces_pending_timer() {
        let mut docker = EdgeDocker::new();
        let mut state = FloatingElementState::new();
        docker.schedule_retract(DockEdge::Left, &snapshot(80.0), true, DELAY);
        assert!(!docker.update(Duration::from_millis(1000), &mut state));

        // A new dock restarts the countdown on the new edge.
        docker.schedule_retract(DockEdge::Right, &snapshot(100.0), true, DELAY);
        assert!(!docker.update(Duration::from_millis(1000), &mut state));
        assert_eq!(state.left(), Offset::Auto);

        assert!(docker.update(Duration::from_millis(500), &mut state));
        assert_eq!(state.right(), Offset::Px(-50.0));
        assert_eq!(state.left(), Offset::Auto);
    }
}
