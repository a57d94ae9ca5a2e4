//! Drag session state machine.
//!
//! Wires drag-start / move / end events to position tracking and edge
//! docking. Each widget owns one controller; nothing is shared between
//! widgets except the [`PageHost`], whose state is saved and restored per
//! session.

use crate::config::DragBehaviorConfig;
use crate::dock::{DockEdge, EdgeDocker};
use crate::element::ElementSnapshot;
use crate::page::{DragImage, PageHost, PageLock, Suppressors};
use crate::position::{PointerInput, compute_drag_position};
use crate::style::{FloatingElementState, Offset};
use crate::viewport::ViewportContext;
use driftdock_core::profiling::profile_function;
use std::sync::Arc;
use std::time::Duration;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Transient state of one drag, alive from drag-start to drag-end.
///
/// Dropping it restores the page through its [`PageLock`].
#[derive(Debug)]
pub struct DragSession {
    page_lock: PageLock,
    moves: u32,
}

impl DragSession {
    /// Overflow value the page will get back when the session ends.
    pub fn prior_overflow(&self) -> &str {
        self.page_lock.prior_overflow()
    }

    /// Number of position updates applied so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }
}

/// Drives one floating widget through drag, dock and retract.
pub struct DragSessionController {
    config: DragBehaviorConfig,
    element: FloatingElementState,
    docker: EdgeDocker,
    session: Option<DragSession>,
    page: Arc<dyn PageHost>,
}

impl DragSessionController {
    /// Create an idle controller with the default undocked state.
    pub fn new(config: DragBehaviorConfig, page: Arc<dyn PageHost>) -> Self {
        Self::with_element_state(config, page, FloatingElementState::default())
    }

    /// Create an idle controller starting from a given visual state.
    pub fn with_element_state(
        config: DragBehaviorConfig,
        page: Arc<dyn PageHost>,
        element: FloatingElementState,
    ) -> Self {
        Self {
            config,
            element,
            docker: EdgeDocker::new(),
            session: None,
            page,
        }
    }

    pub fn config(&self) -> &DragBehaviorConfig {
        &self.config
    }

    /// Replace the configuration. An active session keeps running.
    pub fn set_config(&mut self, config: DragBehaviorConfig) {
        self.config = config;
    }

    /// Current visual state of the widget.
    pub fn element_state(&self) -> &FloatingElementState {
        &self.element
    }

    pub fn docker(&self) -> &EdgeDocker {
        &self.docker
    }

    /// The active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn drag_state(&self) -> DragState {
        if self.session.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Handle a drag-start (native or touch).
    ///
    /// Cancels any pending retract, hides the drag preview, locks page
    /// scrolling and disables transitions for 1:1 tracking. A drag-start while
    /// already dragging ends the old session first and starts a fresh one.
    pub fn drag_start(&mut self) {
        profile_function!();
        if self.config.disable_drag_feature {
            return;
        }

        self.docker.cancel_retract();
        // Restore the page before saving its state again.
        self.session = None;

        self.page.set_drag_image(DragImage::Transparent1x1);
        let page_lock = PageLock::acquire(
            self.page.clone(),
            &self.config.scroll_lock_value,
            Suppressors::DRAG_OVER | Suppressors::TOUCH_MOVE,
        );
        self.element.set_transition_enabled(false);
        self.session = Some(DragSession {
            page_lock,
            moves: 0,
        });
        tracing::debug!("Drag session started");
    }

    /// Handle a drag / touch-move event.
    ///
    /// Returns `true` when the widget position was updated. Events without
    /// coordinates, events while idle and all events with dragging disabled
    /// leave the widget untouched.
    pub fn drag_move(
        &mut self,
        pointer: &PointerInput,
        element: &ElementSnapshot,
        viewport: &ViewportContext,
    ) -> bool {
        profile_function!();
        if self.config.disable_drag_feature {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(position) = compute_drag_position(pointer, element, viewport) else {
            tracing::trace!("Drag move without coordinates skipped");
            return false;
        };

        position.apply(&mut self.element, self.config.drag_z_index);
        session.moves += 1;
        tracing::trace!("Drag move {} -> {:?}", session.moves, position);
        true
    }

    /// Handle a drag-end / touch-end event.
    ///
    /// Restores the page, re-enables transitions, docks to the nearest edge
    /// and schedules the retract if it applies to the current viewport class.
    /// Returns the edge docked to, or `None` when nothing happened.
    ///
    /// A session started before dragging was disabled is still closed, so
    /// the page is restored, but the widget does not dock.
    pub fn drag_end(
        &mut self,
        element: &ElementSnapshot,
        viewport: &ViewportContext,
    ) -> Option<DockEdge> {
        profile_function!();
        let session = self.session.take()?;
        let moves = session.moves;
        drop(session);

        self.element.set_transition_enabled(true);
        if self.config.disable_drag_feature {
            tracing::debug!("Drag session closed without docking: dragging disabled");
            return None;
        }

        if !self.element.top().is_px() {
            let bounds = viewport.drag_bounds(element.layout_size);
            self.element.set_top(Offset::Px(element.rect.y.clamp(0.0, bounds.y)));
        }
        self.element.set_bottom(Offset::Auto);

        let class = viewport.viewport_class_at(self.config.mobile_breakpoint);
        let should_retract = self.config.should_retract(class);
        let edge = DockEdge::nearest(viewport, &element.rect);

        EdgeDocker::dock(&mut self.element, edge);
        self.docker
            .schedule_retract(edge, element, should_retract, self.config.retract_delay);

        tracing::debug!(
            "Drag session ended after {} moves: docked {:?} ({:?}, retract: {})",
            moves,
            edge,
            class,
            should_retract
        );
        Some(edge)
    }

    /// Abort the active drag without docking.
    ///
    /// The page is restored and transitions are re-enabled; the widget stays
    /// where the last move left it. Returns `true` if a session was active.
    pub fn cancel(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        self.element.set_transition_enabled(true);
        tracing::debug!("Drag session canceled");
        true
    }

    /// Advance the pending retract. Returns `true` if it fired.
    pub fn update(&mut self, dt: Duration) -> bool {
        self.docker.update(dt, &mut self.element)
    }
}

impl std::fmt::Debug for DragSessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSessionController")
            .field("config", &self.config)
            .field("element", &self.element)
            .field("docker", &self.docker)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::NullPageHost;
    use crate::style::TransformOrigin;
    use driftdock_core::geometry::Rect;
    use driftdock_core::math::Vec2;

    fn controller(config: DragBehaviorConfig) -> DragSessionController {
        DragSessionController::new(config, Arc::new(NullPageHost))
    }

    fn viewport() -> ViewportContext {
        ViewportContext::from_window_size(1024.0, 768.0)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let ctl = controller(DragBehaviorConfig::default());
        assert_eq!(ctl.drag_state(), DragState::Idle);
        assert_eq!(ctl.element_state(), &FloatingElementState::default());
    }

    #[test]
    fn test_drag_start_enters_dragging_and_disables_transitions() {
        let mut ctl = controller(DragBehaviorConfig::default());
        ctl.drag_start();
        assert_eq!(ctl.drag_state(), DragState::Dragging);
        assert!(!ctl.element_state().transition_enabled());
        assert_eq!(ctl.session().map(DragSession::moves), Some(0));
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut ctl = controller(DragBehaviorConfig::default());
        let moved = ctl.drag_move(
            &PointerInput::mouse(Vec2::new(300.0, 300.0)),
            &Rect::new(0.0, 0.0, 80.0, 80.0).into(),
            &viewport(),
        );
        assert!(!moved);
        assert_eq!(ctl.element_state(), &FloatingElementState::default());
    }

    #[test]
    fn test_full_drag_docks_right() {
        let mut ctl = controller(DragBehaviorConfig::default());
        let vp = viewport();
        ctl.drag_start();
        assert!(ctl.drag_move(
            &PointerInput::mouse(Vec2::new(900.0, 300.0)),
            &Rect::new(0.0, 0.0, 80.0, 80.0).into(),
            &vp,
        ));
        assert_eq!(ctl.element_state().z_index(), Some(9999));

        let edge = ctl.drag_end(&ElementSnapshot::new(Rect::new(860.0, 260.0, 80.0, 80.0)), &vp);
        assert_eq!(edge, Some(DockEdge::Right));
        let state = ctl.element_state();
        assert_eq!(state.right(), Offset::Px(0.0));
        assert_eq!(state.left(), Offset::Auto);
        assert_eq!(state.top(), Offset::Px(260.0));
        assert_eq!(state.transform_origin(), TransformOrigin::RightCenter);
        assert!(state.transition_enabled());
        assert!(state.is_anchored());
        assert!(ctl.docker().has_pending_retract());
        assert_eq!(ctl.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_drag_end_without_moves_takes_top_from_rect() {
        let mut ctl = controller(DragBehaviorConfig::default());
        ctl.drag_start();
        ctl.drag_end(&ElementSnapshot::new(Rect::new(20.0, 120.0, 80.0, 80.0)), &viewport());
        assert_eq!(ctl.element_state().top(), Offset::Px(120.0));
        assert!(ctl.element_state().is_anchored());
    }

    #[test]
    fn test_drag_end_while_idle_does_nothing() {
        let mut ctl = controller(DragBehaviorConfig::default());
        let edge = ctl.drag_end(&ElementSnapshot::new(Rect::new(0.0, 0.0, 80.0, 80.0)), &viewport());
        assert_eq!(edge, None);
        assert!(!ctl.docker().has_pending_retract());
    }

    #[test]
    fn test_disabled_feature_is_inert() {
        let mut ctl = controller(DragBehaviorConfig::default().disable_drag_feature(true));
        let vp = viewport();
        ctl.drag_start();
        assert!(!ctl.is_dragging());
        assert!(!ctl.drag_move(
            &PointerInput::mouse(Vec2::new(500.0, 500.0)),
            &Rect::new(0.0, 0.0, 80.0, 80.0).into(),
            &vp,
        ));
        assert_eq!(ctl.drag_end(&ElementSnapshot::new(Rect::new(0.0, 0.0, 80.0, 80.0)), &vp), None);
        assert_eq!(ctl.element_state(), &FloatingElementState::default());
    }

    #[test]
    fn test_disabling_mid_drag_still_closes_session() {
        let mut ctl = controller(DragBehaviorConfig::default());
        let vp = viewport();
        ctl.drag_start();
        assert!(ctl.is_dragging());

        ctl.set_config(DragBehaviorConfig::default().disable_drag_feature(true));
        let edge = ctl.drag_end(&ElementSnapshot::new(Rect::new(0.0, 100.0, 80.0, 80.0)), &vp);
        assert_eq!(edge, None);
        assert!(!ctl.is_dragging());
        assert!(ctl.element_state().transition_enabled());
        assert!(!ctl.docker().has_pending_retract());
    }

    #[test]
    fn test_cancel_restores_transitions_without_docking() {
        let mut ctl = controller(DragBehaviorConfig::default());
        ctl.drag_start();
        ctl.drag_move(
            &PointerInput::mouse(Vec2::new(200.0, 200.0)),
            &Rect::new(0.0, 0.0, 80.0, 80.0).into(),
            &viewport(),
        );
        assert!(ctl.cancel());
        assert!(!ctl.cancel());
        let state = ctl.element_state();
        assert!(state.transition_enabled());
        assert_eq!(state.left(), Offset::Px(160.0));
        assert!(!ctl.docker().has_pending_retract());
    }

    #[test]
    fn test_new_drag_cancels_pending_retract() {
        let mut ctl = controller(DragBehaviorConfig::default());
        let vp = viewport();
        ctl.drag_start();
        ctl.drag_end(&ElementSnapshot::new(Rect::new(0.0, 100.0, 80.0, 80.0)), &vp);
        assert!(!ctl.update(Duration::from_millis(1000)));

        ctl.drag_start();
        assert!(!ctl.docker().has_pending_retract());
        assert!(!ctl.update(Duration::from_secs(5)));
        assert_eq!(ctl.element_state().left(), Offset::Px(0.0));
    }
}
