//! Drag and docking behavior configuration.

use crate::viewport::{DEFAULT_MOBILE_BREAKPOINT, ViewportClass};
use std::time::Duration;

/// Delay between docking and the half-width retract.
pub const DEFAULT_RETRACT_DELAY: Duration = Duration::from_millis(1500);

/// Stacking order forced onto the widget while it is being dragged.
pub const DEFAULT_DRAG_Z_INDEX: i32 = 9999;

/// CSS transition used whenever transitions are enabled on the widget.
pub const DEFAULT_TRANSITION: &str = "all 0.5s ease-out";

/// Page overflow value that locks scrolling during a drag.
pub const DEFAULT_SCROLL_LOCK: &str = "hidden";

/// Whether the widget stays fully visible after docking.
///
/// Either one answer for every viewport class, or a separate answer for
/// desktop and mobile viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFullSize {
    Always(bool),
    PerViewport { desktop: bool, mobile: bool },
}

impl ShowFullSize {
    /// Resolve the setting for a viewport class.
    pub fn for_class(&self, class: ViewportClass) -> bool {
        match *self {
            ShowFullSize::Always(show) => show,
            ShowFullSize::PerViewport { desktop, mobile } => match class {
                ViewportClass::Desktop => desktop,
                ViewportClass::Mobile => mobile,
            },
        }
    }
}

impl Default for ShowFullSize {
    fn default() -> Self {
        ShowFullSize::Always(false)
    }
}

impl From<bool> for ShowFullSize {
    fn from(show: bool) -> Self {
        ShowFullSize::Always(show)
    }
}

/// Options controlling drag, dock and retract behavior of one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct DragBehaviorConfig {
    /// When true every drag handler is a no-op.
    pub disable_drag_feature: bool,
    /// Whether the widget stays fully visible after docking.
    pub show_full_size: ShowFullSize,
    /// Delay before a docked widget retracts half off-screen.
    pub retract_delay: Duration,
    /// Z-index applied while dragging.
    pub drag_z_index: i32,
    /// CSS `transition` value used while transitions are enabled.
    pub transition: String,
    /// Widths strictly above this are desktop viewports.
    pub mobile_breakpoint: f32,
    /// Overflow value written to the page while a drag is active.
    pub scroll_lock_value: String,
}

impl Default for DragBehaviorConfig {
    fn default() -> Self {
        Self {
            disable_drag_feature: false,
            show_full_size: ShowFullSize::default(),
            retract_delay: DEFAULT_RETRACT_DELAY,
            drag_z_index: DEFAULT_DRAG_Z_INDEX,
            transition: DEFAULT_TRANSITION.to_string(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            scroll_lock_value: DEFAULT_SCROLL_LOCK.to_string(),
        }
    }
}

impl DragBehaviorConfig {
    /// Enable or disable all drag handling.
    pub fn disable_drag_feature(mut self, disable: bool) -> Self {
        self.disable_drag_feature = disable;
        self
    }

    /// Set whether the widget stays full size after docking.
    pub fn show_full_size(mut self, show: impl Into<ShowFullSize>) -> Self {
        self.show_full_size = show.into();
        self
    }

    /// Set the retract delay.
    pub fn retract_delay(mut self, delay: Duration) -> Self {
        self.retract_delay = delay;
        self
    }

    /// Set the z-index used while dragging.
    pub fn drag_z_index(mut self, z_index: i32) -> Self {
        self.drag_z_index = z_index;
        self
    }

    /// Set the CSS transition used when transitions are enabled.
    pub fn transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = transition.into();
        self
    }

    /// Set the desktop/mobile breakpoint in pixels.
    pub fn mobile_breakpoint(mut self, breakpoint: f32) -> Self {
        self.mobile_breakpoint = breakpoint;
        self
    }

    /// Set the page overflow value used to lock scrolling.
    pub fn scroll_lock_value(mut self, value: impl Into<String>) -> Self {
        self.scroll_lock_value = value.into();
        self
    }

    /// Whether a docked widget should retract for the given viewport class.
    ///
    /// Retraction happens unless full size display was requested for the
    /// class.
    pub fn should_retract(&self, class: ViewportClass) -> bool {
        !self.show_full_size.for_class(class)
    }
}
