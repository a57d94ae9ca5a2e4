//! Page-level side effects of a drag session.
//!
//! A drag locks page scrolling, suppresses the page's own drag-over and
//! touch-move handling, and hides the native drag preview. These effects are
//! process-wide, so they are only ever applied through [`PageLock`], which
//! undoes them when dropped.

use bitflags::bitflags;
use std::fmt;
use std::sync::Arc;

bitflags! {
    /// Page-level default behaviors suppressed while a drag is active.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Suppressors: u8 {
        /// Prevent the page from accepting the drag as a drop target.
        const DRAG_OVER = 1 << 0;
        /// Prevent touch moves from scrolling the page.
        const TOUCH_MOVE = 1 << 1;
    }
}

impl Default for Suppressors {
    fn default() -> Self {
        Suppressors::empty()
    }
}

/// Image shown by the host under the pointer during a native drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragImage {
    /// Fully transparent 1x1 image, hiding the drag ghost.
    Transparent1x1,
}

impl DragImage {
    /// Data URL of a transparent 1x1 GIF.
    pub fn data_url(&self) -> &'static str {
        match self {
            DragImage::Transparent1x1 => {
                "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7"
            }
        }
    }
}

/// Page the widget lives in.
///
/// Methods take `&self`; implementations use interior mutability so a single
/// host can be shared by several widgets.
pub trait PageHost: Send + Sync {
    /// Current page overflow style (empty when unset).
    fn overflow(&self) -> String;

    /// Replace the page overflow style.
    fn set_overflow(&self, value: &str);

    /// Install page-level suppressors.
    fn install_suppressors(&self, suppressors: Suppressors);

    /// Remove previously installed suppressors.
    fn remove_suppressors(&self, suppressors: Suppressors);

    /// Replace the native drag preview image.
    fn set_drag_image(&self, image: DragImage);
}

/// Host with no page at all; every call is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPageHost;

impl PageHost for NullPageHost {
    fn overflow(&self) -> String {
        String::new()
    }

    fn set_overflow(&self, _value: &str) {}

    fn install_suppressors(&self, _suppressors: Suppressors) {}

    fn remove_suppressors(&self, _suppressors: Suppressors) {}

    fn set_drag_image(&self, _image: DragImage) {}
}

/// Scope guard for the page-level state of one drag session.
///
/// Creating it saves the page overflow, forces the scroll lock and installs
/// the suppressors. Dropping it removes the suppressors and restores the
/// saved overflow, whatever path ends the session.
pub struct PageLock {
    host: Arc<dyn PageHost>,
    prior_overflow: String,
    suppressors: Suppressors,
}

impl PageLock {
    pub fn acquire(host: Arc<dyn PageHost>, lock_value: &str, suppressors: Suppressors) -> Self {
        let prior_overflow = host.overflow();
        host.install_suppressors(suppressors);
        host.set_overflow(lock_value);
        tracing::trace!(
            "Page scroll locked (prior overflow {:?}, suppressors {:?})",
            prior_overflow,
            suppressors
        );
        Self {
            host,
            prior_overflow,
            suppressors,
        }
    }

    /// Overflow value that will be restored on drop.
    pub fn prior_overflow(&self) -> &str {
        &self.prior_overflow
    }
}

impl Drop for PageLock {
    fn drop(&mut self) {
        self.host.remove_suppressors(self.suppressors);
        self.host.set_overflow(&self.prior_overflow);
        tracing::trace!("Page scroll restored to {:?}", self.prior_overflow);
    }
}

impl fmt::Debug for PageLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLock")
            .field("prior_overflow", &self.prior_overflow)
            .field("suppressors", &self.suppressors)
            .finish()
    }
}
