//! Test utilities for driftdock.
//!
//! [`RecordingPageHost`] stands in for a real page: it keeps an overflow
//! value and the set of installed suppressors, and records every call made
//! through the [`PageHost`] trait so tests can assert on ordering and
//! restore discipline.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use driftdock::{DragBehaviorConfig, DragSessionController};
//! use driftdock_test_utils::RecordingPageHost;
//!
//! let page = Arc::new(RecordingPageHost::with_overflow("auto"));
//! let mut controller = DragSessionController::new(DragBehaviorConfig::default(), page.clone());
//!
//! controller.drag_start();
//! assert_eq!(page.current_overflow(), "hidden");
//! assert!(controller.cancel());
//! assert_eq!(page.current_overflow(), "auto");
//! ```

use driftdock::{DragImage, PageHost, Suppressors};
use parking_lot::Mutex;

/// Records a page-level call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCall {
    ReadOverflow,
    SetOverflow(String),
    InstallSuppressors(Suppressors),
    RemoveSuppressors(Suppressors),
    SetDragImage(DragImage),
}

/// In-memory page that records every call.
#[derive(Debug, Default)]
pub struct RecordingPageHost {
    calls: Mutex<Vec<PageCall>>,
    overflow: Mutex<String>,
    installed: Mutex<Suppressors>,
}

impl RecordingPageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose overflow style starts at `overflow`.
    pub fn with_overflow(overflow: &str) -> Self {
        let host = Self::default();
        *host.overflow.lock() = overflow.to_string();
        host
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.lock().clone()
    }

    /// Forget recorded calls, keeping page state.
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Overflow value as the page currently has it.
    pub fn current_overflow(&self) -> String {
        self.overflow.lock().clone()
    }

    /// Suppressors currently installed.
    pub fn installed_suppressors(&self) -> Suppressors {
        *self.installed.lock()
    }

    pub fn count_drag_images(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, PageCall::SetDragImage(_)))
            .count()
    }

    pub fn count_installs(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, PageCall::InstallSuppressors(_)))
            .count()
    }

    pub fn count_removals(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, PageCall::RemoveSuppressors(_)))
            .count()
    }

    fn record(&self, call: PageCall) {
        self.calls.lock().push(call);
    }
}

impl PageHost for RecordingPageHost {
    fn overflow(&self) -> String {
        self.record(PageCall::ReadOverflow);
        self.overflow.lock().clone()
    }

    fn set_overflow(&self, value: &str) {
        self.record(PageCall::SetOverflow(value.to_string()));
        *self.overflow.lock() = value.to_string();
    }

    fn install_suppressors(&self, suppressors: Suppressors) {
        self.record(PageCall::InstallSuppressors(suppressors));
        self.installed.lock().insert(suppressors);
    }

    fn remove_suppressors(&self, suppressors: Suppressors) {
        self.record(PageCall::RemoveSuppressors(suppressors));
        self.installed.lock().remove(suppressors);
    }

    fn set_drag_image(&self, image: DragImage) {
        self.record(PageCall::SetDragImage(image));
    }
}
