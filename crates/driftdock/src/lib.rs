//! Driftdock - a draggable floating widget that docks to the nearest
//! horizontal edge.
//!
//! The crate is render agnostic. The host reports pointer events and element
//! geometry; the widget answers with a visual state record that the
//! rendering layer applies:
//! - Clamped drag positioning where the pointer drives the widget's center
//! - Left/right docking decided by the widget's center
//! - Optional retract half off-screen after a cancellable delay
//! - Scroll lock and drag-ghost suppression scoped to each drag
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use driftdock::{
//!     DragBehaviorConfig, ElementSnapshot, FloatingWidget, NullPageHost, PointerInput,
//!     ViewportContext, WidgetProps,
//! };
//! use driftdock_core::geometry::Rect;
//! use driftdock_core::math::Vec2;
//!
//! let props = WidgetProps::new().config(DragBehaviorConfig::default());
//! let mut widget = FloatingWidget::new(props, Arc::new(NullPageHost), ());
//! let viewport = ViewportContext::from_window_size(1024.0, 768.0);
//!
//! widget.drag_start();
//! widget.drag_move(
//!     &PointerInput::mouse(Vec2::new(900.0, 300.0)),
//!     &ElementSnapshot::new(Rect::new(0.0, 0.0, 80.0, 80.0)),
//!     &viewport,
//! );
//! widget.drag_end(&ElementSnapshot::new(Rect::new(860.0, 260.0, 80.0, 80.0)), &viewport);
//!
//! // In the frame loop:
//! widget.update(Duration::from_millis(16));
//! let style = widget.render().style_attr();
//! assert!(style.contains("right: 0px;"));
//! ```

pub mod config;
pub mod dock;
pub mod element;
#[cfg(feature = "winit")]
pub mod input;
pub mod page;
pub mod position;
pub mod scale;
pub mod session;
pub mod style;
pub mod viewport;
pub mod widget;

pub use config::{DragBehaviorConfig, ShowFullSize};
pub use dock::{DockEdge, EdgeDocker, RetractTimer};
pub use element::ElementSnapshot;
#[cfg(feature = "winit")]
pub use input::{DragSignal, WinitDragInput};
pub use page::{DragImage, NullPageHost, PageHost, PageLock, Suppressors};
pub use position::{DragPosition, HorizontalInset, PointerInput, compute_drag_position};
pub use scale::{TransformParseError, TransformScale, is_scaled, parse_transform};
pub use session::{DragSession, DragSessionController, DragState};
pub use style::{FloatingElementState, Offset, StyleProps, TransformOrigin};
pub use viewport::{ViewportClass, ViewportContext};
pub use widget::{FloatingWidget, RenderedContainer, WidgetProps};
