//! The floating widget component surface.
//!
//! Bundles the caller-facing props with a [`DragSessionController`] and
//! produces what the rendering layer needs: a class list, a merged inline
//! style and the children to draw inside the container.

use crate::config::DragBehaviorConfig;
use crate::dock::DockEdge;
use crate::element::ElementSnapshot;
use crate::page::PageHost;
use crate::position::PointerInput;
use crate::session::DragSessionController;
use crate::style::{self, FloatingElementState};
use crate::viewport::ViewportContext;
use indexmap::IndexMap;
use std::sync::Arc;
use std::time::Duration;

/// Class always present on the widget container.
pub const CONTAINER_CLASS: &str = "driftdock-container";

/// Caller-supplied options for a floating widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetProps {
    /// Extra CSS class for the container.
    pub custom_class: Option<String>,
    /// Inline style merged under the widget's own positioning style.
    pub container_style: IndexMap<String, String>,
    pub config: DragBehaviorConfig,
}

impl WidgetProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extra container class.
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Add one inline style declaration to the container.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.container_style.insert(property.into(), value.into());
        self
    }

    /// Set the drag behavior configuration.
    pub fn config(mut self, config: DragBehaviorConfig) -> Self {
        self.config = config;
        self
    }
}

/// Render output for one frame of the widget.
#[derive(Debug)]
pub struct RenderedContainer<'a, C> {
    pub classes: Vec<&'a str>,
    pub style: IndexMap<String, String>,
    pub children: &'a C,
}

impl<C> RenderedContainer<'_, C> {
    /// Space separated class attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Inline style attribute.
    pub fn style_attr(&self) -> String {
        style::to_css(self.style.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

/// A draggable, edge-docking container around `children`.
pub struct FloatingWidget<C = ()> {
    custom_class: Option<String>,
    container_style: IndexMap<String, String>,
    controller: DragSessionController,
    children: C,
}

impl<C> FloatingWidget<C> {
    pub fn new(props: WidgetProps, page: Arc<dyn PageHost>, children: C) -> Self {
        let WidgetProps {
            custom_class,
            container_style,
            config,
        } = props;
        Self {
            custom_class,
            container_style,
            controller: DragSessionController::new(config, page),
            children,
        }
    }

    pub fn controller(&self) -> &DragSessionController {
        &self.controller
    }

    pub fn element_state(&self) -> &FloatingElementState {
        self.controller.element_state()
    }

    pub fn children(&self) -> &C {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut C {
        &mut self.children
    }

    pub fn drag_start(&mut self) {
        self.controller.drag_start();
    }

    pub fn drag_move(
        &mut self,
        pointer: &PointerInput,
        element: &ElementSnapshot,
        viewport: &ViewportContext,
    ) -> bool {
        self.controller.drag_move(pointer, element, viewport)
    }

    pub fn drag_end(
        &mut self,
        element: &ElementSnapshot,
        viewport: &ViewportContext,
    ) -> Option<DockEdge> {
        self.controller.drag_end(element, viewport)
    }

    pub fn cancel(&mut self) -> bool {
        self.controller.cancel()
    }

    /// Advance timers; returns `true` if the widget retracted.
    pub fn update(&mut self, dt: Duration) -> bool {
        self.controller.update(dt)
    }

    /// Produce the container's class list, merged style and children.
    ///
    /// Only properties the widget has positioned itself are emitted; they
    /// override the same property in the container style. Until the first
    /// drag the container style alone places the widget.
    pub fn render(&self) -> RenderedContainer<'_, C> {
        let mut classes = vec![CONTAINER_CLASS];
        if let Some(class) = self.custom_class.as_deref().filter(|c| !c.is_empty()) {
            classes.push(class);
        }

        let mut style = self.container_style.clone();
        let state = self.controller.element_state();
        for (property, value) in state.declarations(&self.controller.config().transition) {
            style.insert(property.to_string(), value);
        }

        RenderedContainer {
            classes,
            style,
            children: &self.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::NullPageHost;
    use driftdock_core::geometry::Rect;
    use driftdock_core::math::Vec2;

    #[test]
    fn test_render_merges_container_style() {
        let props = WidgetProps::new()
            .custom_class("chat-bubble")
            .style("position", "fixed")
            .style("top", "40px");
        let widget = FloatingWidget::new(props, Arc::new(NullPageHost), "content");

        let rendered = widget.render();
        assert_eq!(rendered.class_attr(), "driftdock-container chat-bubble");
        assert_eq!(rendered.style["position"], "fixed");
        assert_eq!(rendered.style["top"], "40px");
        assert_eq!(rendered.style.get_index(0).map(|(k, _)| k.as_str()), Some("position"));
        assert_eq!(*rendered.children, "content");
        assert_eq!(rendered.style_attr(), "position: fixed; top: 40px;");
    }

    #[test]
    fn test_mount_keeps_caller_placement_until_dragged() {
        let props = WidgetProps::new()
            .style("position", "fixed")
            .style("bottom", "24px")
            .style("right", "24px")
            .style("transition", "transform 0.2s")
            .style("transform-origin", "bottom right");
        let mut widget = FloatingWidget::new(props, Arc::new(NullPageHost), ());

        let rendered = widget.render();
        assert_eq!(rendered.style["bottom"], "24px");
        assert_eq!(rendered.style["right"], "24px");
        assert_eq!(rendered.style["transition"], "transform 0.2s");
        assert_eq!(rendered.style["transform-origin"], "bottom right");
        assert!(!rendered.style.contains_key("top"));
        assert!(!rendered.style.contains_key("left"));
        assert!(!rendered.style.contains_key("z-index"));

        let vp = ViewportContext::from_window_size(1024.0, 768.0);
        widget.drag_start();
        assert!(widget.drag_move(
            &PointerInput::mouse(Vec2::new(900.0, 300.0)),
            &Rect::new(0.0, 0.0, 80.0, 80.0).into(),
            &vp,
        ));
        let rendered = widget.render();
        assert_eq!(rendered.style["top"], "260px");
        assert_eq!(rendered.style["left"], "860px");
        assert_eq!(rendered.style["right"], "auto");
        assert_eq!(rendered.style["bottom"], "auto");
        assert_eq!(rendered.style["transition"], "none");
        // Not touched by a move, so the caller's origin survives.
        assert_eq!(rendered.style["transform-origin"], "bottom right");
    }

    #[test]
    fn test_render_without_custom_class() {
        let widget = FloatingWidget::new(WidgetProps::new(), Arc::new(NullPageHost), ());
        assert_eq!(widget.render().classes, vec![CONTAINER_CLASS]);
    }
}
