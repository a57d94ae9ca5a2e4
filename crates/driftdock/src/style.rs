//! Visual state of the floating widget and its inline style rendering.

use bitflags::bitflags;
use indexmap::IndexMap;
use std::fmt;

/// One inset of the widget: a pixel offset or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Offset {
    /// Fixed pixel value
    Px(f32),
    /// Left to the layout engine
    #[default]
    Auto,
}

impl Offset {
    /// Create a pixel offset.
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    /// Check if this is a fixed pixel value.
    pub fn is_px(&self) -> bool {
        matches!(self, Offset::Px(_))
    }

    /// Check if this is auto.
    pub fn is_auto(&self) -> bool {
        matches!(self, Offset::Auto)
    }

    /// Pixel value, if any.
    pub fn as_px(&self) -> Option<f32> {
        match *self {
            Offset::Px(v) => Some(v),
            Offset::Auto => None,
        }
    }
}

impl From<f32> for Offset {
    fn from(value: f32) -> Self {
        Offset::Px(value)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Px(v) => write!(f, "{}px", v),
            Offset::Auto => write!(f, "auto"),
        }
    }
}

/// Anchor point for scale transforms applied to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformOrigin {
    LeftCenter,
    RightCenter,
    #[default]
    Center,
}

impl TransformOrigin {
    pub fn as_css(&self) -> &'static str {
        match self {
            TransformOrigin::LeftCenter => "left center",
            TransformOrigin::RightCenter => "right center",
            TransformOrigin::Center => "center center",
        }
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

bitflags! {
    /// Style properties the widget has written at least once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleProps: u8 {
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const Z_INDEX = 1 << 4;
        const TRANSITION = 1 << 5;
        const TRANSFORM_ORIGIN = 1 << 6;
    }
}

/// Mutable visual state of one floating widget.
///
/// Only properties written through a setter are rendered, so the caller's
/// container style stays in force until the first drag or dock touches it.
/// After a drag or dock completes exactly one of `left`/`right` holds a pixel
/// value, `top` holds a pixel value and `bottom` stays `auto`.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingElementState {
    top: Offset,
    left: Offset,
    right: Offset,
    bottom: Offset,
    z_index: Option<i32>,
    transform_origin: TransformOrigin,
    transition_enabled: bool,
    touched: StyleProps,
}

impl Default for FloatingElementState {
    fn default() -> Self {
        Self {
            top: Offset::Auto,
            left: Offset::Auto,
            right: Offset::Auto,
            bottom: Offset::Auto,
            z_index: None,
            transform_origin: TransformOrigin::default(),
            transition_enabled: true,
            touched: StyleProps::empty(),
        }
    }
}

impl FloatingElementState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top(&self) -> Offset {
        self.top
    }

    pub fn left(&self) -> Offset {
        self.left
    }

    pub fn right(&self) -> Offset {
        self.right
    }

    pub fn bottom(&self) -> Offset {
        self.bottom
    }

    pub fn z_index(&self) -> Option<i32> {
        self.z_index
    }

    pub fn transform_origin(&self) -> TransformOrigin {
        self.transform_origin
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Properties written so far.
    pub fn touched(&self) -> StyleProps {
        self.touched
    }

    pub fn set_top(&mut self, top: Offset) {
        self.top = top;
        self.touched |= StyleProps::TOP;
    }

    pub fn set_left(&mut self, left: Offset) {
        self.left = left;
        self.touched |= StyleProps::LEFT;
    }

    pub fn set_right(&mut self, right: Offset) {
        self.right = right;
        self.touched |= StyleProps::RIGHT;
    }

    pub fn set_bottom(&mut self, bottom: Offset) {
        self.bottom = bottom;
        self.touched |= StyleProps::BOTTOM;
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        self.z_index = Some(z_index);
        self.touched |= StyleProps::Z_INDEX;
    }

    pub fn set_transform_origin(&mut self, origin: TransformOrigin) {
        self.transform_origin = origin;
        self.touched |= StyleProps::TRANSFORM_ORIGIN;
    }

    pub fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition_enabled = enabled;
        self.touched |= StyleProps::TRANSITION;
    }

    /// True when exactly one horizontal inset is pixel valued and the
    /// vertical position is carried by `top` alone.
    pub fn is_anchored(&self) -> bool {
        self.left.is_px() != self.right.is_px() && self.top.is_px() && self.bottom.is_auto()
    }

    /// Ordered CSS declarations for the properties written so far.
    ///
    /// `transition` is the value written while transitions are enabled;
    /// otherwise `none` is emitted.
    pub fn declarations(&self, transition: &str) -> IndexMap<&'static str, String> {
        let mut decls = IndexMap::new();
        let insets = [
            (StyleProps::TOP, "top", self.top),
            (StyleProps::LEFT, "left", self.left),
            (StyleProps::RIGHT, "right", self.right),
            (StyleProps::BOTTOM, "bottom", self.bottom),
        ];
        for (prop, name, value) in insets {
            if self.touched.contains(prop) {
                decls.insert(name, value.to_string());
            }
        }
        if let Some(z) = self.z_index.filter(|_| self.touched.contains(StyleProps::Z_INDEX)) {
            decls.insert("z-index", z.to_string());
        }
        if self.touched.contains(StyleProps::TRANSITION) {
            let transition = if self.transition_enabled {
                transition.to_string()
            } else {
                "none".to_string()
            };
            decls.insert("transition", transition);
        }
        if self.touched.contains(StyleProps::TRANSFORM_ORIGIN) {
            decls.insert("transform-origin", self.transform_origin.to_string());
        }
        decls
    }

    /// Render the state as an inline style string.
    pub fn to_css(&self, transition: &str) -> String {
        to_css(self.declarations(transition).iter().map(|(k, v)| (*k, v.as_str())))
    }
}

/// Join `property: value` pairs into an inline style string.
pub fn to_css<'a>(declarations: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    declarations
        .into_iter()
        .map(|(property, value)| format!("{}: {};", property, value))
        .collect::<Vec<_>>()
        .join(" ")
}
