use crate::math::Vec2;

/// Axis-aligned rectangle in viewport coordinates (origin at the top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl Rect<f32> {
    /// Build a rect from its top-left corner and size.
    pub fn from_origin_size(origin: Vec2, size: Size<f32>) -> Self {
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Copy of this rect moved so its top-left corner sits at `origin`.
    pub fn with_origin(&self, origin: Vec2) -> Self {
        Rect::from_origin_size(origin, self.size())
    }
}
