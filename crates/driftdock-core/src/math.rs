/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Pointer coordinates, element corners and viewport sizes are all plain
/// [`Vec2`] values in CSS pixels.
///
/// # Examples
///
/// ```
/// use driftdock_core::math::Vec2;
///
/// let pointer = Vec2::new(120.0, 48.0);
/// let center = Vec2::new(100.0, 40.0);
/// assert_eq!(pointer - center, Vec2::new(20.0, 8.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
