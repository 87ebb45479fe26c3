use glam::DVec2;

/// Linear change of range: maps `a` to `new_a` and `b` to `new_b`.
///
/// Typically used to go from normalized device coordinates to pixel coordinates.
pub trait Remap {
    fn remap(self, a: Self, b: Self, new_a: Self, new_b: Self) -> Self;
}

macro_rules! impl_remap {
    ($($type:ty),* $(,)?) => {
        $(
            impl Remap for $type {
                #[inline]
                fn remap(self, a: Self, b: Self, new_a: Self, new_b: Self) -> Self {
                    new_a + (self - a) * (new_b - new_a) / (b - a)
                }
            }
        )*
    };
}

impl_remap!(f32, f64, DVec2);
