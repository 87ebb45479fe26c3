use glam::{DMat4, DVec2, DVec3, DVec4, Mat4, Vec2, Vec3, Vec4};

/// Barycentric weights of the first, second and third sample, in `x`, `y` and `z`.
///
/// Inside a triangle the weights are non-negative and sum to one, but nothing here
/// relies on that.
pub type Weights = DVec3;

/// Combine three samples of a value with barycentric weights.
///
/// Implemented by hand for scalars, `glam` vectors and matrices, and single-element
/// tuples. Tuples of two to ten elements get a generated implementation that
/// interpolates each element with its own implementation.
pub trait Interpolate {
    fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Weights) -> Self;
}

macro_rules! impl_interpolate {
    ($($type:ty),* $(,)?) => {
        $(
            impl Interpolate for $type {
                #[inline]
                fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Weights) -> Self {
                    *p0 * weights.x + *p1 * weights.y + *p2 * weights.z
                }
            }
        )*
    };
}

/// Single-precision types interpolate with the weights narrowed to `f32`.
macro_rules! impl_interpolate_f32 {
    ($($type:ty),* $(,)?) => {
        $(
            impl Interpolate for $type {
                #[inline]
                fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Weights) -> Self {
                    let weights = weights.as_vec3();
                    *p0 * weights.x + *p1 * weights.y + *p2 * weights.z
                }
            }
        )*
    };
}

impl_interpolate!(f64, DVec2, DVec3, DVec4, DMat4);
impl_interpolate_f32!(f32, Vec2, Vec3, Vec4, Mat4);

impl<A: Interpolate> Interpolate for (A,) {
    #[inline]
    fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Weights) -> Self {
        (A::interpolate(&p0.0, &p1.0, &p2.0, weights),)
    }
}
