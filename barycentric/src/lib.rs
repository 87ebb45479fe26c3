//! Barycentric interpolation of per-vertex attributes.
//!
//! A rasterizer shading a pixel inside a triangle blends the attributes of the three
//! vertices with the pixel's barycentric weights. [`Interpolate`] is that blend:
//!
//! ```
//! use barycentric::{glam::DVec2, Interpolate, Weights};
//!
//! let weights = Weights::new(0.5, 0.25, 0.25);
//! let uv = DVec2::interpolate(
//!     &DVec2::new(0.0, 0.0),
//!     &DVec2::new(4.0, 0.0),
//!     &DVec2::new(0.0, 4.0),
//!     &weights,
//! );
//! assert_eq!(uv, DVec2::new(1.0, 1.0));
//! ```
//!
//! # Tuples
//!
//! Vertex attributes are usually a bundle (position, normal, texture coordinates, ...).
//! `Interpolate` is implemented for tuples of up to ten elements whose element types
//! implement it, interpolating each element independently. Tuples nest, so
//! `(f64, (DVec2, DVec3))` works as well.
//!
//! ```
//! use barycentric::{glam::{DVec2, DVec3}, Interpolate, Weights};
//!
//! type Varyings = (f64, DVec2, DVec3);
//!
//! let a: Varyings = (1.0, DVec2::ZERO, DVec3::X);
//! let b: Varyings = (2.0, DVec2::ONE, DVec3::Y);
//! let c: Varyings = (4.0, DVec2::ONE, DVec3::Z);
//!
//! let (depth, uv, normal) = Interpolate::interpolate(&a, &b, &c, &Weights::new(0.5, 0.25, 0.25));
//! assert_eq!(depth, 2.0);
//! assert_eq!(uv, DVec2::splat(0.5));
//! assert_eq!(normal, DVec3::new(0.5, 0.25, 0.25));
//! ```
//!
//! The implementations for arities 2 and up are generated at build time by
//! `barycentric-codegen`.
pub use glam;

mod interpolate;
pub use interpolate::{Interpolate, Weights};
mod remap;
pub use remap::Remap;
#[cfg(test)]
mod proptest_config;
// Include tuple impls.
include!(concat!(env!("OUT_DIR"), "/tuples.rs"));
