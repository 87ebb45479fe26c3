//! Generates `Interpolate` implementations for tuples.
//!
//! Languages without variadic generics implement a trait for tuples one arity at a
//! time. This crate writes those implementations so nobody has to: given an ordered
//! [`Alphabet`] of type parameter names and a maximum arity `N`, [`generate`] yields
//! one [`Declaration`] for every arity `2..=N`, and a [`Render`] implementation turns
//! each into source.
//!
//! Every generated implementation delegates component-wise to the implementation of
//! its element types:
//!
//! ```text
//! impl<A: Interpolate, B: Interpolate> Interpolate for (A, B) {
//!     fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Vec3) -> Self {
//!         (
//!             A::interpolate(&p0.0, &p1.0, &p2.0, weights),
//!             B::interpolate(&p0.1, &p1.1, &p2.1, weights),
//!         )
//!     }
//! }
//! ```
//!
//! Single-element tuples and leaf types (scalars, vectors) are expected to be
//! implemented by hand.
//!
//! # Build script usage
//!
//! ```no_run
//! use barycentric_codegen::{emit, Alphabet, InterpolateTarget, TokenRenderer};
//!
//! # fn main() -> barycentric_codegen::Result<()> {
//! let target = InterpolateTarget::new("crate::Interpolate", "interpolate", "crate::Weights")?;
//! let out = std::fs::File::create("tuples.rs")?;
//! emit(&Alphabet::default(), 10, &TokenRenderer::new(target), out)?;
//! # Ok(())
//! # }
//! ```
pub mod alphabet;
pub use alphabet::Alphabet;
mod declaration;
pub use declaration::{Declaration, Delegation};
pub mod error;
pub use error::{Error, Result};
pub mod render;
pub use render::{write_declarations, InterpolateTarget, Render, SourceRenderer, TokenRenderer};
mod tuple;
pub use tuple::{emit, generate, generate_all, DEFAULT_MAX_ARITY, MIN_ARITY};
#[cfg(test)]
mod proptest_config;
