//! Serialization of [`Declaration`]s into Rust source.
//!
//! Two renderers are provided:
//! - [`SourceRenderer`] writes formatted, human-readable source suitable for
//!   checking into a repository.
//! - [`TokenRenderer`] assembles a [`proc_macro2::TokenStream`] with `quote!` and
//!   writes it unformatted, for `include!` from a build script.
//!
//! Both produce the same token sequence for the same declaration and target.
use {
    crate::{
        declaration::Declaration,
        error::{invalid_path, invalid_symbol, Result},
    },
    proc_macro2::{Ident, Span},
    std::io::{self, Write},
    syn::{Path, PathArguments},
    tracing::debug,
};

mod source;
mod tokens;

pub use {source::SourceRenderer, tokens::TokenRenderer};

/// Text written after every declaration: two blank lines.
pub const SEPARATOR: &str = "\n\n";

/// Serializes one declaration.
pub trait Render {
    fn render(&self, declaration: &Declaration, out: &mut dyn Write) -> io::Result<()>;
}

/// Names the generated code refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterpolateTarget {
    /// Path of the interpolation trait.
    pub trait_path: Path,
    /// Name of the trait's only method.
    pub method: Ident,
    /// Path of the weight vector type.
    pub weights_ty: Path,
    /// Parameter names of the three samples.
    pub samples: [Ident; 3],
    /// Parameter name of the weight vector.
    pub weights: Ident,
}

impl InterpolateTarget {
    /// Target a trait at `trait_path` whose method `method` takes weights of type `weights_ty`.
    ///
    /// Paths must be plain (no generic arguments).
    pub fn new(trait_path: &str, method: &str, weights_ty: &str) -> Result<Self> {
        Ok(Self {
            trait_path: parse_plain_path(trait_path)?,
            method: syn::parse_str(method).map_err(|_| invalid_symbol(method))?,
            weights_ty: parse_plain_path(weights_ty)?,
            ..Self::default()
        })
    }

    pub fn trait_path_string(&self) -> String {
        path_to_string(&self.trait_path)
    }

    pub fn weights_ty_string(&self) -> String {
        path_to_string(&self.weights_ty)
    }
}

impl Default for InterpolateTarget {
    /// `Interpolate::interpolate(p0, p1, p2, weights: &Vec3)`.
    fn default() -> Self {
        let ident = |name: &str| Ident::new(name, Span::call_site());
        Self {
            trait_path: ident("Interpolate").into(),
            method: ident("interpolate"),
            weights_ty: ident("Vec3").into(),
            samples: [ident("p0"), ident("p1"), ident("p2")],
            weights: ident("weights"),
        }
    }
}

fn parse_plain_path(path: &str) -> Result<Path> {
    let parsed: Path = syn::parse_str(path).map_err(|_| invalid_path(path))?;
    if parsed
        .segments
        .iter()
        .any(|segment| !matches!(segment.arguments, PathArguments::None))
    {
        return Err(invalid_path(path));
    }
    Ok(parsed)
}

fn path_to_string(path: &Path) -> String {
    let mut out = String::new();
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
    }
    out
}

/// Render `declarations` in order, each followed by [`SEPARATOR`].
pub fn write_declarations<R, W>(
    declarations: &[Declaration],
    renderer: &R,
    mut out: W,
) -> Result<()>
where
    R: Render + ?Sized,
    W: Write,
{
    for declaration in declarations {
        debug!(arity = declaration.arity(), "rendering declaration");
        renderer.render(declaration, &mut out)?;
        out.write_all(SEPARATOR.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
