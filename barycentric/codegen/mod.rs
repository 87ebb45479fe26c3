//! Codegen for the `barycentric` crate.
use {
    barycentric_codegen::{
        emit, Alphabet, InterpolateTarget, Result, TokenRenderer, DEFAULT_MAX_ARITY,
    },
    std::{
        env,
        fs::File,
        io::{BufWriter, Error},
        path::{Path, PathBuf},
    },
};

/// Generate `Interpolate` implementations for tuples of arity 2 through 10.
fn generate_tuples(out_dir: &Path) -> Result<()> {
    let out_file = File::create(out_dir.join("tuples.rs"))?;
    let target = InterpolateTarget::new("crate::Interpolate", "interpolate", "crate::Weights")?;
    emit(
        &Alphabet::default(),
        DEFAULT_MAX_ARITY,
        &TokenRenderer::new(target),
        BufWriter::new(out_file),
    )
}

pub(crate) fn generate() -> Result<()> {
    let out_dir =
        PathBuf::from(env::var_os("OUT_DIR").ok_or_else(|| Error::other("OUT_DIR not set"))?);

    generate_tuples(&out_dir)
}
