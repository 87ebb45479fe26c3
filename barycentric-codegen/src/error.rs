//! Error types and helpers.
use {std::io, thiserror::Error};

#[derive(Error, Debug)]
pub enum Error {
    #[error("max arity must be at least 2 (requested {requested})")]
    DegenerateArity { requested: usize },
    #[error(
        "alphabet has {available} symbols, not enough to name the type parameters of a \
         {requested}-ary tuple"
    )]
    InsufficientAlphabet { requested: usize, available: usize },
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("`{0}` is not a valid Rust identifier")]
    InvalidSymbol(String),
    #[error("symbol `{0}` appears more than once in the alphabet")]
    DuplicateSymbol(String),
    #[error("`{0}` is not a plain Rust path")]
    InvalidPath(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cold]
pub const fn degenerate_arity(requested: usize) -> Error {
    Error::DegenerateArity { requested }
}

#[cold]
pub const fn insufficient_alphabet(requested: usize, available: usize) -> Error {
    Error::InsufficientAlphabet {
        requested,
        available,
    }
}

#[cold]
pub fn invalid_symbol(symbol: &str) -> Error {
    Error::InvalidSymbol(symbol.to_owned())
}

#[cold]
pub fn invalid_path(path: &str) -> Error {
    Error::InvalidPath(path.to_owned())
}
