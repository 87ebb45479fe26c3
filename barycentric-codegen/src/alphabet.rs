//! Ordered symbol sets used to name tuple type parameters.
use {
    crate::error::{insufficient_alphabet, invalid_symbol, Error, Result},
    core::{fmt, str::FromStr},
    proc_macro2::{Ident, Span},
    std::collections::HashSet,
};

/// Number of capital letters available to [`Alphabet::latin`].
pub const LATIN_LEN: usize = 26;

/// Number of symbols in [`Alphabet::default`].
pub const DEFAULT_ALPHABET_LEN: usize = 10;

/// An ordered, duplicate-free list of identifiers.
///
/// Position in the list is the identity of a symbol: the declaration for arity `k`
/// always uses the first `k` symbols, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Ident>,
}

impl Alphabet {
    /// Build an alphabet from already-formed identifiers.
    pub fn new(symbols: Vec<Ident>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for symbol in &symbols {
            if !seen.insert(symbol.to_string()) {
                return Err(Error::DuplicateSymbol(symbol.to_string()));
            }
        }
        Ok(Self { symbols })
    }

    /// The first `len` capital letters, `A`, `B`, `C`, ...
    pub fn latin(len: usize) -> Result<Self> {
        if len > LATIN_LEN {
            return Err(insufficient_alphabet(len, LATIN_LEN));
        }
        Self::new(('A'..='Z').take(len).map(letter).collect())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`: construction rejects empty alphabets.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Ident] {
        &self.symbols
    }

    /// The first `len` symbols. Callers must have checked `len <= self.len()`.
    pub(crate) fn prefix(&self, len: usize) -> &[Ident] {
        &self.symbols[..len]
    }
}

impl Default for Alphabet {
    /// `A` through `J`.
    fn default() -> Self {
        Self {
            symbols: ('A'..='Z').take(DEFAULT_ALPHABET_LEN).map(letter).collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    /// Parse either a comma-separated list of identifiers (`T, U, V`) or a run of
    /// single-character symbols (`ABCDEFGHIJ`).
    ///
    /// Without a comma every character is its own symbol, so a single multi-character
    /// name needs a trailing comma (`Vertex,`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let symbols = if s.contains(',') {
            s.split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(parse_symbol)
                .collect::<Result<Vec<_>>>()?
        } else {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| parse_symbol(c.encode_utf8(&mut [0; 4])))
                .collect::<Result<Vec<_>>>()?
        };
        Self::new(symbols)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

fn letter(c: char) -> Ident {
    Ident::new(c.encode_utf8(&mut [0; 4]), Span::call_site())
}

/// Keywords and anything else `syn` refuses as an identifier are rejected here, since
/// `Ident::new` would panic on them.
fn parse_symbol(symbol: &str) -> Result<Ident> {
    syn::parse_str::<Ident>(symbol).map_err(|_| invalid_symbol(symbol))
}
