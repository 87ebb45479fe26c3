use proc_macro2::Ident;

/// One generated implementation block: `Interpolate` for the tuple of [`Self::arity`]
/// type parameters.
///
/// The type parameters, the tuple fields and the delegation calls in the body all
/// follow the same order, so only the symbols themselves are stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    symbols: Vec<Ident>,
}

/// A single line of a declaration's body: `symbol::interpolate(&p0.index, &p1.index, &p2.index, weights)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delegation<'a> {
    pub symbol: &'a Ident,
    pub index: usize,
}

impl Declaration {
    pub(crate) fn new(symbols: &[Ident]) -> Self {
        Self {
            symbols: symbols.to_vec(),
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.symbols.len()
    }

    /// Generic parameters of the `impl`, each bounded by the interpolation trait.
    #[inline]
    pub fn type_parameters(&self) -> &[Ident] {
        &self.symbols
    }

    /// Element types of the tuple the declaration implements the trait for.
    #[inline]
    pub fn composite(&self) -> &[Ident] {
        &self.symbols
    }

    pub fn delegations(&self) -> impl ExactSizeIterator<Item = Delegation<'_>> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| Delegation { symbol, index })
    }
}
