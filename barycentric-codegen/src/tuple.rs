//! Arity expansion: one [`Declaration`] per tuple arity.
use {
    crate::{
        alphabet::{Alphabet, DEFAULT_ALPHABET_LEN},
        declaration::Declaration,
        error::{degenerate_arity, insufficient_alphabet, Result},
        render::{write_declarations, Render},
    },
    std::io::Write,
    tracing::{debug, info},
};

/// Smallest arity that gets a generated implementation. Single-element tuples are
/// implemented by hand.
pub const MIN_ARITY: usize = 2;

/// Largest arity generated for the `barycentric` crate: one per symbol of the
/// default alphabet.
pub const DEFAULT_MAX_ARITY: usize = DEFAULT_ALPHABET_LEN;

/// Produce declarations for tuples of arity `2..=max_arity`, in increasing order.
///
/// The declaration for arity `k` is built from the first `k` symbols of `alphabet`.
/// Fails before producing anything if `max_arity < 2` or if the alphabet is too short
/// to name `max_arity` type parameters.
pub fn generate(alphabet: &Alphabet, max_arity: usize) -> Result<Vec<Declaration>> {
    if max_arity < MIN_ARITY {
        return Err(degenerate_arity(max_arity));
    }
    if max_arity > alphabet.len() {
        return Err(insufficient_alphabet(max_arity, alphabet.len()));
    }

    Ok((MIN_ARITY..=max_arity)
        .map(|arity| Declaration::new(alphabet.prefix(arity)))
        .collect())
}

/// [`generate`] up to the full length of `alphabet`.
pub fn generate_all(alphabet: &Alphabet) -> Result<Vec<Declaration>> {
    generate(alphabet, alphabet.len())
}

/// Generate and render declarations for arities `2..=max_arity` into `out`.
///
/// Nothing is written if validation fails.
pub fn emit<R, W>(alphabet: &Alphabet, max_arity: usize, renderer: &R, out: W) -> Result<()>
where
    R: Render + ?Sized,
    W: Write,
{
    let declarations = generate(alphabet, max_arity)?;
    debug!(
        count = declarations.len(),
        %alphabet,
        max_arity,
        "generated declarations"
    );
    write_declarations(&declarations, renderer, out)?;
    info!(max_arity, "emitted tuple implementations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{error::Error, proptest_config::proptest_cfg, render::SourceRenderer},
        proc_macro2::Ident,
        proptest::prelude::*,
    };

    fn names(symbols: &[Ident]) -> Vec<String> {
        symbols.iter().map(Ident::to_string).collect()
    }

    #[test]
    fn abc_yields_pair_and_triple() {
        let alphabet: Alphabet = "ABC".parse().unwrap();
        let decls = generate(&alphabet, 3).unwrap();
        assert_eq!(decls.len(), 2);

        assert_eq!(decls[0].arity(), 2);
        assert_eq!(names(decls[0].type_parameters()), ["A", "B"]);
        let pair: Vec<_> = decls[0]
            .delegations()
            .map(|d| (d.symbol.to_string(), d.index))
            .collect();
        assert_eq!(pair, [("A".to_owned(), 0), ("B".to_owned(), 1)]);

        assert_eq!(decls[1].arity(), 3);
        assert_eq!(names(decls[1].composite()), ["A", "B", "C"]);
        let triple: Vec<_> = decls[1]
            .delegations()
            .map(|d| (d.symbol.to_string(), d.index))
            .collect();
        assert_eq!(
            triple,
            [
                ("A".to_owned(), 0),
                ("B".to_owned(), 1),
                ("C".to_owned(), 2)
            ]
        );
    }

    #[test]
    fn minimum_arity_yields_single_pair() {
        let decls = generate(&Alphabet::default(), 2).unwrap();
        assert_eq!(decls.len(), 1);
        assert_eq!(names(decls[0].type_parameters()), ["A", "B"]);
        assert_eq!(decls[0].delegations().len(), 2);
    }

    #[test]
    fn default_alphabet_covers_two_through_ten() {
        assert_eq!(DEFAULT_MAX_ARITY, 10);
        assert_eq!(Alphabet::default().len(), DEFAULT_MAX_ARITY);
        let decls = generate_all(&Alphabet::default()).unwrap();
        let arities: Vec<_> = decls.iter().map(Declaration::arity).collect();
        assert_eq!(arities, (2..=DEFAULT_MAX_ARITY).collect::<Vec<_>>());
        assert_eq!(
            names(decls.last().unwrap().type_parameters()).concat(),
            "ABCDEFGHIJ"
        );
    }

    #[test]
    fn insufficient_alphabet_is_rejected() {
        let alphabet: Alphabet = "ABC".parse().unwrap();
        assert!(matches!(
            generate(&alphabet, 5),
            Err(Error::InsufficientAlphabet {
                requested: 5,
                available: 3
            })
        ));
    }

    #[test]
    fn degenerate_arity_is_rejected() {
        for max_arity in [0, 1] {
            assert!(matches!(
                generate(&Alphabet::default(), max_arity),
                Err(Error::DegenerateArity { requested }) if requested == max_arity
            ));
        }
        // A one-symbol alphabet has nothing to generate.
        let single: Alphabet = "A".parse().unwrap();
        assert!(matches!(
            generate_all(&single),
            Err(Error::DegenerateArity { requested: 1 })
        ));
    }

    #[test]
    fn emit_writes_nothing_on_error() {
        let alphabet: Alphabet = "ABC".parse().unwrap();
        let mut out = Vec::new();
        assert!(emit(&alphabet, 5, &SourceRenderer::default(), &mut out).is_err());
        assert!(out.is_empty());
        assert!(emit(&alphabet, 1, &SourceRenderer::default(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn emit_is_deterministic() {
        let render = || {
            let mut out = Vec::new();
            emit(&Alphabet::default(), 10, &SourceRenderer::default(), &mut out).unwrap();
            out
        };
        let first = render();
        assert!(!first.is_empty());
        assert_eq!(first, render());
    }

    fn alphabet_and_arity() -> impl Strategy<Value = (Alphabet, usize)> {
        (MIN_ARITY..=26usize).prop_flat_map(|len| {
            (
                Just(Alphabet::latin(len).unwrap()),
                MIN_ARITY..=len,
            )
        })
    }

    #[test]
    fn complete_and_increasing() {
        proptest!(proptest_cfg(), |((alphabet, max_arity) in alphabet_and_arity())| {
            let decls = generate(&alphabet, max_arity).unwrap();
            prop_assert_eq!(decls.len(), max_arity - 1);
            for (decl, arity) in decls.iter().zip(MIN_ARITY..) {
                prop_assert_eq!(decl.arity(), arity);
            }
        });
    }

    #[test]
    fn positionally_consistent() {
        proptest!(proptest_cfg(), |((alphabet, max_arity) in alphabet_and_arity())| {
            for decl in generate(&alphabet, max_arity).unwrap() {
                prop_assert_eq!(decl.delegations().len(), decl.arity());
                for (i, delegation) in decl.delegations().enumerate() {
                    prop_assert_eq!(delegation.index, i);
                    prop_assert_eq!(delegation.symbol, &decl.type_parameters()[i]);
                    prop_assert_eq!(delegation.symbol, &decl.composite()[i]);
                    prop_assert_eq!(delegation.symbol, &alphabet.symbols()[i]);
                }
            }
        });
    }

    #[test]
    fn each_arity_extends_the_previous_by_one_symbol() {
        proptest!(proptest_cfg(), |((alphabet, max_arity) in alphabet_and_arity())| {
            let decls = generate(&alphabet, max_arity).unwrap();
            for pair in decls.windows(2) {
                let (shorter, longer) = (pair[0].type_parameters(), pair[1].type_parameters());
                prop_assert_eq!(&longer[..shorter.len()], shorter);
                prop_assert_eq!(&longer[shorter.len()], &alphabet.symbols()[shorter.len()]);
            }
        });
    }

    #[test]
    fn generate_is_idempotent() {
        proptest!(proptest_cfg(), |((alphabet, max_arity) in alphabet_and_arity())| {
            prop_assert_eq!(
                generate(&alphabet, max_arity).unwrap(),
                generate(&alphabet, max_arity).unwrap()
            );
        });
    }

    #[test]
    fn arity_beyond_alphabet_always_fails() {
        proptest!(proptest_cfg(), |(len in 1..=26usize, extra in 1..8usize)| {
            let alphabet = Alphabet::latin(len).unwrap();
            let is_insufficient = matches!(
                generate(&alphabet, len + extra),
                Err(Error::InsufficientAlphabet { requested, available })
                    if requested == len + extra && available == len
            );
            prop_assert!(is_insufficient);
        });
    }
}
