use {
    super::{InterpolateTarget, Render},
    crate::declaration::Declaration,
    proc_macro2::{Literal, TokenStream},
    quote::quote,
    std::io::{self, Write},
};

/// Builds each declaration as a [`TokenStream`] and writes it without formatting.
#[derive(Clone, Debug, Default)]
pub struct TokenRenderer {
    target: InterpolateTarget,
}

impl TokenRenderer {
    pub fn new(target: InterpolateTarget) -> Self {
        Self { target }
    }

    pub fn tokens(&self, declaration: &Declaration) -> TokenStream {
        let InterpolateTarget {
            trait_path,
            method,
            weights_ty,
            samples: [p0, p1, p2],
            weights,
        } = &self.target;

        let params = declaration.type_parameters();
        let bounds = params.iter().map(|param| quote!(#param: #trait_path));
        // The generic tuple (A, B, C, ...)
        let composite = declaration.composite();
        let composite = quote! { ( #(#composite),* ) };

        let delegations = declaration.delegations().map(|delegation| {
            let symbol = delegation.symbol;
            let i = Literal::usize_unsuffixed(delegation.index);
            quote!( #symbol::#method(&#p0.#i, &#p1.#i, &#p2.#i, #weights), )
        });

        quote! {
            impl<#(#bounds),*> #trait_path for #composite {
                fn #method(#p0: &Self, #p1: &Self, #p2: &Self, #weights: &#weights_ty) -> Self {
                    (
                        #(#delegations)*
                    )
                }
            }
        }
    }
}

impl Render for TokenRenderer {
    fn render(&self, declaration: &Declaration, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.tokens(declaration))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{alphabet::Alphabet, tuple::generate},
    };

    #[test]
    fn triple_tokens() {
        let alphabet: Alphabet = "ABC".parse().unwrap();
        let decls = generate(&alphabet, 3).unwrap();
        let expected = quote! {
            impl<A: Interpolate, B: Interpolate, C: Interpolate> Interpolate for (A, B, C) {
                fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Vec3) -> Self {
                    (
                        A::interpolate(&p0.0, &p1.0, &p2.0, weights),
                        B::interpolate(&p0.1, &p1.1, &p2.1, weights),
                        C::interpolate(&p0.2, &p1.2, &p2.2, weights),
                    )
                }
            }
        };
        assert_eq!(
            TokenRenderer::default().tokens(&decls[1]).to_string(),
            expected.to_string()
        );
    }

    #[test]
    fn crate_relative_target() {
        let target =
            InterpolateTarget::new("crate::Interpolate", "interpolate", "crate::Weights").unwrap();
        let decls = generate(&Alphabet::default(), 2).unwrap();
        let tokens = TokenRenderer::new(target).tokens(&decls[0]);
        let item: syn::ItemImpl = syn::parse2(tokens).unwrap();
        let trait_path = &item.trait_.as_ref().unwrap().1;
        assert_eq!(quote!(#trait_path).to_string(), quote!(crate::Interpolate).to_string());
    }
}
