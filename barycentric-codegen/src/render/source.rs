use {
    super::{InterpolateTarget, Render},
    crate::declaration::Declaration,
    std::io::{self, Write},
};

const INDENT: &str = "    ";

/// Writes a declaration as formatted source:
///
/// ```text
/// impl<A: Interpolate, B: Interpolate> Interpolate for (A, B) {
///     fn interpolate(p0: &Self, p1: &Self, p2: &Self, weights: &Vec3) -> Self {
///         (
///             A::interpolate(&p0.0, &p1.0, &p2.0, weights),
///             B::interpolate(&p0.1, &p1.1, &p2.1, weights),
///         )
///     }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct SourceRenderer {
    target: InterpolateTarget,
}

impl SourceRenderer {
    pub fn new(target: InterpolateTarget) -> Self {
        Self { target }
    }
}

impl Render for SourceRenderer {
    fn render(&self, declaration: &Declaration, out: &mut dyn Write) -> io::Result<()> {
        let InterpolateTarget {
            method,
            samples: [p0, p1, p2],
            weights,
            ..
        } = &self.target;
        let trait_path = self.target.trait_path_string();
        let weights_ty = self.target.weights_ty_string();

        let bounds = declaration
            .type_parameters()
            .iter()
            .map(|param| format!("{param}: {trait_path}"))
            .collect::<Vec<_>>()
            .join(", ");
        let composite = declaration
            .composite()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "impl<{bounds}> {trait_path} for ({composite}) {{")?;
        writeln!(
            out,
            "{INDENT}fn {method}({p0}: &Self, {p1}: &Self, {p2}: &Self, {weights}: &{weights_ty}) -> Self {{"
        )?;
        writeln!(out, "{INDENT}{INDENT}(")?;
        for delegation in declaration.delegations() {
            let (symbol, i) = (delegation.symbol, delegation.index);
            writeln!(
                out,
                "{INDENT}{INDENT}{INDENT}{symbol}::{method}(&{p0}.{i}, &{p1}.{i}, &{p2}.{i}, {weights}),"
            )?;
        }
        writeln!(out, "{INDENT}{INDENT})")?;
        writeln!(out, "{INDENT}}}")?;
        writeln!(out, "}}")
    }
}
