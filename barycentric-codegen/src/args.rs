use {
    barycentric_codegen::{Alphabet, InterpolateTarget, Result},
    clap::{Parser, ValueEnum},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Formatted source, one line per delegation.
    #[default]
    Source,
    /// Unformatted token stream, as written by the build script.
    Tokens,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Type parameter names, either a run of single letters (`ABC`) or a comma-separated
    /// list (`T,U,V`). Multi-character names always need commas (`Vertex,`).
    #[arg(
        short,
        long,
        value_name = "SYMBOLS",
        default_value = "ABCDEFGHIJ",
        value_parser = parse_alphabet
    )]
    pub alphabet: String,

    /// Largest tuple arity to generate (default: length of the alphabet).
    #[arg(short = 'n', long, value_name = "N")]
    pub max_arity: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Output file. If <PATH> is `-` then stdout is used.
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub output: String,

    /// Path of the interpolation trait.
    #[arg(long, value_name = "PATH", default_value = "Interpolate")]
    pub trait_path: String,

    /// Name of the interpolation method.
    #[arg(long, value_name = "IDENT", default_value = "interpolate")]
    pub method: String,

    /// Path of the weight vector type.
    #[arg(long, value_name = "PATH", default_value = "Vec3")]
    pub weights_type: String,

    /// Log every rendered declaration.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rejects malformed alphabets while parsing arguments. [`Alphabet`] holds
/// `proc_macro2` identifiers, which clap cannot store, so the string is kept.
fn parse_alphabet(s: &str) -> Result<String> {
    s.parse::<Alphabet>().map(|_| s.to_owned())
}

impl Args {
    pub fn alphabet(&self) -> Result<Alphabet> {
        self.alphabet.parse()
    }

    pub fn max_arity(&self, alphabet: &Alphabet) -> usize {
        self.max_arity.unwrap_or_else(|| alphabet.len())
    }

    pub fn output_to_stdout(&self) -> bool {
        self.output == "-"
    }

    pub fn target(&self) -> Result<InterpolateTarget> {
        InterpolateTarget::new(&self.trait_path, &self.method, &self.weights_type)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
