use {
    anyhow::{Context, Result},
    args::{Args, Format},
    barycentric_codegen::{emit, Render, SourceRenderer, TokenRenderer},
    clap::Parser,
    std::{
        fs,
        io::{self, Write},
    },
    tracing::info,
    tracing_subscriber::EnvFilter,
};

mod args;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_filter()))
        .with_writer(io::stderr)
        .init();

    run(&args)
}

/// Generate into memory and touch the output only once generation succeeded, so a
/// rejected configuration leaves an existing output file as it was.
fn run(args: &Args) -> Result<()> {
    let alphabet = args.alphabet().context("invalid alphabet")?;
    let max_arity = args.max_arity(&alphabet);
    let target = args.target().context("invalid interpolation target")?;
    let renderer: Box<dyn Render> = match args.format {
        Format::Source => Box::new(SourceRenderer::new(target)),
        Format::Tokens => Box::new(TokenRenderer::new(target)),
    };

    info!(
        %alphabet,
        max_arity,
        format = ?args.format,
        "generating tuple implementations"
    );
    let mut rendered = Vec::new();
    emit(&alphabet, max_arity, renderer.as_ref(), &mut rendered)
        .context("code generation failed")?;

    if args.output_to_stdout() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&rendered)?;
        stdout.flush()?;
    } else {
        fs::write(&args.output, &rendered)
            .with_context(|| format!("failed to write {}", args.output))?;
    }
    Ok(())
}
