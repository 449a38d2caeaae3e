use std::io::Write;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hueshift::backends::css::CssBackend;
use hueshift::backends::StyleBackend;
use hueshift::cli::Args;
use hueshift::pipeline::derive::Palette;
use hueshift::pipeline::generate_palette;
use hueshift::{preview, tui};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let backend = CssBackend {
        selector: args.selector.clone(),
        element_rules: !args.no_element_rules,
    };

    let palette = match &args.color {
        Some(color) if !args.tui => match generate_palette(color, args.policy) {
            Ok(palette) => palette,
            Err(err) => bail!("{}\n  ({err})", err.hint()),
        },
        _ => match tui::run(tui::App::new(args.policy))? {
            Some(palette) => palette,
            None => return Ok(()),
        },
    };

    if args.preview {
        eprint!("{}", preview::render(&palette));
    }

    emit(&backend, &palette, &args)
}

fn emit(backend: &CssBackend, palette: &Palette, args: &Args) -> Result<()> {
    match &args.output {
        Some(path) => {
            backend.write_to(palette, path)?;
            info!(path = %path.display(), "wrote {}", backend.name());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(backend.serialize(palette).as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
