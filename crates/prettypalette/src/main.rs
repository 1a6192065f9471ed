use std::io::{BufWriter, ErrorKind, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prettypalette::harmony::harmonies;
use prettypalette::layout::{write_harmonies, write_palette};
use prettypalette::opt::{Mode, Options};
use prettypalette::order::sort;

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prettypalette=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn render<W: Write>(out: &mut W, mode: Mode) -> std::io::Result<()> {
    match mode {
        Mode::Order(strategy) => write_palette(out, &sort(strategy))?,
        Mode::Harmony(reference) => write_harmonies(out, &harmonies(u8::from(reference)))?,
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let options = Options::parse();
    let mode = options.mode();
    tracing::debug!(?mode, "resolved command line options");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match render(&mut out, mode) {
        // Output piped into a pager or head may be cut short.
        Err(err) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("standard output closed early");
            Ok(())
        }
        result => result.context("failed to write palette to standard output"),
    }
}
