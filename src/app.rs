//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and resolves the render configuration
//! - loads the benchmark CSV from stdin and derives the error columns
//! - shows the figure (interactive window or text)
//!
//! `run_generate` is the equivalent entry point for the `expgen` binary.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use log::info;

use crate::cli::{Cli, GenerateCli};
use crate::config::{DisplayMode, RenderConfig};
use crate::error::{AppError, EXIT_RENDER};
use crate::generate::Grid;
use crate::plot::figure::Figure;

pub mod pipeline;

/// Entry point for the `expplot` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    let config = RenderConfig::from_cli(&cli);
    info!("render config: {config:?}");

    progress(&mut io::stdout(), "Loading data")?;
    let table = pipeline::load_and_derive(io::stdin().lock())?;

    progress(&mut io::stdout(), "Plotting data")?;
    let figure = crate::plot::figure::build_figure(&table)?;
    render(&figure, &config)
}

/// Entry point for the `expgen` binary.
pub fn run_generate() -> Result<(), AppError> {
    env_logger::init();

    let cli = GenerateCli::parse();
    let grid = Grid {
        min: cli.min,
        max: cli.max,
        step: cli.step,
    };
    let rows = crate::generate::write_results(BufWriter::new(io::stdout().lock()), &grid)?;
    info!("generated {rows} rows");
    Ok(())
}

/// Print a progress line, turning a closed stdout into an error instead of a panic.
pub fn progress<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    writeln!(out, "{message}")
        .and_then(|_| out.flush())
        .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to write to stdout: {e}")))
}

/// Display the figure according to the configured mode.
pub fn render(figure: &Figure, config: &RenderConfig) -> Result<(), AppError> {
    match config.mode {
        DisplayMode::Interactive => crate::tui::show(figure, config),
        DisplayMode::Ascii => {
            let text = crate::plot::render_figure(figure, config.ascii_width, config.ascii_height);
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to write plot: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn progress_writes_line() {
        let mut out = Vec::new();
        progress(&mut out, "Loading data").unwrap();
        assert_eq!(out, b"Loading data\n");
    }

    #[test]
    fn progress_on_closed_pipe_is_an_error() {
        let err = progress(&mut ClosedPipe, "Plotting data").unwrap_err();
        assert_eq!(err.exit_code(), EXIT_RENDER);
    }
}
