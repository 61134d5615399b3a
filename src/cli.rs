//! Command-line parsing.
//!
//! `expplot` is meant to be used as `bench | expplot`; every flag is optional
//! and only affects presentation.

use clap::Parser;

use crate::config::StyleSheet;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "expplot",
    version,
    about = "Plot relative error of fast exp() approximations from benchmark CSV on stdin"
)]
pub struct Cli {
    /// Print the charts as text instead of opening the interactive view.
    #[arg(long)]
    pub ascii: bool,

    /// Chart style sheet (overrides `EXPPLOT_STYLE`).
    #[arg(long, value_enum)]
    pub style: Option<StyleSheet>,

    /// Text chart width (columns), used with `--ascii`.
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Text chart height per panel (rows), used with `--ascii`.
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// CLI of the `expgen` result generator.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "expgen",
    version,
    about = "Write exp() and fast exp() results over a grid as CSV on stdout"
)]
pub struct GenerateCli {
    /// First input value (inclusive).
    #[arg(long, default_value_t = -50.0, allow_hyphen_values = true)]
    pub min: f64,

    /// Upper input bound (exclusive).
    #[arg(long, default_value_t = 50.0, allow_hyphen_values = true)]
    pub max: f64,

    /// Grid spacing.
    #[arg(long, default_value_t = 0.001)]
    pub step: f64,
}
