//! `expplot` library crate.
//!
//! The binary (`expplot`) is a thin wrapper around this library so that:
//!
//! - the analysis is testable without spawning processes or a terminal
//! - the figure model can be drawn by more than one renderer
//! - the `expgen` binary can share the fast `exp` code and CSV layout

pub mod app;
pub mod cli;
pub mod config;
pub mod derive;
pub mod error;
pub mod fastexp;
pub mod generate;
pub mod io;
pub mod normalize;
pub mod plot;
pub mod table;
pub mod tui;
