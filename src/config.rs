//! Rendering configuration.
//!
//! Style and display settings are resolved once into a `RenderConfig` value and
//! passed into the render step; nothing here is process-global.
//!
//! Precedence: CLI flag > `EXPPLOT_STYLE` (environment or `.env`) > default.

use std::io::IsTerminal;

use clap::ValueEnum;
use log::warn;

use crate::cli::Cli;

/// Environment variable selecting the default style sheet.
pub const STYLE_ENV: &str = "EXPPLOT_STYLE";

/// An RGB triple, kept backend-neutral so both renderers can use it.
pub type Rgb = (u8, u8, u8);

/// Named chart style sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StyleSheet {
    /// Light grey panel with white grid lines.
    #[default]
    #[value(name = "darkgrid")]
    DarkGrid,
    /// White panel with light grey grid lines.
    #[value(name = "whitegrid")]
    WhiteGrid,
    /// Dark panel, no grid.
    #[value(name = "dark")]
    Dark,
}

/// Colors and grid settings derived from a `StyleSheet`.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub grid: Option<Rgb>,
    /// Series colors, cycled in series order within a panel.
    pub cycle: [Rgb; 5],
}

/// Seaborn "deep" palette.
const DEEP: [Rgb; 5] = [
    (76, 114, 176),
    (221, 132, 82),
    (85, 168, 104),
    (196, 78, 82),
    (129, 114, 179),
];

/// Brighter variant for dark backgrounds.
const BRIGHT: [Rgb; 5] = [
    (0, 215, 255),
    (255, 124, 0),
    (26, 201, 56),
    (232, 0, 11),
    (139, 43, 226),
];

impl StyleSheet {
    pub fn theme(self) -> Theme {
        match self {
            StyleSheet::DarkGrid => Theme {
                background: (234, 234, 242),
                foreground: (0, 0, 0),
                grid: Some((255, 255, 255)),
                cycle: DEEP,
            },
            StyleSheet::WhiteGrid => Theme {
                background: (255, 255, 255),
                foreground: (0, 0, 0),
                grid: Some((204, 204, 204)),
                cycle: DEEP,
            },
            StyleSheet::Dark => Theme {
                background: (0, 0, 0),
                foreground: (255, 255, 255),
                grid: None,
                cycle: BRIGHT,
            },
        }
    }
}

/// Where the figure is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Full-screen terminal window, blocks until closed.
    Interactive,
    /// Text charts printed to stdout.
    Ascii,
}

/// Fully-resolved rendering settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub style: StyleSheet,
    pub mode: DisplayMode,
    pub ascii_width: usize,
    pub ascii_height: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: StyleSheet::default(),
            mode: DisplayMode::Interactive,
            ascii_width: 100,
            ascii_height: 20,
        }
    }
}

impl RenderConfig {
    /// Resolve settings from the CLI, the environment and the terminal.
    pub fn from_cli(cli: &Cli) -> Self {
        dotenvy::dotenv().ok();
        let env_style = std::env::var(STYLE_ENV).ok();
        let interactive = std::io::stdout().is_terminal();
        Self::resolve(cli, env_style.as_deref(), interactive)
    }

    /// Pure resolution step, separated from the environment for testing.
    pub fn resolve(cli: &Cli, env_style: Option<&str>, stdout_is_terminal: bool) -> Self {
        let style = cli
            .style
            .or_else(|| env_style.and_then(parse_style))
            .unwrap_or_default();

        let mode = if cli.ascii || !stdout_is_terminal {
            DisplayMode::Ascii
        } else {
            DisplayMode::Interactive
        };

        Self {
            style,
            mode,
            ascii_width: cli.width,
            ascii_height: cli.height,
        }
    }

    pub fn theme(&self) -> Theme {
        self.style.theme()
    }
}

fn parse_style(raw: &str) -> Option<StyleSheet> {
    match StyleSheet::from_str(raw.trim(), true) {
        Ok(style) => Some(style),
        Err(_) => {
            warn!("ignoring unknown {STYLE_ENV}={raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("expplot").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_are_interactive_darkgrid() {
        let cfg = RenderConfig::resolve(&cli(&[]), None, true);
        assert_eq!(cfg, RenderConfig::default());
    }

    #[test]
    fn flag_beats_env() {
        let cfg = RenderConfig::resolve(&cli(&["--style", "dark"]), Some("whitegrid"), true);
        assert_eq!(cfg.style, StyleSheet::Dark);

        let cfg = RenderConfig::resolve(&cli(&[]), Some("WhiteGrid"), true);
        assert_eq!(cfg.style, StyleSheet::WhiteGrid);
    }

    #[test]
    fn unknown_env_style_falls_back() {
        let cfg = RenderConfig::resolve(&cli(&[]), Some("ggplot"), true);
        assert_eq!(cfg.style, StyleSheet::DarkGrid);
    }

    #[test]
    fn ascii_when_requested_or_not_a_terminal() {
        assert_eq!(RenderConfig::resolve(&cli(&["--ascii"]), None, true).mode, DisplayMode::Ascii);
        assert_eq!(RenderConfig::resolve(&cli(&[]), None, false).mode, DisplayMode::Ascii);
    }
}
