//! Ratatui-based interactive figure window.
//!
//! The figure title sits in a header bar, the panels are stacked vertically
//! with equal height, and a footer shows the key help. `show` blocks until the
//! user closes the window.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::{RenderConfig, Rgb, Theme};
use crate::error::{AppError, EXIT_RENDER};
use crate::plot::figure::Figure;

mod panel_chart;

use panel_chart::PanelChart;

/// Show the figure full-screen until the user closes it.
///
/// Key events come from the controlling terminal, so this works while the CSV
/// is being piped through stdin.
pub fn show(figure: &Figure, config: &RenderConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to initialize terminal: {e}")))?;

    let theme = config.theme();
    event_loop(&mut terminal, figure, &theme)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(EXIT_RENDER, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(EXIT_RENDER, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    figure: &Figure,
    theme: &Theme,
) -> Result<(), AppError> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal
                .draw(|f| draw(f, figure, theme))
                .map_err(|e| AppError::new(EXIT_RENDER, format!("Terminal draw error: {e}")))?;
            needs_redraw = false;
        }

        if !event::poll(Duration::from_millis(100))
            .map_err(|e| AppError::new(EXIT_RENDER, format!("Event poll error: {e}")))?
        {
            continue;
        }

        match event::read().map_err(|e| AppError::new(EXIT_RENDER, format!("Event read error: {e}")))? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_close_key(key.code, key.modifiers) {
                    debug!("window closed by user");
                    break;
                }
            }
            Event::Resize(_, _) => {
                needs_redraw = true;
            }
            _ => {}
        }
    }
    Ok(())
}

fn is_close_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Draw the whole figure into a frame.
pub fn draw(frame: &mut Frame<'_>, figure: &Figure, theme: &Theme) {
    let [title, panels, footer] = split_frame(frame.area());

    draw_title(frame, figure, theme, title);
    draw_panels(frame, figure, theme, panels);
    draw_footer(frame, footer);
}

/// Title bar, panel area and footer.
fn split_frame(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .areas(area)
}

/// Equal-height rows for `n` stacked panels.
fn panel_rects(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.max(1) as u32;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
        .split(area)
        .to_vec()
}

fn draw_title(frame: &mut Frame<'_>, figure: &Figure, theme: &Theme, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        figure.title,
        Style::default().fg(color(theme.foreground)).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL))
    .style(Style::default().bg(color(theme.background)));
    frame.render_widget(title, area);
}

fn draw_panels(frame: &mut Frame<'_>, figure: &Figure, theme: &Theme, area: Rect) {
    let rows = panel_rects(area, figure.panels.len());

    for (panel, &rect) in figure.panels.iter().zip(rows.iter()) {
        let block = Block::default()
            .title(format!("relative error vs {}", panel.x_label))
            .borders(Borders::ALL)
            .style(Style::default().bg(color(theme.background)).fg(color(theme.foreground)));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        frame.render_widget(PanelChart { panel, theme }, inner);
    }
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let help = Line::from(Span::styled("q / Esc close", Style::default().fg(Color::Gray)));
    let p = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn color((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}
