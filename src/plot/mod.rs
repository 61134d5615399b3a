//! Figure construction and text rendering.
//!
//! - backend-independent figure model built from the table (`figure`)
//! - fixed-size character plots (`ascii`)

pub mod ascii;
pub mod figure;

pub use ascii::render_figure;
pub use figure::*;
