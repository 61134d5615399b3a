//! Application error type.
//!
//! Every failure in the pipeline is fatal, so a single error type carrying the
//! process exit code and a human-readable message is all we need.

/// Unreadable input, malformed CSV.
pub const EXIT_INPUT: u8 = 2;
/// A column the analysis depends on is absent from the input.
pub const EXIT_SCHEMA: u8 = 3;
/// Terminal, chart backend or output write failure.
pub const EXIT_RENDER: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn missing_column(name: &str) -> Self {
        Self::new(EXIT_SCHEMA, format!("Missing required column: `{name}`"))
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
