//! Domain error types.

/// A parse error with position information for holdings-list parsing.
#[derive(Debug, Clone, thiserror::Error)]
#[error("parse error at position {position}: {message}")]
pub struct HoldingsParseError {
    pub message: String,
    pub position: usize,
}

impl HoldingsParseError {
    /// Format the error with a caret pointing at the error position in the input.
    pub fn display_with_context(&self, input: &str) -> String {
        let caret = " ".repeat(self.position) + "^";
        format!(
            "{input}\n{caret}\n{err}",
            input = input,
            caret = caret,
            err = self
        )
    }
}

/// Top-level error type for zoonfarm.
#[derive(Debug, thiserror::Error)]
pub enum FarmError {
    #[error("invalid rarity {0}: expected 1-6")]
    InvalidRarity(u8),

    #[error("invalid level {0}: expected 1-6")]
    InvalidLevel(u8),

    #[error("invalid {what}: {reason}")]
    InvalidArgument { what: String, reason: String },

    #[error("external capacity is zero at reward accrual")]
    ZeroCapacity,

    #[error("non-finite {what} during simulation")]
    NonFinite { what: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    HoldingsParse(#[from] HoldingsParseError),

    #[error("no capacity history in {path}")]
    NoHistory { path: String },

    #[error("capacity store error: {reason}")]
    Store { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FarmError> for std::process::ExitCode {
    fn from(err: &FarmError) -> Self {
        let code: u8 = match err {
            FarmError::Io(_) => 1,
            FarmError::ConfigParse { .. }
            | FarmError::ConfigMissing { .. }
            | FarmError::ConfigInvalid { .. }
            | FarmError::HoldingsParse(_) => 2,
            FarmError::InvalidRarity(_)
            | FarmError::InvalidLevel(_)
            | FarmError::InvalidArgument { .. } => 3,
            FarmError::ZeroCapacity | FarmError::NonFinite { .. } => 4,
            FarmError::NoHistory { .. } | FarmError::Store { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holdings_parse_error_display_with_context() {
        let err = HoldingsParseError {
            message: "expected ':'".to_string(),
            position: 4,
        };
        let rendered = err.display_with_context("2x1;300:2000");
        assert!(rendered.starts_with("2x1;300:2000\n    ^\n"));
        assert!(rendered.contains("parse error at position 4"));
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = FarmError::InvalidRarity(9);
        assert_eq!(err.to_string(), "invalid rarity 9: expected 1-6");

        let err = FarmError::ConfigMissing {
            section: "simulation".to_string(),
            key: "days".to_string(),
        };
        assert_eq!(err.to_string(), "missing config key [simulation] days");
    }
}
