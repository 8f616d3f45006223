use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecoverError {
    #[error("Malformed input document: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid base '{base}': expected an integer in 2..=36")]
    InvalidBase { base: String },

    #[error("Invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Empty digit string for base {base}")]
    EmptyDigits { base: u32 },

    #[error("Not enough points: have {have}, need {need}")]
    InsufficientPoints { have: usize, need: usize },

    #[error("Duplicate x-coordinate {x} among selected points")]
    DuplicateAbscissa { x: String },

    #[error("Singular system: zero pivot at row {row}")]
    SingularMatrix { row: usize },

    #[error("Configuration error for '{field}': {reason}")]
    InvalidConfigValueError { field: String, reason: String },
}

impl RecoverError {
    /// Per-record decode failures are absorbed by the collector; everything
    /// else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RecoverError::InvalidBase { .. }
                | RecoverError::InvalidDigit { .. }
                | RecoverError::EmptyDigits { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RecoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_level_errors_are_recoverable() {
        assert!(RecoverError::InvalidBase {
            base: "37".to_string()
        }
        .is_recoverable());
        assert!(RecoverError::InvalidDigit {
            digit: 'z',
            base: 16
        }
        .is_recoverable());
    }

    #[test]
    fn structural_errors_abort() {
        assert!(!RecoverError::InsufficientPoints { have: 2, need: 3 }.is_recoverable());
        assert!(!RecoverError::SingularMatrix { row: 1 }.is_recoverable());
        assert!(!RecoverError::DuplicateAbscissa {
            x: "2".to_string()
        }
        .is_recoverable());
    }
}
