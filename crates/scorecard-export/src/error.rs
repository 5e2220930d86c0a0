//! Error types for Scorecard Export

/// Errors from descriptor building
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A deck needs at least one moment
    #[error("no moments selected for export")]
    NoMomentsSelected,

    /// A selected moment name is not in the moment book
    #[error("unknown moment: {0}")]
    UnknownMoment(String),

    /// No style preset registered under this name
    #[error("unknown style preset: {0}")]
    UnknownStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ExportError::UnknownMoment("Launch".to_string()).to_string(),
            "unknown moment: Launch"
        );
    }
}
