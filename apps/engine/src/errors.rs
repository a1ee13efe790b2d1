use thiserror::Error;

/// Error type for the layers around the extractor and layout engine.
///
/// The heuristics themselves never fail; these variants cover input loading,
/// PDF assembly and output serialization.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("PDF render error: {0}")]
    Render(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Extraction(_) => "EXTRACTION_ERROR",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AppError::Validation("x".into()),
            AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")),
            AppError::Extraction("x".into()),
            AppError::Render("x".into()),
            AppError::Internal(anyhow::anyhow!("x")),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::Validation("document is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: document is empty");
    }
}
