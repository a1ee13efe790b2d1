//! Input loading: plain-text files, stdin, and text extracted from PDFs.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::AppError;

/// Path argument meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Loads raw text from `input`: a file path, or `-` for stdin.
///
/// Files ending in `.pdf` (any case) go through `pdf-extract`; everything else
/// is read as UTF-8.
pub fn load_text(input: &str) -> Result<String, AppError> {
    if input == STDIN_MARKER {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        debug!(chars = buf.len(), "read input from stdin");
        return Ok(buf);
    }

    let path = Path::new(input);
    if is_pdf(path) {
        let bytes = std::fs::read(path)?;
        let text = pdf_text(&bytes)?;
        info!(path = %path.display(), chars = text.len(), "extracted text from PDF");
        return Ok(text);
    }

    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), chars = text.len(), "read text file");
    Ok(text)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Extracts the text layer of an in-memory PDF.
pub fn pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))?;
    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "PDF has no extractable text layer (scanned image?)".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pdf_extension_detection() {
        assert!(is_pdf(Path::new("resume.pdf")));
        assert!(is_pdf(Path::new("/tmp/Resume.PDF")));
        assert!(!is_pdf(Path::new("resume.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_load_plain_text_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "Jane Doe\nEngineer\n").expect("write");
        let text = load_text(file.path().to_str().expect("utf-8 path")).expect("load");
        assert_eq!(text, "Jane Doe\nEngineer\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_text("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    #[test]
    fn test_garbage_pdf_is_extraction_error() {
        let err = pdf_text(b"not a pdf at all").unwrap_err();
        assert_eq!(err.code(), "EXTRACTION_ERROR");
    }
}
