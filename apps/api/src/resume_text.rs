//! Resume text supplier — turns uploaded PDF bytes into raw text.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// A resume file received through multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: String,
    pub data: Bytes,
}

/// Display name derived from the upload's file name ("jane_doe.pdf" → "jane_doe").
pub fn candidate_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim();
    let stem = match base.len().checked_sub(4).and_then(|i| Some((i, base.get(i..)?))) {
        Some((i, ext)) if ext.eq_ignore_ascii_case(".pdf") => &base[..i],
        _ => base,
    };
    stem.to_string()
}

/// Extracts text from a PDF. CPU-bound; call from a blocking task.
pub fn extract_pdf_text(resume: &UploadedResume) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(&resume.data).map_err(|e| {
        AppError::UnprocessableEntity(format!(
            "Could not read PDF '{}': {e}",
            resume.file_name
        ))
    })?;
    debug!("Extracted {} chars from {}", text.len(), resume.file_name);
    Ok(text)
}
