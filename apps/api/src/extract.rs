/// PDF text extraction for uploaded resumes.
use crate::errors::AppError;
use tracing::debug;

/// Extracts the full text of a PDF from its raw bytes.
///
/// Pages are extracted individually and joined with a single space, so text
/// flows across page breaks the same way it does within a page. The result is
/// passed verbatim into the advisor prompt and echoed back in the response.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    debug!("Extracted {} page(s) of text", pages.len());
    Ok(pages.join(" "))
}
