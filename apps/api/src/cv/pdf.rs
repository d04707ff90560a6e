//! PDF text extraction behind a small trait so handlers can be tested without real PDFs.

use thiserror::Error;

/// pdf-extract separates pages with form feeds.
const PAGE_SEPARATOR: char = '\x0c';

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("{0}")]
    Extraction(String),
}

/// Turns raw document bytes into per-page text. Pages without text come back empty.
pub trait PdfTextExtractor: Send + Sync {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, PdfError>;
}

/// Production extractor backed by the `pdf-extract` crate.
pub struct PdfExtractText;

impl PdfTextExtractor for PdfExtractText {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, PdfError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| PdfError::Extraction(e.to_string()))?;
        Ok(split_pages(&text))
    }
}

fn split_pages(text: &str) -> Vec<String> {
    text.split(PAGE_SEPARATOR).map(String::from).collect()
}

/// Joins pages into one document, one trailing newline per page that has text.
pub fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .filter(|page| !page.is_empty())
        .fold(String::new(), |mut document, page| {
            document.push_str(page);
            document.push('\n');
            document
        })
}
