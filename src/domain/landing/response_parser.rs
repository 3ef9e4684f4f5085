//! Splits a dual-section modification response into document and summary.
//!
//! Models do not always follow the requested format. A response missing
//! either marker is still usable: the whole text is taken as the document.

/// Marker that opens the document section of a modification response.
pub const DOCUMENT_MARKER: &str = "CÓDIGO_MODIFICADO:";

/// Marker that opens the change summary section of a modification response.
pub const SUMMARY_MARKER: &str = "ANÁLISIS_DE_CAMBIOS:";

/// Summary used when the summary section is missing or empty.
pub const DEFAULT_SUMMARY: &str = "Modification applied";

/// Summary used when the response ignored the section format entirely.
pub const FALLBACK_SUMMARY: &str = "Modification applied according to instructions";

/// Document and change summary extracted from a model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModelResponse {
    pub document: String,
    pub summary: String,
    /// True when the markers were missing and the fallback path was taken.
    pub used_fallback: bool,
}

/// Parses a raw modification response. Never fails.
pub fn parse_model_response(raw: &str) -> ParsedModelResponse {
    if raw.contains(DOCUMENT_MARKER) && raw.contains(SUMMARY_MARKER) {
        if let Some((_, rest)) = raw.split_once(DOCUMENT_MARKER) {
            let (document, summary) = match rest.split_once(SUMMARY_MARKER) {
                Some((document, summary)) => (document.trim(), summary.trim()),
                None => (rest.trim(), ""),
            };

            let summary = if summary.is_empty() {
                DEFAULT_SUMMARY
            } else {
                summary
            };

            return ParsedModelResponse {
                document: document.to_string(),
                summary: summary.to_string(),
                used_fallback: false,
            };
        }
    }

    ParsedModelResponse {
        document: raw.trim().to_string(),
        summary: FALLBACK_SUMMARY.to_string(),
        used_fallback: true,
    }
}
