//! Input constraints checked before any model invocation.
//!
//! Lengths are counted in characters after trimming surrounding whitespace.

use crate::domain::foundation::ValidationError;

use super::conversation::{ConversationEntry, MAX_HISTORY_ENTRIES};

pub const PROMPT_MIN_CHARS: usize = 10;
pub const PROMPT_MAX_CHARS: usize = 1000;
pub const INSTRUCTION_MIN_CHARS: usize = 5;
pub const INSTRUCTION_MAX_CHARS: usize = 500;
pub const DOCUMENT_MIN_CHARS: usize = 100;

/// Validates the description sent to `generate`.
pub fn validate_generation_prompt(prompt: &str) -> Result<(), ValidationError> {
    check_length("prompt", prompt, PROMPT_MIN_CHARS, Some(PROMPT_MAX_CHARS))
}

/// Validates the document and instruction sent to `modify`.
pub fn validate_modification(
    current_document: &str,
    instruction: &str,
) -> Result<(), ValidationError> {
    check_length("current_document", current_document, DOCUMENT_MIN_CHARS, None)?;

    let lower = current_document.to_lowercase();
    if !(lower.contains("<html") || lower.contains("<!doctype")) {
        return Err(ValidationError::invalid_format(
            "current_document",
            "must be an HTML document (expected <!DOCTYPE or <html)",
        ));
    }

    check_length(
        "instruction",
        instruction,
        INSTRUCTION_MIN_CHARS,
        Some(INSTRUCTION_MAX_CHARS),
    )
}

/// Validates the size of the caller-supplied conversation history.
pub fn validate_history(history: &[ConversationEntry]) -> Result<(), ValidationError> {
    if history.len() > MAX_HISTORY_ENTRIES {
        return Err(ValidationError::too_many_items(
            "conversation_history",
            MAX_HISTORY_ENTRIES,
            history.len(),
        ));
    }
    Ok(())
}

fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let chars = trimmed.chars().count();
    if chars < min {
        return Err(ValidationError::too_short(field, min, chars));
    }
    if let Some(max) = max {
        if chars > max {
            return Err(ValidationError::too_long(field, max, chars));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::landing::EntryKind;

    fn html_of_len(len: usize) -> String {
        let prefix = "<html>";
        format!("{}{}", prefix, "a".repeat(len - prefix.len()))
    }

    #[test]
    fn prompt_length_boundaries() {
        assert!(matches!(
            validate_generation_prompt(&"a".repeat(9)),
            Err(ValidationError::TooShort { .. })
        ));
        assert!(validate_generation_prompt(&"a".repeat(10)).is_ok());
        assert!(validate_generation_prompt(&"a".repeat(1000)).is_ok());
        assert!(matches!(
            validate_generation_prompt(&"a".repeat(1001)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn prompt_is_measured_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(9));
        assert!(validate_generation_prompt(&padded).is_err());
    }

    #[test]
    fn prompt_counts_characters_not_bytes() {
        assert!(validate_generation_prompt(&"ñ".repeat(10)).is_ok());
        assert!(validate_generation_prompt(&"ñ".repeat(1000)).is_ok());
    }

    #[test]
    fn blank_prompt_is_an_empty_field() {
        let err = validate_generation_prompt("    ").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("prompt"));
    }

    #[test]
    fn instruction_length_boundaries() {
        let doc = html_of_len(100);

        let err = validate_modification(&doc, &"a".repeat(4)).unwrap_err();
        assert_eq!(err.field(), "instruction");
        assert!(validate_modification(&doc, &"a".repeat(5)).is_ok());
        assert!(validate_modification(&doc, &"a".repeat(500)).is_ok());
        let err = validate_modification(&doc, &"a".repeat(501)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));
    }

    #[test]
    fn document_length_and_format_boundaries() {
        let err = validate_modification(&html_of_len(99), "change it").unwrap_err();
        assert_eq!(err.field(), "current_document");
        assert!(matches!(err, ValidationError::TooShort { .. }));

        let err = validate_modification(&"a".repeat(100), "change it").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));

        assert!(validate_modification(&html_of_len(100), "change it").is_ok());
    }

    #[test]
    fn doctype_alone_satisfies_format_check() {
        let doc = format!("<!DOCTYPE html>{}", "a".repeat(100));
        assert!(validate_modification(&doc, "change it").is_ok());
    }

    #[test]
    fn history_is_capped() {
        let entry = ConversationEntry::new(1, EntryKind::Modification, "x", "t");

        assert!(validate_history(&vec![entry.clone(); 10]).is_ok());
        let err = validate_history(&vec![entry; 11]).unwrap_err();
        assert_eq!(err.field(), "conversation_history");
    }
}
