//! Property tests for the response normalization pipeline.
//!
//! Whatever text the model returns, the pipeline must hand back a complete
//! document, and applying it twice must change nothing.

use proptest::prelude::*;

use landing_studio::domain::landing::{
    ensure_complete, is_complete, parse_model_response, strip_code_fences, DOCUMENT_MARKER,
    FALLBACK_SUMMARY, SUMMARY_MARKER,
};

/// Fragments that resemble model output: markup, stray tags, fences, prose.
fn markup_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<!DOCTYPE html>".to_string()),
        Just("<html lang=\"en\">".to_string()),
        Just("</html>".to_string()),
        Just("<head>".to_string()),
        Just("</head>".to_string()),
        Just("<body class=\"x\">".to_string()),
        Just("</body>".to_string()),
        Just("<title>Shop</title>".to_string()),
        Just("<style>h1 { color: red; }</style>".to_string()),
        Just("<header><nav>Menu</nav></header>".to_string()),
        Just("```html\n".to_string()),
        Just("\n```".to_string()),
        "[a-zA-Z0-9 .,!]{0,40}",
        "<(div|section|p|h1)>[a-z ]{0,20}</(div|section|p|h1)>",
    ]
}

fn model_output() -> impl Strategy<Value = String> {
    prop::collection::vec(markup_fragment(), 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in model_output()) {
        let once = ensure_complete(&raw);
        prop_assert_eq!(ensure_complete(&once), once);
    }

    #[test]
    fn normalized_output_is_always_complete(raw in model_output()) {
        prop_assert!(is_complete(&ensure_complete(&raw)));
    }

    #[test]
    fn normalization_accepts_arbitrary_text(raw in "\\PC{0,200}") {
        let document = ensure_complete(&strip_code_fences(&raw));
        prop_assert!(is_complete(&document));
    }

    #[test]
    fn fence_stripping_preserves_interior(
        lang in "(html|HTML|)",
        interior in "<[a-z]{1,6}>[a-zA-Z0-9 ]{0,30}</[a-z]{1,6}>",
    ) {
        let fenced = format!("```{lang}\n{interior}\n```");
        prop_assert_eq!(strip_code_fences(&fenced), interior);
    }

    #[test]
    fn trailing_prose_after_fence_is_discarded(
        interior in "<[a-z]{1,6}>[a-zA-Z0-9 ]{0,30}</[a-z]{1,6}>",
        prose in "[A-Za-z][A-Za-z .,!]{0,60}",
    ) {
        let fenced = format!("```html\n{interior}\n```\n{prose}");
        let stripped = strip_code_fences(&fenced);

        prop_assert_eq!(&stripped, &interior);
        prop_assert!(!ensure_complete(&stripped).contains("```"));
    }

    #[test]
    fn parser_never_fails_and_falls_back_without_markers(raw in "\\PC{0,200}") {
        let parsed = parse_model_response(&raw);
        let has_both = raw.contains(DOCUMENT_MARKER) && raw.contains(SUMMARY_MARKER);

        prop_assert!(!parsed.summary.is_empty());
        if !has_both {
            prop_assert!(parsed.used_fallback);
            prop_assert_eq!(parsed.document, raw.trim());
            prop_assert_eq!(parsed.summary, FALLBACK_SUMMARY);
        }
    }

    #[test]
    fn parser_splits_well_formed_responses(
        document in "<html>[a-z ]{0,40}</html>",
        summary in "[A-Za-z][A-Za-z ]{0,40}[a-z.]",
    ) {
        let raw = format!("{DOCUMENT_MARKER}\n{document}\n\n{SUMMARY_MARKER}\n{summary}\n");
        let parsed = parse_model_response(&raw);

        prop_assert!(!parsed.used_fallback);
        prop_assert_eq!(parsed.document, document.trim());
        prop_assert_eq!(parsed.summary, summary.trim());
    }
}
