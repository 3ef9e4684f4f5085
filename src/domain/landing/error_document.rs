//! Self-describing HTML page returned in place of a generated landing page.

use super::html_normalizer::wrap_document;
use super::upstream::UpstreamError;

const ERROR_STYLES: &str = "* { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            background: #fef2f2;
            display: flex;
            min-height: 100vh;
            align-items: center;
            justify-content: center;
            padding: 2rem;
        }
        .error-card {
            max-width: 640px;
            background: #ffffff;
            border-left: 6px solid #dc2626;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
        }
        .error-card h1 { color: #b91c1c; font-size: 1.5rem; margin-bottom: 1rem; }
        .error-card p { margin-bottom: 0.75rem; }
        .error-card code {
            display: block;
            background: #f3f4f6;
            padding: 0.75rem;
            border-radius: 4px;
            white-space: pre-wrap;
            word-break: break-word;
        }";

/// Renders a complete HTML page describing why generation failed.
pub fn render_error_document(error: &UpstreamError) -> String {
    let body = format!(
        r#"    <main class="error-card" role="alert">
        <h1>The landing page could not be generated</h1>
        <p>{description}</p>
        <p>Error code: <strong>{code}</strong></p>
        <p>Details:</p>
        <code>{details}</code>
    </main>"#,
        description = html_escape(error.category.description()),
        code = error.category.code(),
        details = html_escape(&error.raw_message),
    );

    wrap_document("Generation error", ERROR_STYLES, &body)
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
