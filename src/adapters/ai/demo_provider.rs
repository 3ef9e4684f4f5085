//! Demo Provider - Offline implementation of AIProvider.
//!
//! Produces keyword-themed landing pages from a fixed template so the service
//! can be exercised without an API key. Modification requests echo the current
//! document back in the dual-section response format, unchanged.

use async_trait::async_trait;

use crate::domain::landing::{
    CURRENT_CODE_HEADER, DOCUMENT_MARKER, INSTRUCTION_HEADER, REQUIREMENTS_LABEL, SUMMARY_MARKER,
};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage, TransformationKind,
};

const DEMO_MODEL: &str = "demo-template-1";

/// Summary returned for every demo modification.
pub const DEMO_MODIFICATION_SUMMARY: &str =
    "Demo mode: no changes were made. Configure an OpenAI API key to apply real modifications.";

/// Theme picked from keywords in the user's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoTheme {
    pub name: &'static str,
    pub primary_color: &'static str,
}

impl DemoTheme {
    const TECHNOLOGY: DemoTheme = DemoTheme {
        name: "Technology",
        primary_color: "#007bff",
    };

    /// Chooses a theme by subject keywords first, then by colour keywords.
    pub fn from_description(description: &str) -> Self {
        let lower = description.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if mentions(&["restaurant", "food"]) {
            DemoTheme {
                name: "Restaurant",
                primary_color: "#ff6b35",
            }
        } else if mentions(&["health", "medical", "doctor"]) {
            DemoTheme {
                name: "Health",
                primary_color: "#28a745",
            }
        } else if mentions(&["education", "course"]) {
            DemoTheme {
                name: "Education",
                primary_color: "#6f42c1",
            }
        } else if lower.contains("green") {
            DemoTheme {
                primary_color: "#28a745",
                ..Self::TECHNOLOGY
            }
        } else if lower.contains("red") {
            DemoTheme {
                primary_color: "#dc3545",
                ..Self::TECHNOLOGY
            }
        } else {
            Self::TECHNOLOGY
        }
    }
}

/// Template-backed provider that never leaves the process.
#[derive(Debug, Clone, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }

    fn generate(&self, user_message: &str) -> String {
        let description = user_message
            .split_once(REQUIREMENTS_LABEL)
            .and_then(|(_, rest)| rest.lines().next())
            .unwrap_or(user_message);

        render_landing(DemoTheme::from_description(description))
    }

    /// The document is the text between the code header and the first
    /// instruction header that follows it, so header text inside the
    /// instruction itself stays out.
    fn echo_modification(&self, user_message: &str) -> Result<String, AIError> {
        let code_section = format!("{CURRENT_CODE_HEADER}\n");
        let instruction_section = format!("\n\n{INSTRUCTION_HEADER}\n");
        let document = user_message
            .split_once(code_section.as_str())
            .and_then(|(_, rest)| rest.split_once(instruction_section.as_str()))
            .map(|(document, _)| document.trim())
            .ok_or_else(|| AIError::InvalidRequest("modification prompt has no current code".into()))?;

        Ok(format!(
            "{DOCUMENT_MARKER}\n{document}\n\n{SUMMARY_MARKER}\n{DEMO_MODIFICATION_SUMMARY}"
        ))
    }
}

#[async_trait]
impl AIProvider for DemoProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let user_message = request
            .message_content(MessageRole::User)
            .ok_or_else(|| AIError::InvalidRequest("request has no user message".into()))?;

        let content = match request.metadata.kind {
            TransformationKind::Generation => self.generate(user_message),
            TransformationKind::Modification => self.echo_modification(user_message)?,
        };

        Ok(CompletionResponse {
            content,
            usage: TokenUsage::default(),
            model: DEMO_MODEL.to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("demo", DEMO_MODEL, 0)
    }
}

fn render_landing(theme: DemoTheme) -> String {
    let DemoTheme {
        name,
        primary_color: color,
    } = theme;

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Landing Page - {name}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{ font-family: 'Arial', sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 0 20px; }}
        header {{
            background: {color};
            color: white;
            padding: 1rem 0;
            position: fixed;
            width: 100%;
            top: 0;
            z-index: 1000;
            box-shadow: 0 2px 5px rgba(0, 0, 0, 0.1);
        }}
        nav {{ display: flex; justify-content: space-between; align-items: center; }}
        .logo {{ font-size: 1.5rem; font-weight: bold; }}
        .nav-links {{ display: flex; list-style: none; gap: 2rem; }}
        .nav-links a {{ color: white; text-decoration: none; transition: opacity 0.3s; }}
        .nav-links a:hover {{ opacity: 0.8; }}
        .hero {{
            background: linear-gradient(135deg, {color}, {color}dd);
            color: white;
            padding: 120px 0 80px;
            text-align: center;
        }}
        .hero h1 {{ font-size: 3rem; margin-bottom: 1rem; animation: fadeInUp 1s ease; }}
        .hero p {{ font-size: 1.2rem; margin-bottom: 2rem; }}
        .btn {{
            display: inline-block;
            background: white;
            color: {color};
            padding: 12px 30px;
            text-decoration: none;
            border-radius: 5px;
            font-weight: bold;
            transition: transform 0.3s, box-shadow 0.3s;
        }}
        .btn:hover {{ transform: translateY(-2px); box-shadow: 0 5px 15px rgba(0, 0, 0, 0.2); }}
        .features {{ padding: 80px 0; background: #f8f9fa; }}
        .features h2 {{ text-align: center; font-size: 2.5rem; margin-bottom: 1rem; }}
        .features-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 2rem;
            margin-top: 3rem;
        }}
        .feature-card {{
            background: white;
            padding: 2rem;
            border-radius: 10px;
            text-align: center;
            box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
            transition: transform 0.3s;
        }}
        .feature-card:hover {{ transform: translateY(-5px); }}
        .cta {{ background: {color}; color: white; padding: 80px 0; text-align: center; }}
        .cta h2 {{ font-size: 2.5rem; margin-bottom: 1rem; }}
        .cta p {{ font-size: 1.1rem; margin-bottom: 2rem; }}
        footer {{ background: #333; color: white; text-align: center; padding: 2rem 0; }}
        @keyframes fadeInUp {{
            from {{ opacity: 0; transform: translateY(30px); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}
        @media (max-width: 768px) {{
            .hero h1 {{ font-size: 2rem; }}
            .nav-links {{ display: none; }}
            .features-grid {{ grid-template-columns: 1fr; }}
        }}
    </style>
</head>
<body>
    <header>
        <nav class="container">
            <div class="logo">My Company</div>
            <ul class="nav-links">
                <li><a href="#home">Home</a></li>
                <li><a href="#services">Services</a></li>
                <li><a href="#contact">Contact</a></li>
            </ul>
        </nav>
    </header>

    <section class="hero" id="home">
        <div class="container">
            <h1>Innovative {name} Solutions</h1>
            <p>We turn your ideas into reality with modern tools and an expert team</p>
            <a href="#contact" class="btn">Get Started</a>
        </div>
    </section>

    <section class="features" id="services">
        <div class="container">
            <h2>Our Services</h2>
            <div class="features-grid">
                <div class="feature-card">
                    <h3>Fast Delivery</h3>
                    <p>Efficient solutions built with current technology.</p>
                </div>
                <div class="feature-card">
                    <h3>Fresh Ideas</h3>
                    <p>Strategies that make your brand stand out.</p>
                </div>
                <div class="feature-card">
                    <h3>Proven Results</h3>
                    <p>Outcomes that exceed your expectations.</p>
                </div>
            </div>
        </div>
    </section>

    <section class="cta" id="contact">
        <div class="container">
            <h2>Ready to Begin?</h2>
            <p>Contact us today and find out how we can help you reach your goals</p>
            <a href="mailto:hello@example.com" class="btn">Contact Us</a>
        </div>
    </section>

    <footer>
        <div class="container">
            <p>&copy; My Company. All rights reserved.</p>
        </div>
    </footer>
</body>
</html>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::landing::{
        build_generation_prompt, build_modification_prompt, is_complete, parse_model_response,
    };
    use crate::ports::RequestMetadata;

    fn request(kind: TransformationKind, system: &str, user: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(kind, "demo-trace"))
            .with_message(MessageRole::System, system)
            .with_message(MessageRole::User, user)
    }

    #[test]
    fn theme_follows_subject_keywords() {
        assert_eq!(DemoTheme::from_description("An Italian restaurant").name, "Restaurant");
        assert_eq!(DemoTheme::from_description("A medical clinic").name, "Health");
        assert_eq!(DemoTheme::from_description("An online course").name, "Education");
        assert_eq!(DemoTheme::from_description("A SaaS product"), DemoTheme::TECHNOLOGY);
    }

    #[test]
    fn colour_keywords_only_apply_to_default_theme() {
        assert_eq!(DemoTheme::from_description("a red startup").primary_color, "#dc3545");
        assert_eq!(DemoTheme::from_description("a green startup").primary_color, "#28a745");
        assert_eq!(
            DemoTheme::from_description("a red restaurant").primary_color,
            "#ff6b35"
        );
    }

    #[tokio::test]
    async fn generation_returns_complete_themed_page() {
        let prompt = build_generation_prompt("A landing page for a food truck");
        let provider = DemoProvider::new();

        let response = provider
            .complete(request(
                TransformationKind::Generation,
                &prompt.system_role,
                &prompt.user_message,
            ))
            .await
            .unwrap();

        assert!(is_complete(&response.content));
        assert!(response.content.contains("<style>"));
        assert!(response.content.contains("Restaurant"));
        assert_eq!(response.model, DEMO_MODEL);
    }

    #[tokio::test]
    async fn modification_echoes_document_in_dual_sections() {
        let document = "<!DOCTYPE html><html><head></head><body><h1>Hi</h1></body></html>";
        let prompt = build_modification_prompt(document, "make it blue", "ctx");
        let provider = DemoProvider::new();

        let response = provider
            .complete(request(
                TransformationKind::Modification,
                &prompt.system_role,
                &prompt.user_message,
            ))
            .await
            .unwrap();
        let parsed = parse_model_response(&response.content);

        assert!(!parsed.used_fallback);
        assert_eq!(parsed.document, document);
        assert_eq!(parsed.summary, DEMO_MODIFICATION_SUMMARY);
    }

    #[test]
    fn every_theme_renders_a_complete_page() {
        for description in ["a bakery", "a food truck", "a doctor", "a course", "a red app"] {
            let page = render_landing(DemoTheme::from_description(description));
            assert!(is_complete(&page));
            assert!(page.contains("href=\"#home\""));
        }
        assert!(is_complete(&render_landing(DemoTheme::TECHNOLOGY)));
    }

    #[tokio::test]
    async fn instruction_repeating_the_header_does_not_leak_into_echo() {
        let document = "<!DOCTYPE html><html><head></head><body><h1>Hi</h1></body></html>";
        let instruction = format!("{INSTRUCTION_HEADER} make it blue");
        let prompt = build_modification_prompt(document, &instruction, "ctx");

        let response = DemoProvider::new()
            .complete(request(
                TransformationKind::Modification,
                &prompt.system_role,
                &prompt.user_message,
            ))
            .await
            .unwrap();

        assert_eq!(parse_model_response(&response.content).document, document);
    }

    #[tokio::test]
    async fn modification_without_current_code_is_rejected() {
        let provider = DemoProvider::new();

        let err = provider
            .complete(request(TransformationKind::Modification, "sys", "just text"))
            .await
            .unwrap_err();

        assert!(matches!(err, AIError::InvalidRequest(_)));
    }
}
