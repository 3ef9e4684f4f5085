//! Landing Page Domain Module
//!
//! Pure logic of the AI-mediated document transformation pipeline. Nothing in
//! here performs I/O; the model is reached through the `AIProvider` port from
//! the application layer.
//!
//! # Components
//!
//! - **Prompts**: system and user instructions for generation and modification
//! - **Conversation**: bounded context block built from the caller's history
//! - **Response parser**: dual-section split of modification responses
//! - **HTML normalizer**: fence stripping and complete-shell guarantee
//! - **Upstream**: classification of model provider failures
//! - **Validation**: input constraints enforced before any model call
//!
//! # Example
//!
//! ```
//! use landing_studio::domain::landing::{ensure_complete, is_complete, strip_code_fences};
//!
//! let raw = "```html\n<h1>Fresh bread</h1>\n```";
//! let document = ensure_complete(&strip_code_fences(raw));
//! assert!(is_complete(&document));
//! ```

pub mod conversation;
pub mod error_document;
pub mod examples;
pub mod html_normalizer;
pub mod prompts;
pub mod response_parser;
pub mod upstream;
pub mod validation;

pub use conversation::*;
pub use error_document::*;
pub use examples::*;
pub use html_normalizer::{ensure_complete, is_complete, strip_code_fences, DEFAULT_STYLES, DEFAULT_TITLE};
pub use prompts::*;
pub use response_parser::*;
pub use upstream::*;
pub use validation::*;
