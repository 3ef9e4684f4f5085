//! Prompt composition for the two transformation modes.
//!
//! Pure text assembly: no I/O, no branching on model output. The modification
//! prompt pins the dual-section response format that
//! [`parse_model_response`](super::parse_model_response) expects.

use super::response_parser::{DOCUMENT_MARKER, SUMMARY_MARKER};

/// System and user instructions for a single model invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system_role: String,
    pub user_message: String,
}

/// Label preceding the user's description in the generation prompt.
pub const REQUIREMENTS_LABEL: &str = "User requirements:";

/// Section header preceding the current document in the modification prompt.
pub const CURRENT_CODE_HEADER: &str = "CURRENT CODE:";

/// Section header preceding the instruction in the modification prompt.
pub const INSTRUCTION_HEADER: &str = "MODIFICATION INSTRUCTION:";

const GENERATION_SYSTEM_ROLE: &str = "You are an expert web developer who builds modern, \
attractive landing pages.

Output contract:
- Respond with a single complete HTML document and nothing else
- The response must begin with <!DOCTYPE html> and end with </html>
- Put all CSS inside one <style> element in the <head>
- Do not link external stylesheets, scripts, fonts or images
- Write clean, semantic HTML with basic accessibility in place
- Favour readable typography, attractive colours and cross-browser compatibility";

const MODIFICATION_SYSTEM_ROLE: &str = "You are an expert web developer specialised in \
precise modifications of existing landing pages.

Your job:
- Analyse the existing HTML/CSS
- Apply exactly the requested changes while keeping the structure
- Leave everything that does not need to change untouched
- Preserve functionality, responsiveness and accessibility
- Explain clearly which changes you made";

const GENERATION_CHECKLIST: &str = "Technical requirements:
- Include all CSS inside <style> tags in the <head>
- Use a modern, responsive, mobile-first layout
- Use attractive colours and legible typography
- Add subtle hover effects and smooth transitions
- Make it accessible (alt texts, semantic HTML, sufficient contrast)
- Keep it lightweight so it loads fast
- Do not explain anything, return only the complete HTML code
- The code must be ready to open directly in a browser

Recommended structure:
- Header with navigation
- Main hero section
- Content sections matching the requirements
- Footer with contact information";

/// Builds the prompt for an initial landing page generation.
pub fn build_generation_prompt(description: &str) -> PromptPair {
    let user_message = format!(
        "Generate a complete, modern landing page in HTML + CSS.\n\
         {REQUIREMENTS_LABEL} {description}\n\n\
         {GENERATION_CHECKLIST}"
    );

    PromptPair {
        system_role: GENERATION_SYSTEM_ROLE.to_string(),
        user_message,
    }
}

/// Builds the prompt for a conversational modification.
///
/// Sections appear in a fixed order: context block, current document,
/// instruction, response format directive.
pub fn build_modification_prompt(
    current_document: &str,
    instruction: &str,
    context_block: &str,
) -> PromptPair {
    let user_message = format!(
        "CONVERSATION CONTEXT:\n\
         {context_block}\n\n\
         {CURRENT_CODE_HEADER}\n\
         {current_document}\n\n\
         {INSTRUCTION_HEADER}\n\
         {instruction}\n\n\
         HOW TO APPLY THE MODIFICATION:\n\
         1. Analyse the current code and the modification instruction\n\
         2. Apply ONLY the requested changes\n\
         3. Keep the rest of the code intact\n\
         4. Preserve structure, functionality and responsiveness\n\
         5. Make sure the result is valid and working\n\n\
         REQUIRED RESPONSE FORMAT (both sections, in this order):\n\
         {DOCUMENT_MARKER}\n\
         [the complete modified HTML document]\n\n\
         {SUMMARY_MARKER}\n\
         [a short explanation of the changes you made]\n\n\
         IMPORTANT:\n\
         - Return the COMPLETE HTML document, not only the modified parts or a diff\n\
         - Keep all existing functionality\n\
         - Only change what was specifically requested"
    );

    PromptPair {
        system_role: MODIFICATION_SYSTEM_ROLE.to_string(),
        user_message,
    }
}
