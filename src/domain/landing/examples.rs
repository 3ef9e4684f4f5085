//! Sample inputs offered to clients as starting points.

/// Example descriptions for initial generation.
pub const GENERATION_EXAMPLES: &[&str] = &[
    "A landing page for a digital marketing agency with blue tones, a hero section, services and contact",
    "A landing page for an Italian restaurant with a dish gallery, menu and online reservations",
    "A product page for a fitness mobile app with testimonials and download buttons",
    "A landing page for an online programming course with pricing and testimonials",
    "A corporate page for a consulting firm with team, services and success stories",
];

/// Example instructions for conversational modification.
pub const MODIFICATION_EXAMPLES: &[&str] = &[
    "Change the background color to blue",
    "Add a contact form to the hero section",
    "Change the main title to 'Welcome to our company'",
    "Make it responsive for mobile devices",
    "Add a testimonials section after the hero",
    "Switch the typography to a more modern font",
    "Add social media buttons to the footer",
    "Make the colors look more professional",
];
