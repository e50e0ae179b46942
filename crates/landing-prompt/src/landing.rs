//! The fixed instructions wrapped around every user description.
//!
//! The directives below are requirements on the *model's* output.  Nothing
//! in this crate checks that the returned markup honours them.

use landing_core::{
    model::{GeminiModel, Model},
    template::{Prompt, PromptTemplate},
};

use crate::builder::PromptBuilder;

pub const TAILWIND_CDN_SCRIPT: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;
pub const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/800x500/A855F7/FFFFFF?text=Image";
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "Hero",
    "Features",
    "Testimonials",
    "Call to Action",
    "Contact",
    "Footer",
];

/// A landing page request: the user's free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPagePrompt {
    description: String,
}

impl LandingPagePrompt {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PromptTemplate for LandingPagePrompt {
    const MODEL: Model = Model::Gemini(GeminiModel::Gemini2_0Flash);

    fn into_prompt(self) -> Prompt {
        let directives = [
            "A `<!DOCTYPE html>` declaration and the `<html>`, `<head>` and `<body>` tags.".to_owned(),
            format!("The Tailwind CSS CDN in the `<head>`: `{TAILWIND_CDN_SCRIPT}`."),
            format!("A `{VIEWPORT_META}` tag."),
            "An appropriate title in the `<title>` tag.".to_owned(),
            format!("Clear sections ({}).", REQUIRED_SECTIONS.join(", ")),
            "Tailwind CSS classes for an aesthetic and responsive design.".to_owned(),
            format!("Placeholders for images where needed (e.g., {PLACEHOLDER_IMAGE_URL})."),
            "The HTML must be valid and well structured.".to_owned(),
        ];

        let builder = PromptBuilder::new()
            .add_line(
                "Generate the complete HTML code for a responsive, modern landing page \
                 using Tailwind CSS.",
            )
            .add_line("The content of the page must be based on the following description:")
            .add_quoted(&self.description)
            .add_blank_line()
            .add_line("Make sure the HTML includes:");

        let builder = directives
            .iter()
            .enumerate()
            .fold(builder, |builder, (i, line)| builder.add_numbered(i + 1, line));

        builder
            .add_blank_line()
            .add_line(
                "Do NOT generate JavaScript for dynamic features (such as form submission). \
                 No scripting except CSS animations and transitions that need no backend.",
            )
            .add_line("The generated code must be ONLY the HTML, with no surrounding commentary.")
            .finalize()
            .into()
    }
}

/// Embed `description` verbatim in the fixed landing page instructions.
pub fn build(description: &str) -> Prompt {
    LandingPagePrompt::new(description).into_prompt()
}
