//! Builder-style helper for constructing **Markdown prompts**.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use landing_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_line("Make sure the page includes:")
//!     .add_numbered(1, "A hero section.")
//!     .add_blank_line()
//!     .add_quoted("A bakery in Lyon")
//!     .finalize();
//!
//! assert!(md.starts_with("Make sure the page includes:\n1. A hero section.\n\n"));
//! ```
//!
//! The builder performs **no validation** and no smart formatting: newlines
//! and whitespace are emitted exactly as requested, and interpolated values
//! are copied verbatim.

use std::fmt::Display;

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Call [`Self::finalize`] to obtain the assembled text.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        self.buffer.push_str(&line.to_string());
        self.buffer.push('\n');
        self
    }

    /// Add an item of a numbered list: `3. text`.
    pub fn add_numbered(self, index: usize, line: impl Display) -> Self {
        self.add_line(format_args!("{index}. {line}"))
    }

    /// Add `"text"` on its own line. The content is not escaped.
    pub fn add_quoted(self, content: impl Display) -> Self {
        self.add_line(format_args!("\"{content}\""))
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
