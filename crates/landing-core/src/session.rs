//! Per-session storage of the latest generation outcome.
//!
//! One [`SessionState`] exists per interactive session.  It holds at most one
//! result: every generation attempt fully replaces the previous values, there
//! is no history.  The only ways to mutate it are [`SessionState::reset`],
//! [`SessionState::record_result`] and [`SessionState::record_no_attempt`];
//! rendering goes through the read-only [`SessionState::preview`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    generated_markup: String,
    show_preview: bool,
}

/// What the output area should display, derived solely from [`SessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewView<'a> {
    /// Nothing generated yet: show the "preview appears here" hint.
    Idle,
    /// An attempt finished without content: show "no preview available".
    NoPreview,
    /// Success banner plus an embedded rendering of the markup.
    Embedded(&'a str),
}

impl SessionState {
    /// A fresh, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.generated_markup.clear();
        self.show_preview = false;
    }

    /// Store the outcome of an attempt. `markup` may be empty.
    pub fn record_result(&mut self, markup: impl Into<String>) {
        self.generated_markup = markup.into();
        self.show_preview = true;
    }

    /// The trigger fired but nothing was (or could be) generated.
    pub fn record_no_attempt(&mut self) {
        self.generated_markup.clear();
        self.show_preview = false;
    }

    pub fn generated_markup(&self) -> &str {
        &self.generated_markup
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn preview(&self) -> PreviewView<'_> {
        match (self.show_preview, self.generated_markup.is_empty()) {
            (false, _) => PreviewView::Idle,
            (true, true) => PreviewView::NoPreview,
            (true, false) => PreviewView::Embedded(&self.generated_markup),
        }
    }
}
