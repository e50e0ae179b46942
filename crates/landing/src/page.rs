//! Server-side rendering of the two-column page.

use handlebars::Handlebars;
use landing_core::session::{PreviewView, SessionState};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::notice::Notice;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.hbs");

pub const PAGE_TITLE: &str = "🚀 AI Landing Page Generator";
pub const PREVIEW_HEIGHT: u32 = 800;
const TEXTAREA_HEIGHT: u32 = 250;
const INTRO: &str =
    "Describe the landing page you want, and our AI will generate it for you!";
const TEXTAREA_LABEL: &str = "Describe your landing page here (e.g. 'A modern, minimalist \
     landing page for an online coaching service, with a call-to-action button to sign up \
     for a free session, and testimonials.')";
const TEXTAREA_PLACEHOLDER: &str =
    "Describe the content, style, sections and calls to action of your landing page...";

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page template is invalid: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("page rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Everything one render needs.
#[derive(Debug)]
pub struct PageContext<'a> {
    pub session_id: Uuid,
    pub session: &'a SessionState,
    pub description: &'a str,
    pub notice: Option<&'a Notice>,
    pub loading: bool,
}

#[derive(Serialize)]
struct PreviewModel<'a> {
    markup: Option<&'a str>,
    empty: bool,
    height: u32,
}

#[derive(Serialize)]
struct PageModel<'a> {
    page_title: &'static str,
    intro: &'static str,
    textarea_label: &'static str,
    textarea_placeholder: &'static str,
    textarea_height: u32,
    session: String,
    description: &'a str,
    notice: Option<&'a Notice>,
    loading: bool,
    preview: PreviewModel<'a>,
}

pub struct PageRenderer {
    hbs: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, PageError> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string("index", INDEX_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { hbs })
    }

    /// Render the page. All interpolated values, including the generated
    /// markup placed in the iframe's `srcdoc`, are HTML-escaped.
    pub fn render(&self, ctx: &PageContext<'_>) -> Result<String, PageError> {
        let preview = match ctx.session.preview() {
            PreviewView::Idle => PreviewModel {
                markup: None,
                empty: false,
                height: PREVIEW_HEIGHT,
            },
            PreviewView::NoPreview => PreviewModel {
                markup: None,
                empty: true,
                height: PREVIEW_HEIGHT,
            },
            PreviewView::Embedded(markup) => PreviewModel {
                markup: Some(markup),
                empty: false,
                height: PREVIEW_HEIGHT,
            },
        };

        let model = PageModel {
            page_title: PAGE_TITLE,
            intro: INTRO,
            textarea_label: TEXTAREA_LABEL,
            textarea_placeholder: TEXTAREA_PLACEHOLDER,
            textarea_height: TEXTAREA_HEIGHT,
            session: ctx.session_id.to_string(),
            description: ctx.description,
            notice: ctx.notice,
            loading: ctx.loading,
            preview,
        };

        Ok(self.hbs.render("index", &model)?)
    }
}
