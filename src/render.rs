//! Markup generation for the listing regions.
//!
//! Templates are compiled into the binary so client-appended cards match the
//! server-rendered ones without a template directory at runtime.

use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::listing::ListingRecord;
use crate::dto::card::CardView;
use crate::pagination::PageStrip;

const CARD_TEMPLATE: &str = "listing/card.html";
const PAGE_STRIP_TEMPLATE: &str = "listing/page_strip.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Clone)]
pub struct ListingRenderer {
    tera: Tera,
    auth_required: bool,
}

impl ListingRenderer {
    pub fn new() -> RenderResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (CARD_TEMPLATE, include_str!("../templates/listing/card.html")),
            (
                PAGE_STRIP_TEMPLATE,
                include_str!("../templates/listing/page_strip.html"),
            ),
        ])?;
        // View models carry pre-escaped values.
        tera.autoescape_on(vec![]);

        Ok(Self {
            tera,
            auth_required: false,
        })
    }

    /// Marks rendered like buttons as requiring a login before toggling.
    #[must_use]
    pub fn with_auth_required(mut self, auth_required: bool) -> Self {
        self.auth_required = auth_required;
        self
    }

    pub fn render_card(&self, record: &ListingRecord) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("card", &CardView::new(record, self.auth_required));
        Ok(self.tera.render(CARD_TEMPLATE, &context)?)
    }

    pub fn render_cards(&self, records: &[ListingRecord]) -> RenderResult<String> {
        records.iter().try_fold(String::new(), |mut html, record| {
            html.push_str(&self.render_card(record)?);
            Ok(html)
        })
    }

    pub fn render_page_strip(&self, current: usize, total: usize) -> RenderResult<String> {
        let mut context = Context::new();
        context.insert("strip", &PageStrip::new(current, total));
        Ok(self.tera.render(PAGE_STRIP_TEMPLATE, &context)?)
    }
}
