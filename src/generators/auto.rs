//! The auto blog generator: fetch a live page and derive its schema.
//!
//! ```text
//! validate -> fetch -> parse -> extract -> enrich -> assemble -> render
//! ```
//!
//! Only validation and the fetch can fail. Once the page body is in hand,
//! the remaining stages run synchronously and always produce a document.

use crate::config::SiteProfile;
use crate::error::GeneratorError;
use crate::generators::GeneratedSchema;
use crate::models::ChecklistEntry;
use crate::outputs::checklist::derived_entries;
use crate::outputs::json::to_pretty_json;
use crate::outputs::jsonld::{StructuredDocument, assemble};
use crate::scrapers::metadata::{MetadataDefaults, extract_metadata};
use crate::scrapers::page::{ParsedPage, fetch_page};
use crate::scrapers::signals::enrich;
use chrono::{Local, NaiveDateTime};
use tracing::{info, instrument};
use url::Url;

pub const FILE_NAME: &str = "blog_schema.json";

/// Input of one auto-generator run.
#[derive(Debug, Clone)]
pub struct AutoRequest {
    pub url: String,
    /// Free-text category, e.g. "Advanced Excel" or "Python".
    pub category: String,
}

impl AutoRequest {
    pub fn new(url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            category: category.into(),
        }
    }

    /// The URL as supplied, minus surrounding whitespace.
    pub fn source_id(&self) -> &str {
        self.url.trim()
    }

    /// Reject blank or unparseable URLs before anything touches the network.
    pub fn validate(&self) -> Result<Url, GeneratorError> {
        let raw = self.source_id();
        if raw.is_empty() {
            return Err(GeneratorError::EmptyUrl);
        }
        Url::parse(raw).map_err(|source| GeneratorError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }
}

/// Result of the pure part of the pipeline.
#[derive(Debug, Clone)]
pub struct AutoOutcome {
    pub document: StructuredDocument,
    pub checklist: Vec<ChecklistEntry>,
}

/// Run the full pipeline for one request.
#[instrument(level = "info", skip(profile), fields(url = %request.url, category = %request.category))]
pub async fn run(
    request: &AutoRequest,
    profile: &SiteProfile,
) -> Result<GeneratedSchema, GeneratorError> {
    let url = request.validate()?;
    let html = fetch_page(&url, &profile.fetch).await?;
    let outcome = build(request, &url, &html, profile, Local::now().naive_local());

    Ok(GeneratedSchema {
        file_name: FILE_NAME.to_string(),
        json: to_pretty_json(&outcome.document)?,
        checklist: outcome.checklist,
    })
}

/// Turn a fetched page into a document and checklist.
pub fn build(
    request: &AutoRequest,
    url: &Url,
    html: &str,
    profile: &SiteProfile,
    now: NaiveDateTime,
) -> AutoOutcome {
    let category = request.category.as_str();
    let page = ParsedPage::parse(html);

    let defaults = MetadataDefaults::new(&profile.defaults, category, now);
    let (metadata, mut checklist) = extract_metadata(&page, &defaults);
    info!(title = %metadata.title, "Extracted page metadata");

    let signals = enrich(&metadata, category, &page);
    checklist.extend(derived_entries(&signals));

    let document = assemble(
        &metadata,
        &signals,
        category,
        request.source_id(),
        url,
        profile,
    );
    AutoOutcome {
        document,
        checklist,
    }
}
