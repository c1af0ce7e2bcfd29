//! Fetching a page and flattening it into a normalized element list.
//!
//! The heuristics downstream only need three things from an element: its
//! tag name, its attributes and its text. [`ParsedPage`] keeps exactly that,
//! in document order, so matchers can be written as plain predicates and
//! tested without going through the HTML parser.

use crate::config::FetchSettings;
use crate::error::GeneratorError;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

static ALL_ELEMENTS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("*").expect("valid universal selector"));

/// Fetch the raw HTML of a page.
///
/// Any transport error, a timeout, or a non-2xx status is a
/// [`GeneratorError::Fetch`]. There is no retry.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_page(url: &Url, settings: &FetchSettings) -> Result<String, GeneratorError> {
    let client = Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;

    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let status = response.status();
    let body = response.text().await?;

    info!(status = status.as_u16(), bytes = body.len(), "Fetched page");
    debug!(preview = %truncate_for_log(&body, 200), "Page body");
    Ok(body)
}

/// One element of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    /// Lower-case tag name.
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// Concatenated text of the element and its descendants, trimmed.
    pub text: String,
}

impl PageElement {
    fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        Self {
            tag: value.name().to_ascii_lowercase(),
            attrs: value
                .attrs()
                .map(|(name, val)| (name.to_string(), val.to_string()))
                .collect(),
            text: element.text().collect::<String>().trim().to_string(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, val)| val.as_str())
    }

    pub fn is_any(&self, tags: &[&str]) -> bool {
        tags.contains(&self.tag.as_str())
    }
}

/// A parsed page: every element in document order plus the full text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub elements: Vec<PageElement>,
    /// All text nodes joined with single spaces, original case.
    pub text: String,
}

impl ParsedPage {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let elements: Vec<PageElement> = document
            .select(&ALL_ELEMENTS)
            .map(PageElement::from_element)
            .collect();
        let text = document.root_element().text().collect::<Vec<_>>().join(" ");

        debug!(elements = elements.len(), chars = text.len(), "Parsed page");
        Self { elements, text }
    }

    /// First element at or after `start` whose tag is one of `tags`.
    pub fn next_tagged(&self, start: usize, tags: &[&str]) -> Option<&PageElement> {
        self.elements.iter().skip(start).find(|el| el.is_any(tags))
    }
}
