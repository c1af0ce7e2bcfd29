//! Metadata extraction from a parsed page.
//!
//! Each [`MetadataField`] has an ordered chain of [`Matcher`]s. The first
//! matcher yielding a non-empty value wins; when none does, the field falls
//! back to a [`MetadataDefaults`] value. Every field produces exactly one
//! checklist entry.

use crate::config::MetadataFallbacks;
use crate::models::{ChecklistEntry, MetadataField, PageMetadata};
use crate::scrapers::page::ParsedPage;
use chrono::NaiveDateTime;
use tracing::{debug, instrument};

/// Timestamp format of defaulted `published` / `modified` values.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A named predicate locating one value in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `<meta property="…" content="…">`
    MetaProperty(&'static str),
    /// `<meta name="…" content="…">`
    MetaName(&'static str),
    /// Text of the first `<title>` element.
    TitleElement,
}

impl Matcher {
    /// Run the matcher against the page. Only the first element matching the
    /// attribute is consulted; a `<meta>` without `content` yields nothing.
    pub fn find(self, page: &ParsedPage) -> Option<String> {
        let found = match self {
            Matcher::MetaProperty(key) => meta_content(page, "property", key),
            Matcher::MetaName(key) => meta_content(page, "name", key),
            Matcher::TitleElement => page
                .elements
                .iter()
                .find(|el| el.tag == "title")
                .map(|el| el.text.clone()),
        };
        found.filter(|value| !value.is_empty())
    }
}

fn meta_content(page: &ParsedPage, attr: &str, key: &str) -> Option<String> {
    page.elements
        .iter()
        .find(|el| el.tag == "meta" && el.attr(attr) == Some(key))
        .and_then(|el| el.attr("content"))
        .map(|content| content.trim().to_string())
}

/// The matcher chain for a field, highest priority first.
pub fn matchers(field: MetadataField) -> &'static [Matcher] {
    match field {
        MetadataField::Title => &[Matcher::MetaProperty("og:title"), Matcher::TitleElement],
        MetadataField::Description => &[
            Matcher::MetaProperty("og:description"),
            Matcher::MetaName("description"),
        ],
        MetadataField::Image => &[Matcher::MetaProperty("og:image")],
        MetadataField::Author => &[Matcher::MetaName("author")],
        MetadataField::Published => &[Matcher::MetaProperty("article:published_time")],
        MetadataField::Modified => &[Matcher::MetaProperty("article:modified_time")],
        MetadataField::Keywords => &[Matcher::MetaName("keywords")],
    }
}

/// Fallback values for one extraction run.
#[derive(Debug, Clone)]
pub struct MetadataDefaults {
    fallbacks: MetadataFallbacks,
    keywords: String,
    timestamp: String,
}

impl MetadataDefaults {
    pub fn new(fallbacks: &MetadataFallbacks, category: &str, now: NaiveDateTime) -> Self {
        Self {
            fallbacks: fallbacks.clone(),
            keywords: default_keywords(category),
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Title => &self.fallbacks.title,
            MetadataField::Description => &self.fallbacks.description,
            MetadataField::Image => &self.fallbacks.image,
            MetadataField::Author => &self.fallbacks.author,
            MetadataField::Published | MetadataField::Modified => &self.timestamp,
            MetadataField::Keywords => &self.keywords,
        }
    }
}

/// Keyword string used when the page declares none.
pub fn default_keywords(category: &str) -> String {
    format!("{}, Education, Training", category)
}

/// Extract [`PageMetadata`] from the page, with one checklist entry per
/// field in [`MetadataField::ALL`] order.
#[instrument(level = "info", skip_all)]
pub fn extract_metadata(
    page: &ParsedPage,
    defaults: &MetadataDefaults,
) -> (PageMetadata, Vec<ChecklistEntry>) {
    let mut checklist = Vec::with_capacity(MetadataField::ALL.len());
    let mut resolve = |field: MetadataField| -> String {
        match matchers(field).iter().find_map(|m| m.find(page)) {
            Some(value) => {
                checklist.push(ChecklistEntry::extracted(field));
                value
            }
            None => {
                checklist.push(ChecklistEntry::defaulted(field));
                defaults.get(field).to_string()
            }
        }
    };

    let metadata = PageMetadata {
        title: resolve(MetadataField::Title),
        description: resolve(MetadataField::Description),
        image: resolve(MetadataField::Image),
        author: resolve(MetadataField::Author),
        published: resolve(MetadataField::Published),
        modified: resolve(MetadataField::Modified),
        keywords: resolve(MetadataField::Keywords),
    };

    for (field, entry) in MetadataField::ALL.iter().zip(&checklist) {
        debug!(
            field = field.label(),
            status = ?entry.status,
            value = metadata.get(*field),
            "Resolved metadata field"
        );
    }
    (metadata, checklist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChecklistStatus;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 17)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 123_456)
            .unwrap()
    }

    fn defaults(category: &str) -> MetadataDefaults {
        MetadataDefaults::new(&MetadataFallbacks::default(), category, now())
    }

    const FULL_PAGE: &str = r#"<html><head>
        <title>Fallback Title</title>
        <meta property="og:title" content="  Pivot Tables Explained  ">
        <meta name="description" content="Plain description">
        <meta property="og:image" content="https://example.com/pivot.png">
        <meta name="author" content="Asha Mehta">
        <meta property="article:published_time" content="2025-09-01T10:00:00+05:30">
        <meta property="article:modified_time" content="2025-09-02T10:00:00+05:30">
        <meta name="keywords" content="excel, pivot tables">
        </head><body><p>Body</p></body></html>"#;

    #[test]
    fn test_extracts_every_field() {
        let page = ParsedPage::parse(FULL_PAGE);
        let (meta, checklist) = extract_metadata(&page, &defaults("Advanced Excel"));

        assert_eq!(meta.title, "Pivot Tables Explained");
        assert_eq!(meta.description, "Plain description");
        assert_eq!(meta.image, "https://example.com/pivot.png");
        assert_eq!(meta.author, "Asha Mehta");
        assert_eq!(meta.published, "2025-09-01T10:00:00+05:30");
        assert_eq!(meta.modified, "2025-09-02T10:00:00+05:30");
        assert_eq!(meta.keywords, "excel, pivot tables");

        assert_eq!(checklist.len(), 7);
        assert!(checklist
            .iter()
            .all(|entry| entry.status == ChecklistStatus::Extracted));
    }

    #[test]
    fn test_title_element_fallback() {
        let page = ParsedPage::parse("<html><head><title> Only Title </title></head></html>");
        let (meta, checklist) = extract_metadata(&page, &defaults("Python"));
        assert_eq!(meta.title, "Only Title");
        assert_eq!(checklist[0].status, ChecklistStatus::Extracted);
    }

    #[test]
    fn test_og_description_wins_over_name() {
        let page = ParsedPage::parse(
            r#"<head><meta name="description" content="name"><meta property="og:description" content="og"></head>"#,
        );
        let (meta, _) = extract_metadata(&page, &defaults("Python"));
        assert_eq!(meta.description, "og");
    }

    #[test]
    fn test_empty_content_falls_through() {
        let page = ParsedPage::parse(
            r#"<head><title>Real</title><meta property="og:title" content="   "></head>"#,
        );
        let (meta, _) = extract_metadata(&page, &defaults("Python"));
        assert_eq!(meta.title, "Real");
    }

    #[test]
    fn test_every_field_defaulted_on_bare_page() {
        let page = ParsedPage::parse("<html><body><p>Nothing here</p></body></html>");
        let (meta, checklist) = extract_metadata(&page, &defaults("Python"));

        let fallbacks = MetadataFallbacks::default();
        assert_eq!(meta.title, "Untitled Blog Post");
        assert_eq!(meta.description, fallbacks.description);
        assert_eq!(meta.image, fallbacks.image);
        assert_eq!(meta.author, "Siddharth Parakh");
        assert_eq!(meta.published, "2025-10-17T09:30:00.123456");
        assert_eq!(meta.modified, meta.published);
        assert_eq!(meta.keywords, "Python, Education, Training");

        for field in MetadataField::ALL {
            assert!(!meta.get(field).is_empty());
        }
        assert!(checklist
            .iter()
            .all(|entry| entry.status == ChecklistStatus::Defaulted));
        assert_eq!(checklist[6].field, "Keywords");
    }

    #[test]
    fn test_default_keywords_exact() {
        assert_eq!(
            default_keywords("Power BI"),
            "Power BI, Education, Training"
        );
    }

    #[test]
    fn test_meta_without_content_is_missing() {
        let page = ParsedPage::parse(r#"<head><meta name="author"></head>"#);
        assert_eq!(Matcher::MetaName("author").find(&page), None);
    }
}
