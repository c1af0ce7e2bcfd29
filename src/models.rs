//! Data models for the auto-generator pipeline.
//!
//! This module defines the values handed from one pipeline stage to the
//! next:
//! - [`PageMetadata`]: metadata pulled from the fetched page, every field
//!   either extracted or defaulted
//! - [`EnrichedSignals`]: keywords, topics, audience and FAQ entries derived
//!   from the page text
//! - [`ChecklistEntry`]: user-facing record of where each value came from
//!
//! All of them are built fresh for a single run and dropped after the
//! document is written.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The metadata fields the extractor looks for, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Title,
    Description,
    Image,
    Author,
    Published,
    Modified,
    Keywords,
}

impl MetadataField {
    pub const ALL: [MetadataField; 7] = [
        MetadataField::Title,
        MetadataField::Description,
        MetadataField::Image,
        MetadataField::Author,
        MetadataField::Published,
        MetadataField::Modified,
        MetadataField::Keywords,
    ];

    /// Label used in the checklist.
    pub fn label(self) -> &'static str {
        match self {
            MetadataField::Title => "Title",
            MetadataField::Description => "Description",
            MetadataField::Image => "Image",
            MetadataField::Author => "Author",
            MetadataField::Published => "Published",
            MetadataField::Modified => "Modified",
            MetadataField::Keywords => "Keywords",
        }
    }
}

/// Metadata of the fetched page.
///
/// There are no optional fields: the extractor substitutes a default for
/// anything the page does not provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub image: String,
    pub author: String,
    pub published: String,
    pub modified: String,
    /// Raw comma-separated keyword string.
    pub keywords: String,
}

impl PageMetadata {
    pub fn get(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Title => &self.title,
            MetadataField::Description => &self.description,
            MetadataField::Image => &self.image,
            MetadataField::Author => &self.author,
            MetadataField::Published => &self.published,
            MetadataField::Modified => &self.modified,
            MetadataField::Keywords => &self.keywords,
        }
    }
}

/// A schema.org `Thing` the article is about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AboutTopic {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

impl AboutTopic {
    pub fn thing(name: impl Into<String>) -> Self {
        Self {
            kind: "Thing".to_string(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Where the FAQ entries of a run came from. Scraped and synthesized entries
/// are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqSource {
    Scraped,
    Synthesized,
}

/// Signals derived from the page text rather than read from its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedSignals {
    /// Title-cased, deduplicated, in first-seen order.
    pub keywords: Vec<String>,
    /// Category first, at most seven entries.
    pub about: Vec<AboutTopic>,
    pub audience: Vec<String>,
    pub faq: Vec<FaqEntry>,
    pub faq_source: FaqSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistStatus {
    Extracted,
    Defaulted,
    Derived,
}

/// One line of the field update report shown after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub field: String,
    pub status: ChecklistStatus,
    pub detail: String,
}

impl ChecklistEntry {
    pub fn extracted(field: MetadataField) -> Self {
        Self {
            field: field.label().to_string(),
            status: ChecklistStatus::Extracted,
            detail: "Extracted from site".to_string(),
        }
    }

    pub fn defaulted(field: MetadataField) -> Self {
        Self {
            field: field.label().to_string(),
            status: ChecklistStatus::Defaulted,
            detail: "Default used (not found on page)".to_string(),
        }
    }

    pub fn derived(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            status: ChecklistStatus::Derived,
            detail: detail.into(),
        }
    }

    /// Defaulted entries deserve the user's attention; everything else is
    /// informational.
    pub fn needs_attention(&self) -> bool {
        self.status == ChecklistStatus::Defaulted
    }
}

impl fmt::Display for ChecklistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.needs_attention() { "⚠️" } else { "✅" };
        write!(f, "{} {} — {}", marker, self.field, self.detail)
    }
}
