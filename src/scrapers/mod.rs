//! Page fetching and scraping for the auto-generator.
//!
//! The scrape runs in three steps, each in its own submodule:
//!
//! 1. **Fetching and parsing** ([`page`]): download the page with a single
//!    GET and flatten it into a [`page::ParsedPage`], an ordered list of
//!    elements plus the page text
//! 2. **Extraction** ([`metadata`]): read title, description, image,
//!    author, timestamps and keywords from the page's metadata tags
//! 3. **Enrichment** ([`signals`]): derive keywords, topics, audience and
//!    FAQ entries from the page text
//!
//! # Common Patterns
//!
//! Extraction and enrichment never fail: anything missing from the page is
//! replaced by a default. Only the fetch can abort a run.

pub mod metadata;
pub mod page;
pub mod signals;
