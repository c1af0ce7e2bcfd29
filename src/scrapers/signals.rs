//! Signals derived from page content.
//!
//! Everything here is a heuristic over the page text and element list:
//! word frequencies for keywords, substring presence for audience labels,
//! and question-shaped headings for FAQ entries. The output is fully
//! deterministic: lists keep first-seen order.

use crate::models::{AboutTopic, EnrichedSignals, FaqEntry, FaqSource, PageMetadata};
use crate::scrapers::page::ParsedPage;
use crate::utils::title_case;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]{4,}").expect("valid word regex"));

const COMMON_TERM_LIMIT: usize = 25;
const KEYWORD_TERM_LIMIT: usize = 10;
const ABOUT_CANDIDATES: usize = 6;

const AUDIENCE_VOCABULARY: [&str; 5] = [
    "students",
    "professionals",
    "analysts",
    "learners",
    "developers",
];
const DEFAULT_AUDIENCE: [&str; 2] = ["Students", "Professionals"];

const FAQ_QUESTION_TAGS: [&str; 6] = ["h2", "h3", "strong", "details", "summary", "p"];
const FAQ_ANSWER_TAGS: [&str; 2] = ["p", "div"];
const MISSING_ANSWER: &str = "Answer not found.";

/// Derive [`EnrichedSignals`] for a page.
#[instrument(level = "info", skip_all, fields(%category))]
pub fn enrich(metadata: &PageMetadata, category: &str, page: &ParsedPage) -> EnrichedSignals {
    let content = page.text.to_lowercase();

    let common_terms = common_terms(&content, COMMON_TERM_LIMIT);
    let keywords = keyword_set(&metadata.keywords, category, &common_terms);
    let about = about_topics(category, &keywords);
    let audience = detect_audience(&content);

    let scraped = scrape_faq(page);
    let (faq, faq_source) = if scraped.is_empty() {
        (synthesize_faq(category), FaqSource::Synthesized)
    } else {
        (scraped, FaqSource::Scraped)
    };

    debug!(?common_terms, "Most frequent terms");
    info!(
        keywords = keywords.len(),
        about = about.len(),
        audience = %audience.join(", "),
        faq = faq.len(),
        ?faq_source,
        "Enriched page signals"
    );

    EnrichedSignals {
        keywords,
        about,
        audience,
        faq,
        faq_source,
    }
}

/// The `limit` most frequent words of four or more letters in already
/// lower-cased text. Ties keep the order in which the words first appear.
pub fn common_terms(content: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in WORD_RE.find_iter(content).map(|m| m.as_str()).enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    counts
        .into_iter()
        .sorted_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        })
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Merge explicit keywords, the category and the top content words into one
/// title-cased list without duplicates.
pub fn keyword_set(explicit: &str, category: &str, common_terms: &[String]) -> Vec<String> {
    explicit
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(title_case)
        .chain(std::iter::once(title_case(category)))
        .chain(
            common_terms
                .iter()
                .take(KEYWORD_TERM_LIMIT)
                .map(|term| title_case(term)),
        )
        .unique()
        .collect()
}

/// Category first, then up to six of the leading keywords not already
/// present (compared case-insensitively).
pub fn about_topics(category: &str, keywords: &[String]) -> Vec<AboutTopic> {
    let mut topics = vec![AboutTopic::thing(title_case(category))];
    for keyword in keywords.iter().take(ABOUT_CANDIDATES) {
        let lowered = keyword.to_lowercase();
        if !topics.iter().any(|t| t.name.to_lowercase() == lowered) {
            topics.push(AboutTopic::thing(keyword.clone()));
        }
    }
    topics
}

/// Audience labels whose term appears anywhere in the lower-cased text.
pub fn detect_audience(content: &str) -> Vec<String> {
    let detected: Vec<String> = AUDIENCE_VOCABULARY
        .iter()
        .filter(|term| content.contains(*term))
        .map(|term| title_case(term))
        .collect();

    if detected.is_empty() {
        DEFAULT_AUDIENCE.iter().map(|s| s.to_string()).collect()
    } else {
        detected
    }
}

fn looks_like_question(text: &str) -> bool {
    let lowered = text.to_lowercase();
    text.contains('?') || lowered.starts_with("q:") || lowered.starts_with("question")
}

/// Question-shaped headings and paragraphs, each paired with the next
/// paragraph or container in document order.
///
/// The pairing is positional, so irregular markup can attach the wrong
/// answer to a question. Nested matches (a `<strong>` inside a `<p>`) are
/// both kept.
pub fn scrape_faq(page: &ParsedPage) -> Vec<FaqEntry> {
    page.elements
        .iter()
        .enumerate()
        .filter(|(_, el)| el.is_any(&FAQ_QUESTION_TAGS) && looks_like_question(&el.text))
        .map(|(index, el)| FaqEntry {
            question: el.text.clone(),
            answer: page
                .next_tagged(index + 1, &FAQ_ANSWER_TAGS)
                .map(|answer| answer.text.clone())
                .unwrap_or_else(|| MISSING_ANSWER.to_string()),
        })
        .collect()
}

/// The three template entries used when a page has no FAQ content.
pub fn synthesize_faq(category: &str) -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: format!("What is {}?", category),
            answer: format!(
                "This blog explains {} concepts with practical examples.",
                category
            ),
        },
        FaqEntry {
            question: format!("Who should learn {}?", category),
            answer: format!(
                "{} is ideal for students and professionals in analytics, business, or technology.",
                category
            ),
        },
        FaqEntry {
            question: format!("How does this blog help in {}?", category),
            answer: format!(
                "This blog provides step-by-step {} tutorials and use cases for real-world applications.",
                category
            ),
        },
    ]
}
